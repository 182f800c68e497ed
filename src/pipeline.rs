//! End-to-end generation driver.

use std::time::{Duration, Instant};

use crate::batch::Batches;
use crate::progress::BatchObserver;
use crate::sink::BatchSink;
use crate::{Config, KeydumpError};

/// Totals for one generation pass.
#[derive(Debug)]
pub struct RunStats {
    start: Instant,
    /// Records emitted; equals the keyspace size on a completed run.
    pub records: u128,
    /// Batches appended to the sink.
    pub batches: u64,
    /// Artifact bytes written.
    pub bytes_written: u64,
}

impl RunStats {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            records: 0,
            batches: 0,
            bytes_written: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Artifact size in mebibytes.
    pub fn artifact_mib(&self) -> f64 {
        self.bytes_written as f64 / 1_048_576.0
    }

    /// Human readable completion line.
    pub fn report(&self) {
        eprintln!(
            "Done: {} records in {} batches, {:.2} MiB written in {:.2?}",
            self.records,
            self.batches,
            self.artifact_mib(),
            self.elapsed()
        );
    }
}

/// Run the full enumerate/hash/serialize pass.
///
/// Batches are appended to `sink` in index order as they complete;
/// `observer` hears about every finished batch and once at the end. A
/// sink error aborts the pass, leaving bytes already flushed in place.
pub fn generate(
    config: &Config,
    sink: &mut dyn BatchSink,
    observer: &mut dyn BatchObserver,
) -> Result<RunStats, KeydumpError> {
    let batches = Batches::new(config.alphabet(), config.length(), config.batch_size())?;
    let total = batches.total();
    let batch_size = config.batch_size() as u128;
    let mut stats = RunStats::new();
    let mut index: u64 = 0;
    for batch in batches {
        sink.write_batch(&batch)?;
        stats.batches += 1;
        stats.bytes_written += batch.len() as u64;
        let fraction = ((index as u128 * batch_size) as f64 / total as f64).min(1.0);
        observer.batch_complete(index, fraction);
        index += 1;
    }
    stats.records = total;
    sink.finish()?;
    observer.finished();
    Ok(stats)
}
