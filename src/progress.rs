//! Run telemetry, decoupled from enumeration.

use indicatif::{ProgressBar, ProgressStyle};

/// Receives batch completion events from the pipeline.
pub trait BatchObserver {
    /// Batch `index` (0-based) finished; `fraction` is the completed share
    /// of the keyspace, clamped to 1.0.
    fn batch_complete(&mut self, index: u64, fraction: f64);

    /// Enumeration finished.
    fn finished(&mut self);
}

/// Observer that reports nothing.
pub struct SilentObserver;

impl BatchObserver for SilentObserver {
    fn batch_complete(&mut self, _index: u64, _fraction: f64) {}

    fn finished(&mut self) {}
}

/// Refresh cadence in batches.
const REPORT_EVERY: u64 = 10;
/// Bar resolution; fractions are scaled to this span.
const BAR_SPAN: u64 = 10_000;

/// In-place console progress bar, refreshed on every tenth batch and
/// driven to 100% when the run completes.
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(BAR_SPAN);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}%")
                .expect("progress template is valid")
                .progress_chars("#>-"),
        );
        Self { bar }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchObserver for ConsoleProgress {
    fn batch_complete(&mut self, index: u64, fraction: f64) {
        if index % REPORT_EVERY == 0 {
            self.bar.set_position((fraction * BAR_SPAN as f64) as u64);
        }
    }

    fn finished(&mut self) {
        self.bar.set_position(BAR_SPAN);
        self.bar.finish();
    }
}
