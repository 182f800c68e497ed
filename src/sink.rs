//! Batch destinations.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::io_utils::io_error;
use crate::KeydumpError;

/// Consumer of serialized batches.
///
/// Batches arrive in production order and are written whole; a failed
/// write aborts the run.
pub trait BatchSink {
    fn write_batch(&mut self, batch: &[u8]) -> Result<(), KeydumpError>;

    /// Flush anything buffered. Called once after the final batch.
    fn finish(&mut self) -> Result<(), KeydumpError>;
}

/// Appends batches to a file.
///
/// The file is opened in append mode and never truncated; callers that
/// need a fresh artifact remove it first.
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self, KeydumpError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| io_error("opening output file", path, e))?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl BatchSink for FileSink {
    fn write_batch(&mut self, batch: &[u8]) -> Result<(), KeydumpError> {
        self.writer.write_all(batch)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), KeydumpError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory sink for tests and embedding.
impl BatchSink for Vec<u8> {
    fn write_batch(&mut self, batch: &[u8]) -> Result<(), KeydumpError> {
        self.extend_from_slice(batch);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), KeydumpError> {
        Ok(())
    }
}
