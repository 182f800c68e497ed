//! Runtime configuration and startup validation.

use std::fs;
use std::path::Path;

use sysinfo::{System, SystemExt};

use crate::batch::DIGEST_HEX_LEN;
use crate::io_utils::format_io_error;
use crate::keyspace::keyspace_size;
use crate::{Alphabet, KeydumpError};

/// Validated parameters for one generation run.
#[derive(Debug, Clone)]
pub struct Config {
    alphabet: Alphabet,
    length: u32,
    batch_size: u64,
    keyspace: u128,
}

impl Config {
    /// Validate and freeze run parameters.
    ///
    /// Rejects a zero length, a zero batch size and any combination whose
    /// keyspace does not fit the 128-bit index space, before any output
    /// is produced.
    pub fn new(alphabet: Alphabet, length: u32, batch_size: u64) -> Result<Self, KeydumpError> {
        if length == 0 {
            return Err(KeydumpError::Config("length must be at least 1".into()));
        }
        if batch_size == 0 {
            return Err(KeydumpError::Config("batch size must be at least 1".into()));
        }
        let keyspace = keyspace_size(alphabet.len(), length)?;
        Ok(Self {
            alphabet,
            length,
            batch_size,
            keyspace,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Total number of candidates.
    pub fn keyspace(&self) -> u128 {
        self.keyspace
    }

    /// Worst-case bytes held by one in-flight batch buffer.
    pub fn batch_footprint(&self) -> u128 {
        let record = self.length as u128 * self.alphabet.max_symbol_width() as u128
            + 2
            + DIGEST_HEX_LEN as u128;
        (self.batch_size as u128).min(self.keyspace) * record
    }

    /// Compare the batch buffer against available memory.
    ///
    /// Returns a warning when the buffer is unlikely to fit. Reported
    /// availability is advisory under cgroup limits, so callers warn
    /// rather than abort.
    pub fn memory_warning(&self) -> Option<String> {
        let mut sys = System::new();
        sys.refresh_memory();
        let available = sys.available_memory() as u128;
        if available == 0 {
            return None;
        }
        let needed = self.batch_footprint();
        if needed > available {
            Some(format!(
                "one batch of {} records needs up to {} MiB but about {} MiB are available; lower the batch size",
                self.batch_size,
                needed / (1024 * 1024),
                available / (1024 * 1024),
            ))
        } else {
            None
        }
    }
}

/// Read the candidate length from the side file.
///
/// The file carries a decimal integer on its first line; only that line
/// is consulted.
pub fn read_length<P: AsRef<Path>>(path: P) -> Result<u32, KeydumpError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| KeydumpError::Config(format_io_error("reading length file", path, &e)))?;
    let line = text.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return Err(KeydumpError::Config(format!(
            "length file '{}' is empty",
            path.display()
        )));
    }
    line.parse().map_err(|_| {
        KeydumpError::Config(format!(
            "length file '{}' holds '{line}', expected a decimal integer",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_length_takes_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("length.txt");
        fs::write(&path, "7\nleftover\n").unwrap();
        assert_eq!(read_length(&path).unwrap(), 7);
    }

    #[test]
    fn read_length_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("length.txt");
        fs::write(&path, "\n").unwrap();
        assert!(read_length(&path).is_err());
        fs::write(&path, "12x").unwrap();
        assert!(read_length(&path).is_err());
        assert!(read_length(dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn footprint_scales_with_batch_size() {
        // four records of 3 + 2 + 64 bytes
        let small = Config::new(Alphabet::new("01").unwrap(), 3, 4).unwrap();
        assert_eq!(small.batch_footprint(), 4 * 69);
        // a batch larger than the keyspace is capped at the keyspace
        let capped = Config::new(Alphabet::new("01").unwrap(), 2, 1_000).unwrap();
        assert_eq!(capped.batch_footprint(), 4 * 68);
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(Config::new(Alphabet::new("ab").unwrap(), 0, 10).is_err());
        assert!(Config::new(Alphabet::new("ab").unwrap(), 3, 0).is_err());
        assert!(Config::new(Alphabet::default(), 22, 10).is_err());
        assert!(Config::new(Alphabet::default(), 21, 10).is_ok());
    }
}
