//! Exhaustive keyspace digest generation.
//!
//! `keydump` enumerates every string of a fixed length over a fixed
//! alphabet, hashes each one with SHA-256 and streams the records to an
//! append-only text artifact, one `<candidate> <hex digest>` line per
//! string. Enumeration maps a dense `u128` index space onto mixed-radix
//! character strings, so a full pass is a single sequential sweep holding
//! one batch buffer in memory at a time.

pub mod alphabet;
pub mod batch;
pub mod config;
pub mod error;
pub mod io_utils;
pub mod keyspace;
pub mod pipeline;
pub mod progress;
pub mod sink;

pub use alphabet::{Alphabet, DEFAULT_CHARSET};
pub use batch::{Batches, DEFAULT_BATCH_SIZE, DIGEST_HEX_LEN};
pub use config::{read_length, Config};
pub use error::KeydumpError;
pub use keyspace::{candidate_to_index, index_to_candidate, keyspace_size};
pub use pipeline::{generate, RunStats};
pub use progress::{BatchObserver, ConsoleProgress, SilentObserver};
pub use sink::{BatchSink, FileSink};
