use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeydumpError {
    /// Invalid run parameters: alphabet, length, batch size or side file.
    #[error("config error: {0}")]
    Config(String),

    /// The keyspace does not fit the 128-bit index space.
    #[error("keyspace overflow: {radix}^{length} exceeds the 128-bit index range")]
    KeyspaceOverflow { radix: usize, length: u32 },

    /// Index outside the keyspace handed to the mapper.
    #[error("index {0} out of range for a keyspace of {1}")]
    IndexOutOfRange(u128, u128),

    /// Candidate bytes that do not decode over the alphabet.
    #[error("decode error: {0}")]
    Decode(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
