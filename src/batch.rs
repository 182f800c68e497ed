//! Batched production of candidate/digest records.

use sha2::{Digest, Sha256};

use crate::keyspace::{keyspace_size, write_candidate};
use crate::{Alphabet, KeydumpError};

/// Records per batch unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: u64 = 1_000_000;

/// Width of a rendered SHA-256 digest in hex characters.
pub const DIGEST_HEX_LEN: usize = 64;

/// Lazy iterator over serialized record batches.
///
/// Every item is the byte image of up to `batch_size` consecutive records
/// in index order, `<candidate> <lowercase hex digest>\n` each. A full
/// pass yields exactly `total.div_ceil(batch_size)` items; only the final
/// one may run short. The buffer for each batch is reserved up front at
/// the worst-case record width.
pub struct Batches<'a> {
    alphabet: &'a Alphabet,
    length: u32,
    total: u128,
    batch_size: u64,
    next: u128,
    digits: Vec<usize>,
    record_width: usize,
}

impl<'a> Batches<'a> {
    pub fn new(
        alphabet: &'a Alphabet,
        length: u32,
        batch_size: u64,
    ) -> Result<Self, KeydumpError> {
        if batch_size == 0 {
            return Err(KeydumpError::Config("batch size must be at least 1".into()));
        }
        let total = keyspace_size(alphabet.len(), length)?;
        let record_width = length as usize * alphabet.max_symbol_width() + 2 + DIGEST_HEX_LEN;
        Ok(Self {
            alphabet,
            length,
            total,
            batch_size,
            next: 0,
            digits: Vec::with_capacity(length as usize),
            record_width,
        })
    }

    /// Number of candidates in the keyspace.
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Number of batches a full pass produces.
    pub fn total_batches(&self) -> u128 {
        self.total.div_ceil(self.batch_size as u128)
    }
}

impl Iterator for Batches<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.next >= self.total {
            return None;
        }
        let end = self
            .next
            .saturating_add(self.batch_size as u128)
            .min(self.total);
        let count = (end - self.next) as usize;
        let mut buf = Vec::with_capacity(count * self.record_width);
        let mut hex_digest = [0u8; DIGEST_HEX_LEN];
        for index in self.next..end {
            let start = buf.len();
            write_candidate(index, self.alphabet, self.length, &mut self.digits, &mut buf);
            let digest = Sha256::digest(&buf[start..]);
            buf.push(b' ');
            hex::encode_to_slice(digest, &mut hex_digest)
                .expect("hex buffer sized for a sha-256 digest");
            buf.extend_from_slice(&hex_digest);
            buf.push(b'\n');
        }
        self.next = end;
        Some(buf)
    }
}
