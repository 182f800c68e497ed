//! Mapping between dense indices and candidate strings.
//!
//! Candidates are ordered by mixed-radix value over the alphabet: index 0
//! is the first character repeated `length` times, and each increment
//! advances the last position first.

use crate::{Alphabet, KeydumpError};

/// Total number of candidates for an alphabet of `alphabet_len` characters
/// at `length`.
///
/// Fails before enumeration when the product does not fit the 128-bit
/// index space.
pub fn keyspace_size(alphabet_len: usize, length: u32) -> Result<u128, KeydumpError> {
    if alphabet_len == 0 {
        return Err(KeydumpError::Config("alphabet must not be empty".into()));
    }
    if length == 0 {
        return Err(KeydumpError::Config("length must be at least 1".into()));
    }
    (alphabet_len as u128)
        .checked_pow(length)
        .ok_or(KeydumpError::KeyspaceOverflow {
            radix: alphabet_len,
            length,
        })
}

/// Append the candidate for `index` to `out`.
///
/// `digits` is scratch space reused across calls. Digits fall out of the
/// division loop least significant first and are consumed in reverse so
/// the most significant position lands first.
pub(crate) fn write_candidate(
    index: u128,
    alphabet: &Alphabet,
    length: u32,
    digits: &mut Vec<usize>,
    out: &mut Vec<u8>,
) {
    let radix = alphabet.len() as u128;
    digits.clear();
    let mut value = index;
    for _ in 0..length {
        digits.push((value % radix) as usize);
        value /= radix;
    }
    for &digit in digits.iter().rev() {
        out.extend_from_slice(alphabet.symbol(digit));
    }
}

/// Return the unique `length`-character candidate for `index`.
pub fn index_to_candidate(
    index: u128,
    alphabet: &Alphabet,
    length: u32,
) -> Result<Vec<u8>, KeydumpError> {
    let total = keyspace_size(alphabet.len(), length)?;
    if index >= total {
        return Err(KeydumpError::IndexOutOfRange(index, total));
    }
    let mut digits = Vec::with_capacity(length as usize);
    let mut out = Vec::with_capacity(length as usize * alphabet.max_symbol_width());
    write_candidate(index, alphabet, length, &mut digits, &mut out);
    Ok(out)
}

/// Inverse of [`index_to_candidate`].
///
/// UTF-8 encodings form a prefix-free code, so matching symbols greedily
/// from the front is unambiguous.
pub fn candidate_to_index(
    candidate: &[u8],
    alphabet: &Alphabet,
    length: u32,
) -> Result<u128, KeydumpError> {
    keyspace_size(alphabet.len(), length)?;
    let radix = alphabet.len() as u128;
    let mut index: u128 = 0;
    let mut rest = candidate;
    for _ in 0..length {
        let digit = (0..alphabet.len())
            .find(|&d| rest.starts_with(alphabet.symbol(d)))
            .ok_or_else(|| {
                KeydumpError::Decode(format!(
                    "candidate {:?} does not decode over this alphabet",
                    String::from_utf8_lossy(candidate)
                ))
            })?;
        index = index * radix + digit as u128;
        rest = &rest[alphabet.symbol(digit).len()..];
    }
    if !rest.is_empty() {
        return Err(KeydumpError::Decode(format!(
            "candidate {:?} is longer than {length} characters",
            String::from_utf8_lossy(candidate)
        )));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(keyspace_size(2, 3).unwrap(), 8);
        assert_eq!(keyspace_size(62, 1).unwrap(), 62);
        assert_eq!(keyspace_size(1, 5).unwrap(), 1);
        assert!(keyspace_size(0, 1).is_err());
        assert!(keyspace_size(2, 0).is_err());
        assert!(keyspace_size(2, 127).is_ok());
        assert!(matches!(
            keyspace_size(2, 128),
            Err(KeydumpError::KeyspaceOverflow { .. })
        ));
        assert!(matches!(
            keyspace_size(62, 22),
            Err(KeydumpError::KeyspaceOverflow { .. })
        ));
    }

    #[test]
    fn maps_small_keyspace() {
        let bits = Alphabet::new("01").unwrap();
        assert_eq!(index_to_candidate(0, &bits, 2).unwrap(), b"00".to_vec());
        assert_eq!(index_to_candidate(1, &bits, 2).unwrap(), b"01".to_vec());
        assert_eq!(index_to_candidate(2, &bits, 2).unwrap(), b"10".to_vec());
        assert_eq!(index_to_candidate(3, &bits, 2).unwrap(), b"11".to_vec());
        assert!(index_to_candidate(4, &bits, 2).is_err());
    }

    #[test]
    fn inverse_rejects_foreign_bytes() {
        let bits = Alphabet::new("01").unwrap();
        assert!(candidate_to_index(b"0x", &bits, 2).is_err());
        assert!(candidate_to_index(b"000", &bits, 2).is_err());
    }
}
