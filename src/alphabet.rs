//! Candidate alphabets.

use crate::KeydumpError;

/// Default character set: decimal digits, then lowercase, then uppercase
/// ASCII letters.
pub const DEFAULT_CHARSET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered set of distinct characters candidates are drawn from.
///
/// Each character keeps its UTF-8 encoding; a candidate is the
/// concatenation of the encodings selected at each position.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<Vec<u8>>,
}

impl Alphabet {
    /// Build an alphabet from `charset`, preserving character order.
    ///
    /// Rejects an empty set and duplicate characters.
    pub fn new(charset: &str) -> Result<Self, KeydumpError> {
        let chars: Vec<char> = charset.chars().collect();
        if chars.is_empty() {
            return Err(KeydumpError::Config("alphabet must not be empty".into()));
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(KeydumpError::Config(format!(
                    "alphabet repeats character {c:?}"
                )));
            }
        }
        let symbols = chars
            .into_iter()
            .map(|c| c.to_string().into_bytes())
            .collect();
        Ok(Self { symbols })
    }

    /// Number of characters; the radix of the candidate encoding.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Encoded bytes of the character at `digit`.
    pub fn symbol(&self, digit: usize) -> &[u8] {
        &self.symbols[digit]
    }

    /// Widest symbol encoding in bytes. 1 for ASCII alphabets.
    pub fn max_symbol_width(&self) -> usize {
        self.symbols.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_CHARSET).expect("default charset is a valid alphabet")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_charset_order() {
        let a = Alphabet::default();
        assert_eq!(a.len(), 62);
        assert_eq!(a.symbol(0), b"0");
        assert_eq!(a.symbol(9), b"9");
        assert_eq!(a.symbol(10), b"a");
        assert_eq!(a.symbol(35), b"z");
        assert_eq!(a.symbol(36), b"A");
        assert_eq!(a.symbol(61), b"Z");
    }

    #[test]
    fn rejects_empty_and_duplicates() {
        assert!(Alphabet::new("").is_err());
        assert!(Alphabet::new("abca").is_err());
    }

    #[test]
    fn multibyte_symbols_keep_their_encoding() {
        let a = Alphabet::new("a\u{df}").unwrap();
        assert_eq!(a.symbol(1), "\u{df}".as_bytes());
        assert_eq!(a.max_symbol_width(), 2);
    }
}
