//! Validated words and the packed word buffers the scoring loops run over.

use std::fmt;

use crate::error::InputError;
use crate::MAX_WORD_LEN;

/// A lowercase `a`..=`z` word. Length is checked against the session
/// word length wherever words enter the solver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Box<str>);

impl Word {
    /// Validate `s` as a word of exactly `word_len` letters.
    pub fn parse(s: &str, word_len: usize) -> Result<Self, InputError> {
        check_word_len(word_len)?;
        let word = Self::new(s)?;
        word.expect_len(word_len)?;
        Ok(word)
    }

    /// Validate `s` as a non-empty lowercase word of any supported length.
    pub fn new(s: &str) -> Result<Self, InputError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(InputError::NonAlphabetic { word: s.to_string() });
        }
        if s.len() > MAX_WORD_LEN {
            return Err(InputError::InvalidWordLength { len: s.len() });
        }
        Ok(Self(s.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn expect_len(&self, word_len: usize) -> Result<(), InputError> {
        if self.len() != word_len {
            return Err(InputError::LengthMismatch {
                word: self.0.to_string(),
                expected: word_len,
                found: self.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reject word lengths that cannot be bucketed.
pub fn check_word_len(word_len: usize) -> Result<(), InputError> {
    if word_len == 0 || word_len > MAX_WORD_LEN {
        return Err(InputError::InvalidWordLength { len: word_len });
    }
    Ok(())
}

/// Check every word in `words` has length `word_len`.
pub fn check_uniform(words: &[Word], word_len: usize) -> Result<(), InputError> {
    check_word_len(word_len)?;
    words.iter().try_for_each(|w| w.expect_len(word_len))
}

/// A word list flattened into one contiguous buffer of letter indices
/// (`0` for `a` through `25` for `z`), `word_len` bytes per word.
#[derive(Debug, Clone)]
pub struct PackedWords {
    word_len: usize,
    letters: Vec<u8>,
}

impl PackedWords {
    /// Pack `words`, all of which must already have length `word_len`.
    pub fn new(words: &[Word], word_len: usize) -> Self {
        let mut letters = Vec::with_capacity(words.len() * word_len);
        for word in words {
            debug_assert_eq!(word.len(), word_len);
            letters.extend(word.as_bytes().iter().map(|b| b - b'a'));
        }
        Self { word_len, letters }
    }

    pub fn word_len(&self) -> usize {
        self.word_len
    }

    pub fn len(&self) -> usize {
        if self.word_len == 0 {
            0
        } else {
            self.letters.len() / self.word_len
        }
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter indices of the `i`th word.
    pub fn get(&self, i: usize) -> &[u8] {
        &self.letters[i * self.word_len..(i + 1) * self.word_len]
    }

    pub fn iter(&self) -> std::slice::ChunksExact<'_, u8> {
        self.letters.chunks_exact(self.word_len.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_uppercase_and_digits() {
        assert!(Word::new("Crane").is_err());
        assert!(Word::new("cr4ne").is_err());
        assert!(Word::new("").is_err());
    }

    #[test]
    fn parse_checks_length() {
        assert!(Word::parse("crane", 5).is_ok());
        assert_eq!(
            Word::parse("cranes", 5),
            Err(InputError::LengthMismatch {
                word: "cranes".into(),
                expected: 5,
                found: 6
            })
        );
        assert_eq!(
            Word::parse("a", 0),
            Err(InputError::InvalidWordLength { len: 0 })
        );
    }

    #[test]
    fn packs_letter_indices() {
        let words = vec![Word::new("abz").unwrap(), Word::new("zya").unwrap()];
        let packed = PackedWords::new(&words, 3);
        assert_eq!(packed.len(), 2);
        assert_eq!(packed.get(0), &[0, 1, 25]);
        assert_eq!(packed.get(1), &[25, 24, 0]);
        assert_eq!(packed.iter().count(), 2);
    }
}
