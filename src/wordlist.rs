//! Loading a vocabulary from newline-separated text.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::{InputError, Result};
use crate::word::{check_word_len, Word};

/// What to do with tokens that are not valid words of the session length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPolicy {
    /// Fail on the first invalid token.
    #[default]
    Strict,
    /// Drop invalid tokens and keep going.
    SkipInvalid,
}

/// Parse one word per line. Lines are trimmed, blank lines ignored and
/// duplicates dropped (first occurrence wins).
pub fn parse_word_list(
    text: &str,
    word_len: usize,
    policy: ListPolicy,
) -> std::result::Result<Vec<Word>, InputError> {
    check_word_len(word_len)?;

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for (i, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        match Word::parse(token, word_len) {
            Ok(word) => {
                if seen.insert(word.clone()) {
                    words.push(word);
                }
            }
            Err(_) if policy == ListPolicy::SkipInvalid => skipped += 1,
            Err(e) => {
                return Err(InputError::InvalidLine {
                    line: i + 1,
                    source: Box::new(e),
                })
            }
        }
    }

    if skipped > 0 {
        debug!("skipped {} invalid tokens", skipped);
    }
    if words.is_empty() {
        return Err(InputError::EmptyVocabulary);
    }
    Ok(words)
}

/// Read and parse a word-list file.
pub fn load_word_list(path: impl AsRef<Path>, word_len: usize, policy: ListPolicy) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words = parse_word_list(&text, word_len, policy)?;
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_reports_line_number() {
        let err = parse_word_list("crane\n\nslate\nCRANE\n", 5, ListPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidLine {
                line: 4,
                source: Box::new(InputError::NonAlphabetic {
                    word: "CRANE".into()
                }),
            }
        );
    }

    #[test]
    fn skip_invalid_filters_and_dedupes() {
        let words =
            parse_word_list("crane\r\nslates\n  slate \nab1de\ncrane\n", 5, ListPolicy::SkipInvalid)
                .unwrap();
        let words: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            parse_word_list("\n\n", 5, ListPolicy::Strict),
            Err(InputError::EmptyVocabulary)
        );
        assert_eq!(
            parse_word_list("toolong\n", 5, ListPolicy::SkipInvalid),
            Err(InputError::EmptyVocabulary)
        );
    }
}
