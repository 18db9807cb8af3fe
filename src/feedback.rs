//! Feedback calculation for guesses.
//!
//! This module handles classifying a guess against an answer into a
//! per-position [`Tile`] pattern, and the base-3 integer code used to bucket
//! patterns during scoring. Position 0 is the most significant digit.

use std::fmt;

use crate::error::{InputError, PatternError};
use crate::word::Word;
use crate::{ALPHABET_SIZE, MAX_WORD_LEN};

/// The classification of a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word, or all of its occurrences already accounted for (gray)
    NotPresent,
}

impl Tile {
    /// Base-3 digit of this tile in a pattern code.
    pub fn digit(self) -> u32 {
        match self {
            Tile::NotPresent => 0,
            Tile::Present => 1,
            Tile::Correct => 2,
        }
    }

    fn from_digit(digit: u32) -> Self {
        match digit {
            0 => Tile::NotPresent,
            1 => Tile::Present,
            _ => Tile::Correct,
        }
    }

    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Tile::Correct => '🟩',
            Tile::Present => '🟨',
            Tile::NotPresent => '⬛',
        }
    }

    /// Parse from a character: C/2/G correct, P/1/Y present, N/0/B/X not present.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' | '2' | 'g' => Some(Tile::Correct),
            'p' | '1' | 'y' => Some(Tile::Present),
            'n' | '0' | 'b' | 'x' => Some(Tile::NotPresent),
            _ => None,
        }
    }
}

/// Number of distinct patterns for words of `word_len` letters (3^word_len).
pub fn num_patterns(word_len: usize) -> usize {
    3usize.pow(word_len as u32)
}

/// A complete feedback pattern, stored as its base-3 code together with the
/// word length it was produced for. Two patterns are equal exactly when their
/// tiles are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern {
    code: u32,
    len: u8,
}

impl FeedbackPattern {
    /// The winning pattern for words of `word_len` letters.
    pub fn all_correct(word_len: usize) -> Result<Self, PatternError> {
        check_pattern_len(word_len)?;
        Ok(Self {
            code: num_patterns(word_len) as u32 - 1,
            len: word_len as u8,
        })
    }

    /// Build a pattern from individual tiles.
    pub fn from_tiles(tiles: &[Tile]) -> Result<Self, PatternError> {
        check_pattern_len(tiles.len())?;
        Ok(Self {
            code: encode(tiles),
            len: tiles.len() as u8,
        })
    }

    /// Build a pattern from its code, rejecting codes outside `0..3^word_len`.
    pub fn from_code(code: u32, word_len: usize) -> Result<Self, PatternError> {
        if word_len == 0 || word_len > MAX_WORD_LEN || code as usize >= num_patterns(word_len) {
            return Err(PatternError::CodeOutOfRange { code, word_len });
        }
        Ok(Self {
            code,
            len: word_len as u8,
        })
    }

    /// Calculate the feedback pattern for a guess against an answer of the
    /// same length.
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, InputError> {
        Ok(Self {
            code: code(guess, answer)?,
            len: guess.len() as u8,
        })
    }

    pub fn code(self) -> u32 {
        self.code
    }

    pub fn word_len(self) -> usize {
        self.len as usize
    }

    /// Convert pattern to its tiles, position 0 first
    pub fn tiles(self) -> Vec<Tile> {
        let mut tiles = vec![Tile::NotPresent; self.word_len()];
        let mut code = self.code;
        for tile in tiles.iter_mut().rev() {
            *tile = Tile::from_digit(code % 3);
            code /= 3;
        }
        tiles
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        self.code as usize == num_patterns(self.word_len()) - 1
    }

    /// Parse an observed pattern like "CPNNN", "21000" or "gybbb".
    pub fn parse(s: &str, word_len: usize) -> Result<Self, PatternError> {
        check_pattern_len(word_len)?;
        let s = s.trim();
        let found = s.chars().count();
        if found != word_len {
            return Err(PatternError::WrongLength {
                expected: word_len,
                found,
            });
        }
        let tiles = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Tile::from_char(symbol).ok_or(PatternError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_tiles(&tiles)
    }

    /// Digit form, e.g. "21000".
    pub fn to_symbols(self) -> String {
        self.tiles()
            .into_iter()
            .map(|t| char::from(b'0' + t.digit() as u8))
            .collect()
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.tiles().into_iter().map(Tile::to_char).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

fn check_pattern_len(word_len: usize) -> Result<(), PatternError> {
    if word_len == 0 || word_len > MAX_WORD_LEN {
        return Err(PatternError::UnsupportedLength { word_len });
    }
    Ok(())
}

/// Pattern code of a tile sequence, most significant digit first.
pub fn encode(tiles: &[Tile]) -> u32 {
    tiles.iter().fold(0, |code, t| code * 3 + t.digit())
}

/// Inverse of [`encode`] for a given word length.
pub fn decode(code: u32, word_len: usize) -> Result<FeedbackPattern, PatternError> {
    FeedbackPattern::from_code(code, word_len)
}

/// Feedback pattern of `guess` against `answer`.
pub fn classify(guess: &Word, answer: &Word) -> Result<FeedbackPattern, InputError> {
    FeedbackPattern::calculate(guess, answer)
}

/// Pattern code of `guess` against `answer`. Both words must have the same
/// length.
pub fn code(guess: &Word, answer: &Word) -> Result<u32, InputError> {
    answer.expect_len(guess.len())?;
    let n = guess.len();
    let mut g = [0u8; MAX_WORD_LEN];
    let mut a = [0u8; MAX_WORD_LEN];
    for (slot, b) in g.iter_mut().zip(guess.as_bytes()) {
        *slot = b - b'a';
    }
    for (slot, b) in a.iter_mut().zip(answer.as_bytes()) {
        *slot = b - b'a';
    }
    Ok(FeedbackCodec::new().code(&g[..n], &a[..n]))
}

/// Classifies letter-index words into pattern codes.
///
/// Holds the per-letter counter so a scoring pass can reuse one codec for
/// every (guess, answer) pair without allocating.
#[derive(Debug, Clone)]
pub struct FeedbackCodec {
    remaining: [u8; ALPHABET_SIZE],
}

impl Default for FeedbackCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackCodec {
    pub fn new() -> Self {
        Self {
            remaining: [0; ALPHABET_SIZE],
        }
    }

    /// Pattern code of `guess` against `answer`, both given as letter
    /// indices (`0..26`) of equal length.
    ///
    /// Exact matches are marked first and every unmatched answer letter is
    /// counted; then each remaining guess position, left to right, consumes
    /// one counted occurrence of its letter to become Present.
    #[inline]
    pub fn code(&mut self, guess: &[u8], answer: &[u8]) -> u32 {
        debug_assert_eq!(guess.len(), answer.len());
        debug_assert!(guess.len() <= MAX_WORD_LEN);

        self.remaining = [0; ALPHABET_SIZE];
        let mut correct: u32 = 0;

        for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                correct |= 1 << i;
            } else {
                self.remaining[a as usize] += 1;
            }
        }

        let mut code = 0;
        for (i, &g) in guess.iter().enumerate() {
            code *= 3;
            if correct & (1 << i) != 0 {
                code += 2;
            } else {
                let slot = &mut self.remaining[g as usize];
                if *slot > 0 {
                    *slot -= 1;
                    code += 1;
                }
            }
        }
        code
    }
}
