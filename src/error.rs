//! Error types for the solver.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every error the solver can surface.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input")]
    Input {
        #[from]
        kind: InputError,
    },

    #[error("invalid feedback pattern")]
    Pattern {
        #[from]
        kind: PatternError,
    },

    #[error("scoring worker failed")]
    Execution {
        #[from]
        kind: ExecutionError,
    },

    #[error("could not read word list")]
    Io(#[from] std::io::Error),
}

/// A word or vocabulary that does not satisfy the session's invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The vocabulary (or candidate set it was built from) has no words.
    #[error("the word list is empty")]
    EmptyVocabulary,

    /// The session word length is zero or too large to bucket.
    #[error("word length {len} is not supported (must be 1..={max})", max = crate::MAX_WORD_LEN)]
    InvalidWordLength { len: usize },

    /// A word does not have the session's word length.
    #[error("\"{word}\" has {found} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    /// A word contains something other than `a`..=`z`.
    #[error("\"{word}\" contains characters outside a-z")]
    NonAlphabetic { word: String },

    /// A word-list line failed validation.
    #[error("line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: Box<InputError>,
    },
}

/// An observed feedback string that cannot be turned into a pattern.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern has {found} symbols, expected {expected}")]
    WrongLength { expected: usize, found: usize },

    #[error("unrecognized symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("patterns of length {word_len} are not supported (must be 1..={max})", max = crate::MAX_WORD_LEN)]
    UnsupportedLength { word_len: usize },

    #[error("code {code} is out of range for word length {word_len}")]
    CodeOutOfRange { code: u32, word_len: usize },
}

/// The isolated scoring context failed before producing a ranking.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("could not start scoring worker")]
    Spawn(#[source] std::io::Error),

    #[error("scoring worker panicked: {0}")]
    WorkerPanicked(String),

    #[error("scoring worker exited without a result")]
    Disconnected,
}
