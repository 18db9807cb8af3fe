//! # Wordle Entropy
//!
//! Recommends guesses for fixed-length word puzzles by expected information
//! gain.
//!
//! Each turn, every word in the vocabulary is scored by the Shannon entropy of
//! the feedback patterns it would produce over the remaining candidate
//! solutions; the best few are kept. Ranking can run off-thread through
//! [`compute_async`] so an interactive loop stays responsive.

pub mod entropy;
pub mod error;
pub mod feedback;
pub mod offload;
pub mod prune;
pub mod rank;
pub mod state;
pub mod topk;
pub mod word;
pub mod wordlist;

pub use entropy::{entropy, EntropyScorer};
pub use error::{Error, ExecutionError, InputError, PatternError, Result};
pub use feedback::{classify, code, decode, encode, FeedbackCodec, FeedbackPattern, Tile};
pub use offload::{compute_async, PendingRanking, ScoringRequest};
pub use prune::prune;
pub use rank::{rank, rank_parallel};
pub use state::{solve_for_target, SessionConfig, SolverState, Turn};
pub use topk::{Scored, TopK};
pub use word::{PackedWords, Word};
pub use wordlist::{load_word_list, parse_word_list, ListPolicy};

/// Letters in the alphabet (`a`..=`z`).
pub const ALPHABET_SIZE: usize = 26;

/// Longest supported word; scoring keeps `3^MAX_WORD_LEN` buckets per worker.
pub const MAX_WORD_LEN: usize = 12;
