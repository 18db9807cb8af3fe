//! Entropy of the feedback distribution a guess induces.
//!
//! The key insight is that we want to maximize the expected information gain
//! (entropy) from each guess, which minimizes the expected number of remaining
//! possible words.

use crate::feedback::{num_patterns, FeedbackCodec};
use crate::word::{PackedWords, Word};

/// Scores guesses against a packed candidate set.
///
/// Owns the `3^word_len` bucket array and the codec scratch; both are reset,
/// not reallocated, between guesses. One scorer must not be shared between
/// threads; give each worker its own.
#[derive(Debug, Clone)]
pub struct EntropyScorer {
    word_len: usize,
    buckets: Vec<u32>,
    codec: FeedbackCodec,
}

impl EntropyScorer {
    pub fn new(word_len: usize) -> Self {
        Self {
            word_len,
            buckets: vec![0; num_patterns(word_len)],
            codec: FeedbackCodec::new(),
        }
    }

    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Shannon entropy in bits of the pattern codes `guess` (letter indices)
    /// produces over `solutions`. Zero when `solutions` is empty.
    pub fn score(&mut self, guess: &[u8], solutions: &PackedWords) -> f64 {
        debug_assert_eq!(guess.len(), self.word_len);
        debug_assert_eq!(solutions.word_len(), self.word_len);

        let n = solutions.len();
        if n == 0 {
            return 0.0;
        }

        self.buckets.fill(0);
        for answer in solutions.iter() {
            let code = self.codec.code(guess, answer);
            self.buckets[code as usize] += 1;
        }

        let inv_n = 1.0 / n as f64;
        let mut entropy = 0.0;
        for &count in &self.buckets {
            if count > 0 {
                let p = count as f64 * inv_n;
                entropy -= p * p.log2();
            }
        }
        entropy
    }
}

/// Entropy of `guess` over `solutions` without a reusable scorer.
///
/// Packs `solutions` and allocates buckets on every call; use
/// [`EntropyScorer`] when scoring many guesses.
pub fn entropy(guess: &Word, solutions: &[Word]) -> f64 {
    let word_len = guess.len();
    let packed = PackedWords::new(solutions, word_len);
    let letters: Vec<u8> = guess.as_bytes().iter().map(|b| b - b'a').collect();
    EntropyScorer::new(word_len).score(&letters, &packed)
}
