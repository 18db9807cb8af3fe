//! Narrowing the candidate set to words consistent with observed feedback.

use crate::feedback::{FeedbackCodec, FeedbackPattern};
use crate::word::Word;
use crate::MAX_WORD_LEN;

/// Keep the candidates `s` for which `guess` against `s` yields `observed`,
/// in their original order.
///
/// A pattern for a different word length matches nothing.
pub fn prune(solutions: &[Word], guess: &Word, observed: FeedbackPattern) -> Vec<Word> {
    let n = guess.len();
    if observed.word_len() != n || n > MAX_WORD_LEN {
        return Vec::new();
    }

    let mut guess_letters = [0u8; MAX_WORD_LEN];
    fill_letters(&mut guess_letters, guess);
    let mut answer_letters = [0u8; MAX_WORD_LEN];
    let mut codec = FeedbackCodec::new();

    solutions
        .iter()
        .filter(|s| {
            if s.len() != n {
                return false;
            }
            fill_letters(&mut answer_letters, s);
            codec.code(&guess_letters[..n], &answer_letters[..n]) == observed.code()
        })
        .cloned()
        .collect()
}

fn fill_letters(buf: &mut [u8; MAX_WORD_LEN], word: &Word) {
    for (slot, b) in buf.iter_mut().zip(word.as_bytes()) {
        *slot = b - b'a';
    }
}
