//! Ranking every guess in a vocabulary by entropy.

use std::time::Instant;

use log::{debug, warn};
use rayon::prelude::*;

use crate::entropy::EntropyScorer;
use crate::error::InputError;
use crate::topk::{Scored, TopK};
use crate::word::{check_uniform, PackedWords, Word};

/// Score every guess against `possible_solutions` and return the best
/// `top_n`, highest entropy first.
///
/// With no possible solutions every guess scores 0: the ranking carries no
/// information and usually means the observed feedback was inconsistent.
pub fn rank(
    all_guesses: &[Word],
    possible_solutions: &[Word],
    word_len: usize,
    top_n: usize,
) -> Result<Vec<Scored>, InputError> {
    let start = Instant::now();
    let (guesses, solutions) = pack(all_guesses, possible_solutions, word_len)?;

    let mut scorer = EntropyScorer::new(word_len);
    let mut top = TopK::new(top_n);
    for (word, letters) in all_guesses.iter().zip(guesses.iter()) {
        let entropy = scorer.score(letters, &solutions);
        top.push(Scored::new(word.clone(), entropy));
    }

    let ranked = top.drain();
    debug!(
        "ranked {} guesses against {} solutions in {:.2?}",
        all_guesses.len(),
        possible_solutions.len(),
        start.elapsed()
    );
    Ok(ranked)
}

/// Chunks handed to the pool per rayon thread.
const CHUNKS_PER_THREAD: usize = 4;

/// Same result as [`rank`], with entropies computed across the rayon pool.
///
/// Guesses are split into a few contiguous chunks per thread and each chunk
/// is scored with one [`EntropyScorer`], so bucket arrays are allocated per
/// chunk rather than per work-stealing split. Scores are collected in input
/// order and selected sequentially, so ties resolve exactly as in [`rank`].
pub fn rank_parallel(
    all_guesses: &[Word],
    possible_solutions: &[Word],
    word_len: usize,
    top_n: usize,
) -> Result<Vec<Scored>, InputError> {
    let start = Instant::now();
    let (guesses, solutions) = pack(all_guesses, possible_solutions, word_len)?;

    let total = guesses.len();
    let chunk_len = total
        .div_ceil(rayon::current_num_threads() * CHUNKS_PER_THREAD)
        .max(1);
    let (guesses, solutions) = (&guesses, &solutions);
    let entropies: Vec<f64> = (0..total.div_ceil(chunk_len))
        .into_par_iter()
        .flat_map_iter(|chunk| {
            let mut scorer = EntropyScorer::new(word_len);
            let first = chunk * chunk_len;
            let end = (first + chunk_len).min(total);
            (first..end).map(move |i| scorer.score(guesses.get(i), solutions))
        })
        .collect();

    let mut top = TopK::new(top_n);
    top.extend(
        all_guesses
            .iter()
            .zip(entropies)
            .map(|(word, entropy)| Scored::new(word.clone(), entropy)),
    );

    let ranked = top.drain();
    debug!(
        "ranked {} guesses against {} solutions on {} threads in {:.2?}",
        all_guesses.len(),
        possible_solutions.len(),
        rayon::current_num_threads(),
        start.elapsed()
    );
    Ok(ranked)
}

fn pack(
    all_guesses: &[Word],
    possible_solutions: &[Word],
    word_len: usize,
) -> Result<(PackedWords, PackedWords), InputError> {
    check_uniform(all_guesses, word_len)?;
    check_uniform(possible_solutions, word_len)?;
    if possible_solutions.is_empty() {
        warn!("no possible solutions remain; all guesses score 0");
    }
    Ok((
        PackedWords::new(all_guesses, word_len),
        PackedWords::new(possible_solutions, word_len),
    ))
}
