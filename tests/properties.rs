use proptest::collection::vec;
use proptest::prelude::*;

use wordle_entropy::{
    classify, code, entropy, prune, rank, rank_parallel, FeedbackPattern, Scored, Tile, TopK, Word,
};

const WORD_LEN: usize = 4;

/// Words over a small alphabet so repeats and collisions are common.
fn word() -> impl Strategy<Value = Word> {
    "[a-d]{4}".prop_map(|s| Word::new(&s).unwrap())
}

fn word_list() -> impl Strategy<Value = Vec<Word>> {
    vec(word(), 1..24)
}

proptest! {
    #[test]
    fn guess_against_itself_is_all_correct(w in word()) {
        let pattern = classify(&w, &w).unwrap();
        prop_assert!(pattern.tiles().iter().all(|&t| t == Tile::Correct));
        prop_assert_eq!(code(&w, &w).unwrap(), 3u32.pow(WORD_LEN as u32) - 1);
    }

    #[test]
    fn correct_tiles_mark_equal_letters(guess in word(), answer in word()) {
        let tiles = classify(&guess, &answer).unwrap().tiles();
        for (i, tile) in tiles.iter().enumerate() {
            let same = guess.as_bytes()[i] == answer.as_bytes()[i];
            prop_assert_eq!(*tile == Tile::Correct, same);
        }
    }

    #[test]
    fn parse_round_trips_symbols(guess in word(), answer in word()) {
        let pattern = classify(&guess, &answer).unwrap();
        prop_assert_eq!(FeedbackPattern::parse(&pattern.to_symbols(), WORD_LEN).unwrap(), pattern);
    }

    #[test]
    fn entropy_is_bounded(guess in word(), solutions in word_list()) {
        let h = entropy(&guess, &solutions);
        prop_assert!(h >= 0.0);
        prop_assert!(h <= (solutions.len() as f64).log2() + 1e-9);
    }

    #[test]
    fn entropy_ignores_solution_order(guess in word(), solutions in word_list()) {
        let mut reversed = solutions.clone();
        reversed.reverse();
        prop_assert_eq!(entropy(&guess, &solutions), entropy(&guess, &reversed));
    }

    #[test]
    fn topk_keeps_the_k_largest(entropies in vec(0.0f64..16.0, 0..40), k in 0usize..8) {
        let w = Word::new("abcd").unwrap();
        let mut top = TopK::new(k);
        for &e in &entropies {
            top.push(Scored::new(w.clone(), e));
        }
        let drained: Vec<f64> = top.drain().iter().map(|s| s.entropy).collect();

        let mut expected = entropies.clone();
        expected.sort_by(|a, b| b.total_cmp(a));
        expected.truncate(k);
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn prune_is_an_idempotent_subset(
        solutions in word_list(),
        guess in word(),
        answer in word()
    ) {
        let observed = classify(&guess, &answer).unwrap();
        let once = prune(&solutions, &guess, observed);
        let twice = prune(&once, &guess, observed);
        prop_assert_eq!(&once, &twice);

        // order-preserving subsequence of the input
        let mut rest = solutions.iter();
        for kept in &once {
            prop_assert!(rest.any(|s| s == kept));
        }
    }

    #[test]
    fn rank_returns_the_best_scores(
        guesses in word_list(),
        solutions in vec(word(), 0..16),
        top_n in 0usize..6
    ) {
        let ranked = rank(&guesses, &solutions, WORD_LEN, top_n).unwrap();
        prop_assert_eq!(ranked.len(), top_n.min(guesses.len()));

        let mut expected: Vec<f64> = guesses.iter().map(|g| entropy(g, &solutions)).collect();
        expected.sort_by(|a, b| b.total_cmp(a));
        expected.truncate(top_n);
        let got: Vec<f64> = ranked.iter().map(|s| s.entropy).collect();
        prop_assert_eq!(got, expected);

        prop_assert_eq!(ranked, rank_parallel(&guesses, &solutions, WORD_LEN, top_n).unwrap());
    }
}
