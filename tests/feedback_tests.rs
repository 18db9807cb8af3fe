use wordle_entropy::{
    classify, code, decode, encode, FeedbackPattern, InputError, PatternError, Tile, Word,
};

use wordle_entropy::Tile::{Correct, NotPresent, Present};

fn w(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn tiles(guess: &str, answer: &str) -> Vec<Tile> {
    classify(&w(guess), &w(answer)).unwrap().tiles()
}

#[test]
fn test_all_correct() {
    let pattern = classify(&w("crane"), &w("crane")).unwrap();
    assert!(pattern.is_win());
    assert_eq!(pattern, FeedbackPattern::all_correct(5).unwrap());
    assert_eq!(code(&w("crane"), &w("crane")).unwrap(), 242);
}

#[test]
fn test_all_absent() {
    assert_eq!(tiles("quick", "dream"), vec![NotPresent; 5]);
    assert_eq!(code(&w("quick"), &w("dream")).unwrap(), 0);
}

#[test]
fn test_mixed_feedback() {
    assert_eq!(
        tiles("crane", "charm"),
        vec![Correct, Present, Correct, NotPresent, NotPresent]
    );
}

#[test]
fn test_repeated_letters_consumed_once() {
    assert_eq!(tiles("aabb", "abab"), vec![Correct, Present, Present, Correct]);
    assert_eq!(code(&w("aabb"), &w("abab")).unwrap(), 68);
}

#[test]
fn test_duplicate_letters_in_guess() {
    assert_eq!(
        tiles("speed", "creep"),
        vec![NotPresent, Present, Correct, Correct, NotPresent]
    );
}

#[test]
fn test_duplicate_letters_in_target() {
    assert_eq!(
        tiles("arose", "creep"),
        vec![NotPresent, Correct, NotPresent, NotPresent, Present]
    );
}

#[test]
fn test_duplicate_guess_limited_target() {
    assert_eq!(
        tiles("geese", "creep"),
        vec![NotPresent, Present, Correct, NotPresent, NotPresent]
    );
}

#[test]
fn test_specific_wordle_cases() {
    assert_eq!(
        tiles("sores", "those"),
        vec![Present, Present, NotPresent, Present, NotPresent]
    );
    assert_eq!(
        tiles("abcd", "abce"),
        vec![Correct, Correct, Correct, NotPresent]
    );
}

#[test]
fn test_encode_is_most_significant_first() {
    assert_eq!(encode(&[Correct, NotPresent, NotPresent]), 18);
    assert_eq!(encode(&[NotPresent, NotPresent, Present]), 1);
    assert_eq!(encode(&[]), 0);
}

#[test]
fn test_pattern_encoding_decoding() {
    for word_len in 1..=6 {
        for c in 0..3u32.pow(word_len as u32) {
            let pattern = decode(c, word_len).unwrap();
            assert_eq!(pattern.word_len(), word_len);
            assert_eq!(encode(&pattern.tiles()), c);
            assert_eq!(FeedbackPattern::from_tiles(&pattern.tiles()).unwrap(), pattern);
        }
    }
}

#[test]
fn test_decode_out_of_range() {
    assert!(decode(81, 4).is_err());
    assert!(decode(0, 0).is_err());
    assert!(decode(0, 13).is_err());
    assert!(decode(80, 4).unwrap().is_win());
}

#[test]
fn test_pattern_parse() {
    let pattern = FeedbackPattern::parse("CPNNN", 5).unwrap();
    assert_eq!(
        pattern.tiles(),
        vec![Correct, Present, NotPresent, NotPresent, NotPresent]
    );

    assert_eq!(FeedbackPattern::parse("21000", 5).unwrap(), pattern);
    assert_eq!(FeedbackPattern::parse("gybbb", 5).unwrap(), pattern);
    assert_eq!(FeedbackPattern::parse(" cpnnn\n", 5).unwrap(), pattern);
    assert_eq!(pattern.to_symbols(), "21000");
}

#[test]
fn test_pattern_parse_invalid() {
    assert_eq!(
        FeedbackPattern::parse("CPNNN2", 5),
        Err(PatternError::WrongLength {
            expected: 5,
            found: 6
        })
    );
    assert_eq!(
        FeedbackPattern::parse("CPNN", 5),
        Err(PatternError::WrongLength {
            expected: 5,
            found: 4
        })
    );
    assert_eq!(
        FeedbackPattern::parse("CPNZN", 5),
        Err(PatternError::InvalidSymbol {
            symbol: 'Z',
            position: 3
        })
    );
}

#[test]
fn test_emoji_display() {
    let pattern =
        FeedbackPattern::from_tiles(&[Correct, Present, NotPresent, NotPresent, Correct]).unwrap();
    assert_eq!(pattern.to_string(), "🟩🟨⬛⬛🟩");
}

#[test]
fn test_classify_length_mismatch() {
    let mismatch = || InputError::LengthMismatch {
        word: "abcd".to_string(),
        expected: 5,
        found: 4,
    };
    assert_eq!(classify(&w("abcde"), &w("abcd")), Err(mismatch()));
    assert_eq!(code(&w("abcde"), &w("abcd")), Err(mismatch()));
    assert!(classify(&w("abc"), &w("abcdef")).is_err());
}

#[test]
fn test_parse_rejects_unsupported_length() {
    assert_eq!(
        FeedbackPattern::parse("CCCCCCCCCCCCC", 13),
        Err(PatternError::UnsupportedLength { word_len: 13 })
    );
    assert_eq!(
        FeedbackPattern::parse("", 0),
        Err(PatternError::UnsupportedLength { word_len: 0 })
    );
    assert!(FeedbackPattern::parse("CCCCCCCCCCCC", 12).unwrap().is_win());
}

#[test]
fn test_all_correct_rejects_unsupported_length() {
    assert_eq!(
        FeedbackPattern::all_correct(25),
        Err(PatternError::UnsupportedLength { word_len: 25 })
    );
    assert_eq!(
        FeedbackPattern::all_correct(0),
        Err(PatternError::UnsupportedLength { word_len: 0 })
    );
    assert_eq!(FeedbackPattern::all_correct(12).unwrap().word_len(), 12);
}

#[test]
fn test_from_tiles_rejects_unsupported_length() {
    assert_eq!(
        FeedbackPattern::from_tiles(&[Correct; 13]),
        Err(PatternError::UnsupportedLength { word_len: 13 })
    );
    assert_eq!(
        FeedbackPattern::from_tiles(&[]),
        Err(PatternError::UnsupportedLength { word_len: 0 })
    );
}
