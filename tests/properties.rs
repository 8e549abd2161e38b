use cipherworkshop::cipher::{atbash, beaufort, caesar, rail_fence, rot13, vigenere};
use cipherworkshop::hybrid::{apply_pipeline, HybridStep};
use cipherworkshop::Direction;
use proptest::prelude::*;

/// Printable text mixing letters, digits, punctuation, whitespace and a few
/// non-ASCII characters
fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?éßΩ\n-]{0,64}"
}

fn key() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 -]{0,11}"
}

fn same_case_and_passthrough(input: &str, output: &str) {
    let pairs: Vec<(char, char)> = input.chars().zip(output.chars()).collect();
    assert_eq!(pairs.len(), input.chars().count());
    assert_eq!(output.chars().count(), input.chars().count());
    for (i, o) in pairs {
        if i.is_ascii_alphabetic() {
            assert!(o.is_ascii_alphabetic());
            assert_eq!(i.is_ascii_uppercase(), o.is_ascii_uppercase());
        } else {
            assert_eq!(i, o);
        }
    }
}

proptest! {
    #[test]
    fn caesar_roundtrip(t in text(), shift in any::<i64>()) {
        let encoded = caesar(&t, shift, Direction::Encode);
        prop_assert_eq!(caesar(&encoded, shift, Direction::Decode), t);
    }

    #[test]
    fn caesar_is_periodic(t in text(), shift in -1000i64..1000) {
        prop_assert_eq!(
            caesar(&t, shift, Direction::Encode),
            caesar(&t, shift + 26, Direction::Encode)
        );
        prop_assert_eq!(
            caesar(&t, shift, Direction::Decode),
            caesar(&t, shift + 26, Direction::Decode)
        );
    }

    #[test]
    fn rot13_and_atbash_are_involutions(t in text()) {
        prop_assert_eq!(rot13(&rot13(&t)), t.clone());
        prop_assert_eq!(atbash(&atbash(&t)), t);
    }

    #[test]
    fn vigenere_roundtrip(t in text(), k in key()) {
        let encoded = vigenere(&t, &k, Direction::Encode).unwrap();
        prop_assert_eq!(vigenere(&encoded, &k, Direction::Decode).unwrap(), t);
    }

    #[test]
    fn beaufort_is_involution(t in text(), k in key()) {
        let once = beaufort(&t, &k).unwrap();
        prop_assert_eq!(beaufort(&once, &k).unwrap(), t);
    }

    #[test]
    fn rail_fence_roundtrip(t in text(), rails in 2usize..12) {
        let encoded = rail_fence(&t, rails, Direction::Encode).unwrap();
        prop_assert_eq!(rail_fence(&encoded, rails, Direction::Decode).unwrap(), t);
    }

    #[test]
    fn rail_fence_is_a_permutation(t in text(), rails in 2usize..12) {
        let encoded = rail_fence(&t, rails, Direction::Encode).unwrap();
        let mut before: Vec<char> = t.chars().collect();
        let mut after: Vec<char> = encoded.chars().collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn substitution_ciphers_keep_case_and_non_letters(t in text(), shift in any::<i64>(), k in key()) {
        same_case_and_passthrough(&t, &caesar(&t, shift, Direction::Encode));
        same_case_and_passthrough(&t, &rot13(&t));
        same_case_and_passthrough(&t, &atbash(&t));
        same_case_and_passthrough(&t, &vigenere(&t, &k, Direction::Encode).unwrap());
        same_case_and_passthrough(&t, &vigenere(&t, &k, Direction::Decode).unwrap());
        same_case_and_passthrough(&t, &beaufort(&t, &k).unwrap());
    }

    #[test]
    fn pipeline_is_deterministic(t in text(), shift in any::<i64>(), k in key(), rails in 2usize..8) {
        let steps = vec![
            HybridStep::caesar(shift),
            HybridStep::vigenere(k),
            HybridStep::rail_fence(rails),
            HybridStep::atbash(),
        ];
        prop_assert_eq!(apply_pipeline(&t, &steps).unwrap(), apply_pipeline(&t, &steps).unwrap());
    }
}
