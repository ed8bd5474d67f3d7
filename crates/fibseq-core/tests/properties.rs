//! Property-based tests for the sequence generators.
//!
//! These exercise the `SequenceGenerator` implementations directly and
//! the free functions that wrap the iterative generator.

use proptest::prelude::*;

use fibseq_core::{
    generate_sequence, nth_term, IterativeGenerator, NaiveRecursiveGenerator, Options,
    OverflowMode, SeqError, SequenceGenerator,
};

#[test]
fn known_sequences() {
    assert_eq!(generate_sequence(1).unwrap(), [0]);
    assert_eq!(generate_sequence(2).unwrap(), [0, 1]);
    assert_eq!(
        generate_sequence(10).unwrap(),
        [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
    );
}

#[test]
fn known_terms() {
    assert_eq!(nth_term(1).unwrap(), 0);
    assert_eq!(nth_term(7).unwrap(), 8);
}

#[test]
fn non_positive_inputs_are_invalid() {
    assert_eq!(generate_sequence(0), Err(SeqError::InvalidInput(0)));
    assert_eq!(generate_sequence(-5), Err(SeqError::InvalidInput(-5)));
    assert_eq!(nth_term(0), Err(SeqError::InvalidInput(0)));
}

/// Without a size guard an impossible count is still an error, not a panic.
#[test]
fn huge_count_without_guard_is_rejected() {
    assert!(matches!(
        generate_sequence(i64::MAX),
        Err(SeqError::LimitExceeded { .. })
    ));
}

/// Past F(93) the default mode wraps modulo 2^64 instead of failing.
#[test]
fn default_mode_wraps() {
    assert_eq!(nth_term(94).unwrap(), 12_200_160_415_121_876_738);
    assert_eq!(nth_term(95).unwrap(), 1_293_530_146_158_671_551);
    let terms = generate_sequence(100).unwrap();
    assert_eq!(terms.len(), 100);
    assert!(terms[94] < terms[93], "wrapped term should be smaller");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// term[k] == term[k-1] + term[k-2] (mod 2^64) for every k.
    #[test]
    fn recurrence_holds(n in 3i64..400) {
        let terms = generate_sequence(n).unwrap();
        prop_assert_eq!(terms.len() as i64, n);
        for k in 2..terms.len() {
            prop_assert_eq!(terms[k], terms[k - 1].wrapping_add(terms[k - 2]), "k = {}", k);
        }
    }

    /// nth_term(n) is the last element of generate_sequence(n).
    #[test]
    fn nth_matches_sequence(n in 1i64..400) {
        let terms = generate_sequence(n).unwrap();
        prop_assert_eq!(nth_term(n).unwrap(), terms[terms.len() - 1]);
    }

    /// Repeated calls return identical output.
    #[test]
    fn generation_is_idempotent(n in 1i64..400) {
        prop_assert_eq!(generate_sequence(n).unwrap(), generate_sequence(n).unwrap());
    }

    #[test]
    fn non_positive_always_rejected(n in i64::MIN..=0) {
        prop_assert_eq!(generate_sequence(n), Err(SeqError::InvalidInput(n)));
        prop_assert_eq!(nth_term(n), Err(SeqError::InvalidInput(n)));
    }

    /// Checked mode agrees with wrapping mode inside the u64 range and
    /// rejects everything beyond it.
    #[test]
    fn checked_mode_boundary(n in 1i64..200) {
        let checked = Options::with_overflow(OverflowMode::Checked);
        let gen = IterativeGenerator::new();
        if n <= 94 {
            prop_assert_eq!(gen.nth(n, &checked).unwrap(), nth_term(n).unwrap());
        } else {
            prop_assert_eq!(gen.nth(n, &checked), Err(SeqError::Overflow { index: 95 }));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    /// The naive reference and the iterative generator agree.
    #[test]
    fn naive_agrees_with_iterative(n in 1i64..25) {
        let opts = Options::default();
        let naive = NaiveRecursiveGenerator::new();
        let iterative = IterativeGenerator::new();
        prop_assert_eq!(naive.generate(n, &opts).unwrap(), iterative.generate(n, &opts).unwrap());
        prop_assert_eq!(naive.nth(n, &opts).unwrap(), iterative.nth(n, &opts).unwrap());
    }
}
