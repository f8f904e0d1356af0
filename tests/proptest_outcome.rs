//! Property-based tests for the Outcome combinators.
//!
//! Each property states a law that must hold for every payload: variants are
//! preserved by the one-sided transforms, `Result` conversions are lossless,
//! and lazily supplied arguments are only evaluated when needed.

use proptest::prelude::*;
use result_rail::{Outcome, Variant};
use std::cell::Cell;

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::<i32, String>::success),
        "[a-z ]{0,12}".prop_map(Outcome::<i32, String>::failure),
    ]
}

proptest! {
    #[test]
    fn exactly_one_variant_holds(outcome in outcome_strategy()) {
        prop_assert_ne!(outcome.is_success(), outcome.is_failure());
        let expected = if outcome.is_success() { Variant::Success } else { Variant::Failure };
        prop_assert_eq!(outcome.variant(), expected);
    }

    #[test]
    fn map_preserves_variant(outcome in outcome_strategy()) {
        let mapped = outcome.clone().map(|n| i64::from(n) * 2);
        prop_assert_eq!(mapped.variant(), outcome.variant());

        let mapped_error = outcome.clone().map_error(|e| e.len());
        prop_assert_eq!(mapped_error.variant(), outcome.variant());
    }

    #[test]
    fn result_round_trip_is_lossless(outcome in outcome_strategy()) {
        let result: Result<i32, String> = outcome.clone().into();
        prop_assert_eq!(Outcome::from(result), outcome);
    }

    #[test]
    fn to_option_matches_variant(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().to_option().is_some(), outcome.is_success());
        prop_assert_eq!(outcome.clone().to_option_error().is_some(), outcome.is_failure());
    }

    #[test]
    fn flat_map_with_success_is_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().flat_map(Outcome::success), outcome);
    }

    #[test]
    fn and_or_pick_expected_side(a in outcome_strategy(), b in outcome_strategy()) {
        let and = a.clone().and(b.clone());
        if a.is_success() {
            prop_assert_eq!(and, b.clone());
        } else {
            prop_assert_eq!(and, a.clone());
        }

        let or = a.clone().or(b.clone());
        if a.is_success() {
            prop_assert_eq!(or, a);
        } else {
            prop_assert_eq!(or, b);
        }
    }

    #[test]
    fn filter_supplier_runs_only_on_rejection(outcome in outcome_strategy(), threshold in any::<i32>()) {
        let supplied = Cell::new(0);
        let filtered = outcome.clone().filter(|n| *n >= threshold, || {
            supplied.set(supplied.get() + 1);
            "below threshold".to_string()
        });

        let rejected = matches!(outcome, Outcome::Success(n) if n < threshold);
        prop_assert_eq!(supplied.get(), usize::from(rejected));
        if !rejected {
            prop_assert_eq!(filtered, outcome);
        }
    }

    #[test]
    fn fold_agrees_with_value_or_else(outcome in outcome_strategy()) {
        let folded = outcome.clone().fold(i64::from, |e| -(e.len() as i64));
        let fallback = outcome.map(i64::from).value_or_else(|e| -(e.len() as i64));
        prop_assert_eq!(folded, fallback);
    }
}
