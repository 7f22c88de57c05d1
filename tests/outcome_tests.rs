//! Unit tests for the Outcome<T, E> type.
//!
//! Outcome represents the modeled result of a fallible operation:
//! - `Success(T)`: the computed value
//! - `Failure(E)`: the diagnostic error
//!
//! These tests exercise construction, extraction, the combinator algebra,
//! the applicative tie-break, the panic boundary, and error combination.

#![cfg(feature = "algebra")]

use railway::algebra::{Outcome, describe_panic};
use rstest::rstest;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn outcome_success_is_success() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    assert!(value.is_success());
    assert!(!value.is_failure());
}

#[rstest]
fn outcome_failure_is_failure() {
    let value: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    assert!(value.is_failure());
    assert!(!value.is_success());
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
fn outcome_into_option_on_success() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(value.into_option(), Some(42));
}

#[rstest]
fn outcome_into_option_on_failure() {
    let value: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    assert_eq!(value.into_option(), None);
}

#[rstest]
fn outcome_into_error_on_failure() {
    let value: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    assert_eq!(value.into_error(), Some("boom".to_string()));
}

#[rstest]
fn outcome_unwrap_success_returns_value() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(value.unwrap_success(), 42);
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap_success()` on a `Failure` value")]
fn outcome_unwrap_success_on_failure_is_a_contract_violation() {
    let value: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let _ = value.unwrap_success();
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap_failure()` on a `Success` value")]
fn outcome_unwrap_failure_on_success_is_a_contract_violation() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    let _ = value.unwrap_failure();
}

#[rstest]
#[should_panic(expected = "expected a parsed id")]
fn outcome_expect_success_uses_supplied_message() {
    let value: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let _ = value.expect_success("expected a parsed id");
}

#[rstest]
fn outcome_value_or_family() {
    let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    assert_eq!(failure.clone().value_or(7), 7);
    assert_eq!(failure.clone().value_or_else(|error| error.len() as i32), 4);
    assert_eq!(failure.value_or_default(), 0);

    let success: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(success.value_or(7), 42);
}

// =============================================================================
// Transformation Combinators
// =============================================================================

#[rstest]
fn outcome_map_on_success() {
    let value: Outcome<i32, String> = Outcome::Success(21);
    assert_eq!(value.map(|x| x * 2), Outcome::Success(42));
}

#[rstest]
fn outcome_map_leaves_failure_unchanged() {
    let value: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    assert_eq!(value.map(|x| x * 2), Outcome::Failure("boom".to_string()));
}

#[rstest]
fn outcome_map_error_relabels_failure() {
    let value: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    assert_eq!(value.map_error(|e| e.len()), Outcome::Failure(4));
}

#[rstest]
fn outcome_bind_chains_fallible_steps() {
    fn half(x: i32) -> Outcome<i32, String> {
        if x % 2 == 0 {
            Outcome::Success(x / 2)
        } else {
            Outcome::Failure("odd".to_string())
        }
    }

    let even: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(even.bind(half), Outcome::Success(21));

    let odd: Outcome<i32, String> = Outcome::Success(21);
    assert_eq!(odd.bind(half), Outcome::Failure("odd".to_string()));
}

#[rstest]
fn outcome_bind_skips_function_on_failure() {
    let mut invoked = false;
    let value: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let result = value.bind(|x| {
        invoked = true;
        Outcome::<i32, String>::Success(x)
    });
    assert_eq!(result, Outcome::Failure("boom".to_string()));
    assert!(!invoked);
}

#[rstest]
fn outcome_bimap_applies_exactly_one_function() {
    let success: Outcome<i32, String> = Outcome::Success(21);
    assert_eq!(
        success.bimap(|x| x * 2, |e: String| e.len()),
        Outcome::Success(42)
    );

    let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    assert_eq!(
        failure.bimap(|x| x * 2, |e: String| e.len()),
        Outcome::Failure(4)
    );
}

#[rstest]
fn outcome_swap_exchanges_channels() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(value.swap(), Outcome::Failure(42));
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
fn outcome_tap_observes_without_changing() {
    let mut seen = None;
    let value: Outcome<i32, String> = Outcome::Success(42);
    let unchanged = value.tap(|v| seen = Some(*v));
    assert_eq!(unchanged, Outcome::Success(42));
    assert_eq!(seen, Some(42));
}

#[rstest]
fn outcome_tap_error_fires_only_on_failure() {
    let mut seen = None;
    let value: Outcome<i32, String> = Outcome::Success(42);
    let _ = value.tap_error(|e| seen = Some(e.clone()));
    assert_eq!(seen, None);

    let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let _ = failure.tap_error(|e| seen = Some(e.clone()));
    assert_eq!(seen, Some("boom".to_string()));
}

#[rstest]
fn outcome_tap_if_fires_only_when_the_predicate_passes() {
    let mut seen = None;
    let value: Outcome<i32, String> = Outcome::Success(42);
    let unchanged = value.tap_if(|v| *v > 10, |v| seen = Some(*v));
    assert_eq!(unchanged, Outcome::Success(42));
    assert_eq!(seen, Some(42));

    let mut fired = false;
    let small: Outcome<i32, String> = Outcome::Success(3);
    let _ = small.tap_if(|v| *v > 10, |_| fired = true);
    assert!(!fired);
}

#[rstest]
fn outcome_tap_if_skips_failures_entirely() {
    let mut predicate_ran = false;
    let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let unchanged = failure.tap_if(
        |_| {
            predicate_ran = true;
            true
        },
        |_| {},
    );
    assert_eq!(unchanged, Outcome::Failure("boom".to_string()));
    assert!(!predicate_ran);
}

// =============================================================================
// Validation
// =============================================================================

#[rstest]
fn outcome_ensure_fails_a_bad_success() {
    let value: Outcome<i32, String> = Outcome::Success(-5);
    assert_eq!(
        value.ensure(|x| *x >= 0, "negative".to_string()),
        Outcome::Failure("negative".to_string())
    );
}

#[rstest]
fn outcome_ensure_keeps_existing_failure() {
    let value: Outcome<i32, String> = Outcome::Failure("earlier".to_string());
    assert_eq!(
        value.ensure(|x| *x >= 0, "negative".to_string()),
        Outcome::Failure("earlier".to_string())
    );
}

#[rstest]
fn outcome_check_keeps_original_value() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    let checked = value.check(|v| Outcome::<String, String>::Success(format!("audited {v}")));
    assert_eq!(checked, Outcome::Success(42));
}

#[rstest]
fn outcome_check_propagates_validation_failure() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    let checked = value.check(|_| Outcome::<String, String>::Failure("rejected".to_string()));
    assert_eq!(checked, Outcome::Failure("rejected".to_string()));
}

// =============================================================================
// Recovery
// =============================================================================

#[rstest]
fn outcome_compensate_recovers_failure() {
    let value: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let recovered: Outcome<i32, u8> = value.compensate(|_| Outcome::Success(0));
    assert_eq!(recovered, Outcome::Success(0));
}

#[rstest]
fn outcome_compensate_skips_success() {
    let mut invoked = false;
    let value: Outcome<i32, String> = Outcome::Success(42);
    let result: Outcome<i32, String> = value.compensate(|_| {
        invoked = true;
        Outcome::Success(0)
    });
    assert_eq!(result, Outcome::Success(42));
    assert!(!invoked);
}

// =============================================================================
// Applicative Combination
// =============================================================================

#[rstest]
fn outcome_apply_function_side_failure_wins() {
    let value: Outcome<i32, String> = Outcome::Failure("V".to_string());
    let function: Outcome<fn(i32) -> i32, String> = Outcome::Failure("F".to_string());
    assert_eq!(value.apply(function), Outcome::Failure("F".to_string()));
}

#[rstest]
fn outcome_apply_on_two_successes() {
    let value: Outcome<i32, String> = Outcome::Success(21);
    let function: Outcome<fn(i32) -> i32, String> = Outcome::Success(|x| x * 2);
    assert_eq!(value.apply(function), Outcome::Success(42));
}

#[rstest]
fn outcome_map2_selects_left_most_failure() {
    let first: Outcome<i32, String> = Outcome::Failure("first".to_string());
    let second: Outcome<i32, String> = Outcome::Failure("second".to_string());
    assert_eq!(
        first.map2(second, |a, b| a + b),
        Outcome::Failure("first".to_string())
    );
}

#[rstest]
fn outcome_map3_combines_three_successes() {
    let a: Outcome<i32, String> = Outcome::Success(1);
    let b: Outcome<i32, String> = Outcome::Success(2);
    let c: Outcome<i32, String> = Outcome::Success(3);
    assert_eq!(a.map3(b, c, |x, y, z| x + y + z), Outcome::Success(6));
}

// =============================================================================
// Flattening
// =============================================================================

#[rstest]
fn outcome_flatten_success_of_success() {
    let nested: Outcome<Outcome<i32, String>, String> = Outcome::Success(Outcome::Success(42));
    assert_eq!(nested.flatten(), Outcome::Success(42));
}

#[rstest]
fn outcome_flatten_success_of_failure() {
    let nested: Outcome<Outcome<i32, String>, String> =
        Outcome::Success(Outcome::Failure("inner".to_string()));
    assert_eq!(nested.flatten(), Outcome::Failure("inner".to_string()));
}

#[rstest]
fn outcome_flatten_outer_failure_wins() {
    let nested: Outcome<Outcome<i32, String>, String> = Outcome::Failure("outer".to_string());
    assert_eq!(nested.flatten(), Outcome::Failure("outer".to_string()));
}

// =============================================================================
// Terminal Folds
// =============================================================================

#[rstest]
fn outcome_fold_is_exhaustive() {
    let success: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(success.fold(|v| v, |_| -1), 42);

    let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    assert_eq!(failure.fold(|v| v, |_| -1), -1);
}

#[rstest]
fn outcome_finally_folds_the_whole_outcome() {
    let value: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    assert!(value.finally(|o| o.is_failure()));
}

// =============================================================================
// Panic Boundary
// =============================================================================

#[rstest]
fn attempt_converts_a_panic_exactly_once() {
    let outcome: Outcome<i32, String> =
        Outcome::attempt(|| panic!("bad input"), |payload| describe_panic(payload.as_ref()));
    assert_eq!(outcome, Outcome::Failure("bad input".to_string()));
}

#[rstest]
fn attempt_passes_through_a_normal_return() {
    let outcome: Outcome<i32, String> =
        Outcome::attempt(|| 42, |payload| describe_panic(payload.as_ref()));
    assert_eq!(outcome, Outcome::Success(42));
}

#[rstest]
fn map_attempt_catches_a_panicking_mapper() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    let outcome = value.map_attempt(
        |_| -> i32 { panic!("mapper blew up") },
        |payload| describe_panic(payload.as_ref()),
    );
    assert_eq!(outcome, Outcome::Failure("mapper blew up".to_string()));
}

#[rstest]
fn bind_attempt_passes_through_a_returned_failure() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    let outcome = value.bind_attempt(
        |_| Outcome::<i32, String>::Failure("domain failure".to_string()),
        |payload| describe_panic(payload.as_ref()),
    );
    assert_eq!(outcome, Outcome::Failure("domain failure".to_string()));
}

#[rstest]
fn tap_attempt_keeps_value_when_side_effect_survives() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    let outcome = value.tap_attempt(|_| {}, |payload| describe_panic(payload.as_ref()));
    assert_eq!(outcome, Outcome::Success(42));
}

#[rstest]
fn tap_attempt_converts_a_panicking_side_effect() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    let outcome = value.tap_attempt(
        |_| panic!("effect blew up"),
        |payload| describe_panic(payload.as_ref()),
    );
    assert_eq!(outcome, Outcome::Failure("effect blew up".to_string()));
}

#[rstest]
fn tap_if_attempt_catches_only_when_the_predicate_passes() {
    let value: Outcome<i32, String> = Outcome::Success(42);
    let outcome = value.tap_if_attempt(
        |v| *v > 10,
        |_| panic!("conditional effect blew up"),
        |payload| describe_panic(payload.as_ref()),
    );
    assert_eq!(
        outcome,
        Outcome::Failure("conditional effect blew up".to_string())
    );

    let small: Outcome<i32, String> = Outcome::Success(3);
    let outcome = small.tap_if_attempt(
        |v| *v > 10,
        |_| panic!("must not run"),
        |payload| describe_panic(payload.as_ref()),
    );
    assert_eq!(outcome, Outcome::Success(3));
}

// =============================================================================
// Error Combination
// =============================================================================

#[rstest]
fn combine_collects_all_values_when_everything_succeeds() {
    let outcomes: Vec<Outcome<i32, String>> = vec![Outcome::Success(1), Outcome::Success(2)];
    let combined = Outcome::combine(outcomes, |left, right| format!("{left}; {right}"));
    assert_eq!(combined, Outcome::Success(vec![1, 2]));
}

#[rstest]
fn combine_folds_every_error() {
    let outcomes: Vec<Outcome<i32, String>> = vec![
        Outcome::Failure("a".to_string()),
        Outcome::Success(1),
        Outcome::Failure("b".to_string()),
        Outcome::Failure("c".to_string()),
    ];
    let combined = Outcome::combine(outcomes, |left, right| format!("{left}; {right}"));
    assert_eq!(combined, Outcome::Failure("a; b; c".to_string()));
}

#[rstest]
fn combine_of_empty_sequence_is_an_empty_success() {
    let outcomes: Vec<Outcome<i32, String>> = vec![];
    let combined = Outcome::combine(outcomes, |left, _| left);
    assert_eq!(combined, Outcome::Success(vec![]));
}

#[rstest]
fn combine_all_uses_the_error_types_own_rule() {
    let outcomes: Vec<Outcome<i32, Vec<String>>> = vec![
        Outcome::Failure(vec!["a".to_string()]),
        Outcome::Failure(vec!["b".to_string()]),
    ];
    assert_eq!(
        Outcome::combine_all(outcomes),
        Outcome::Failure(vec!["a".to_string(), "b".to_string()])
    );
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn outcome_into_maybe_forgets_the_error() {
    use railway::algebra::Maybe;

    let success: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(success.into_maybe(), Maybe::Just(42));

    let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    assert_eq!(failure.into_maybe(), Maybe::Nothing);
}

#[rstest]
fn outcome_result_roundtrip() {
    let ok: Result<i32, String> = Ok(42);
    let outcome: Outcome<i32, String> = ok.into();
    let back: Result<i32, String> = outcome.into();
    assert_eq!(back, Ok(42));
}
