//! Unit tests for Maybe<T>.
//!
//! Maybe represents a value that may be absent:
//! - `Present(T)`: Contains a payload
//! - `Absent`: Contains nothing
//!
//! Callbacks passed to the lazy combinators must run at most once and only on
//! the path that needs them; the eager variants receive values the caller
//! already evaluated.

use essentials::violation::ContractViolation;
use essentials::{Maybe, Outcome};
use rstest::rstest;
use std::cell::Cell;
use std::panic;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn maybe_some_is_present() {
    let value = Maybe::some(42);
    assert!(value.is_present());
    assert!(!value.is_absent());
}

#[rstest]
fn maybe_none_is_absent() {
    let value: Maybe<i32> = Maybe::none();
    assert!(value.is_absent());
    assert!(!value.is_present());
}

#[rstest]
fn maybe_absent_values_are_equal() {
    assert_eq!(Maybe::<String>::none(), Maybe::<String>::Absent);
    assert_ne!(Maybe::some(1), Maybe::some(2));
}

#[rstest]
fn maybe_of_special_value_is_absent() {
    assert_eq!(Maybe::from_value(String::new(), &[String::new()]), Maybe::Absent);
    assert_eq!(
        Maybe::from_value("x".to_string(), &[String::new()]),
        Maybe::Present("x".to_string())
    );
}

#[rstest]
fn maybe_of_without_specials_only_rejects_none() {
    assert_eq!(Maybe::of(Some(0), &[]), Maybe::Present(0));
    assert_eq!(Maybe::<i32>::of(None, &[]), Maybe::Absent);
}

// =============================================================================
// Predicates
// =============================================================================

#[rstest]
fn maybe_is_present_and_evaluates_predicate_once() {
    let calls = Cell::new(0);
    let result = Maybe::some(10).is_present_and(|value| {
        calls.set(calls.get() + 1);
        *value > 5
    });
    assert!(result);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn maybe_is_present_and_skips_predicate_when_absent() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::none().is_present_and(|_| {
        calls.set(calls.get() + 1);
        true
    });
    assert!(!result);
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn maybe_map_changes_payload_type() {
    let mapped: Maybe<String> = Maybe::some(7).map(|x| x.to_string());
    assert_eq!(mapped, Maybe::Present("7".to_string()));
}

#[rstest]
fn maybe_map_or_else_invokes_default_only_when_absent() {
    let calls = Cell::new(0);
    let default = || {
        calls.set(calls.get() + 1);
        0
    };

    assert_eq!(Maybe::some(3).map_or_else(default, |x| x * 2), 6);
    assert_eq!(calls.get(), 0);

    assert_eq!(Maybe::<i32>::none().map_or_else(default, |x| x * 2), 0);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn maybe_map_or_evaluates_default_eagerly() {
    let calls = Cell::new(0);
    let expensive = || {
        calls.set(calls.get() + 1);
        0
    };

    assert_eq!(Maybe::some(3).map_or(expensive(), |x| x * 2), 6);
    assert_eq!(Maybe::<i32>::none().map_or(expensive(), |x| x * 2), 0);
    assert_eq!(calls.get(), 2);
}

// =============================================================================
// Outcome Bridges
// =============================================================================

#[rstest]
fn maybe_ok_or_bridges_to_outcome() {
    assert_eq!(Maybe::some(1).ok_or("missing"), Outcome::Success(1));
    assert_eq!(Maybe::<i32>::none().ok_or("missing"), Outcome::Failure("missing"));
}

#[rstest]
fn maybe_ok_or_else_invokes_error_once_when_absent() {
    let calls = Cell::new(0);
    let error = || {
        calls.set(calls.get() + 1);
        "missing"
    };

    assert_eq!(Maybe::some(1).ok_or_else(error), Outcome::Success(1));
    assert_eq!(calls.get(), 0);
    assert_eq!(Maybe::<i32>::none().ok_or_else(error), Outcome::Failure("missing"));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn maybe_inspect_runs_only_when_present() {
    let seen = Cell::new(0);
    Maybe::some(5).inspect(|value| seen.set(seen.get() + value));
    Maybe::<i32>::none().inspect(|value| seen.set(seen.get() + value));
    assert_eq!(seen.get(), 5);
}

// =============================================================================
// Unwrap Operations
// =============================================================================

#[rstest]
fn maybe_unwrap_returns_payload() {
    assert_eq!(Maybe::some("value").unwrap(), "value");
}

#[rstest]
#[should_panic(expected = "called `Maybe::unwrap()` on an `Absent` value")]
fn maybe_unwrap_on_absent_panics() {
    Maybe::<i32>::none().unwrap();
}

#[rstest]
fn maybe_expect_prepends_caller_message() {
    let payload = panic::catch_unwind(|| Maybe::<i32>::none().expect("port is required"))
        .unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert_eq!(
        message,
        "port is required\ncalled `Maybe::expect()` on an `Absent` value"
    );
}

#[rstest]
fn maybe_expect_with_blank_message_uses_only_explanation() {
    let payload = panic::catch_unwind(|| Maybe::<i32>::none().expect("  ")).unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert_eq!(message, "called `Maybe::expect()` on an `Absent` value");
}

#[rstest]
fn maybe_try_unwrap_reports_violation() {
    assert_eq!(Maybe::some(1).try_unwrap(), Ok(1));
    assert_eq!(
        Maybe::<i32>::none().try_unwrap(),
        Err(ContractViolation::new(
            "called `Maybe::unwrap()` on an `Absent` value"
        ))
    );
}

#[rstest]
#[case(Maybe::some(4), 4)]
#[case(Maybe::none(), 9)]
fn maybe_unwrap_or(#[case] value: Maybe<i32>, #[case] expected: i32) {
    assert_eq!(value.unwrap_or(9), expected);
}

#[rstest]
fn maybe_unwrap_or_evaluates_default_even_when_unused() {
    let calls = Cell::new(0);
    let default = || {
        calls.set(calls.get() + 1);
        0
    };

    assert_eq!(Maybe::some(1).unwrap_or(default()), 1);
    assert_eq!(calls.get(), 1);
    assert_eq!(Maybe::<i32>::none().unwrap_or(default()), 0);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn maybe_unwrap_or_else_invokes_supplier_only_when_absent() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        0
    };

    assert_eq!(Maybe::some(1).unwrap_or_else(supplier), 1);
    assert_eq!(calls.get(), 0);
    assert_eq!(Maybe::<i32>::none().unwrap_or_else(supplier), 0);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn maybe_unwrap_or_default() {
    assert_eq!(Maybe::<String>::none().unwrap_or_default(), String::new());
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
#[case(Maybe::some(4), Maybe::some(4))]
#[case(Maybe::some(3), Maybe::none())]
#[case(Maybe::none(), Maybe::none())]
fn maybe_filter(#[case] value: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(value.filter(|x| x % 2 == 0), expected);
}

#[rstest]
fn maybe_and_discards_left_payload() {
    assert_eq!(Maybe::some(1).and(Maybe::some("b")), Maybe::Present("b"));
    assert_eq!(Maybe::some(1).and(Maybe::<&str>::none()), Maybe::Absent);
    assert_eq!(Maybe::<i32>::none().and(Maybe::some("b")), Maybe::Absent);
}

#[rstest]
fn maybe_and_then_skips_function_when_absent() {
    let calls = Cell::new(0);
    let function = |x: i32| {
        calls.set(calls.get() + 1);
        Maybe::some(x + 1)
    };

    assert_eq!(Maybe::<i32>::none().and_then(function), Maybe::Absent);
    assert_eq!(calls.get(), 0);
    assert_eq!(Maybe::some(1).and_then(function), Maybe::Present(2));
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(Maybe::some(1), Maybe::some(2), Maybe::some(1))]
#[case(Maybe::some(1), Maybe::none(), Maybe::some(1))]
#[case(Maybe::none(), Maybe::some(2), Maybe::some(2))]
#[case(Maybe::none(), Maybe::none(), Maybe::none())]
fn maybe_or(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(left.or(right), expected);
}

#[rstest]
fn maybe_or_else_invokes_supplier_only_when_absent() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        Maybe::some(0)
    };

    assert_eq!(Maybe::some(1).or_else(supplier), Maybe::Present(1));
    assert_eq!(calls.get(), 0);
    assert_eq!(Maybe::none().or_else(supplier), Maybe::Present(0));
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(Maybe::some(1), Maybe::some(2), Maybe::none())]
#[case(Maybe::some(1), Maybe::none(), Maybe::some(1))]
#[case(Maybe::none(), Maybe::some(2), Maybe::some(2))]
#[case(Maybe::none(), Maybe::none(), Maybe::none())]
fn maybe_xor(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(left.xor(right), expected);
}

// =============================================================================
// Nested Forms
// =============================================================================

#[rstest]
fn maybe_flatten() {
    assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::Present(1));
    assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::Absent);
    assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::Absent);
}

#[rstest]
fn maybe_transpose() {
    let absent: Maybe<Outcome<i32, &str>> = Maybe::none();
    assert_eq!(absent.transpose(), Outcome::Success(Maybe::Absent));

    let success: Maybe<Outcome<i32, &str>> = Maybe::some(Outcome::Success(1));
    assert_eq!(success.transpose(), Outcome::Success(Maybe::Present(1)));

    let failure: Maybe<Outcome<i32, &str>> = Maybe::some(Outcome::Failure("e"));
    assert_eq!(failure.transpose(), Outcome::Failure("e"));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn maybe_as_mut_allows_in_place_update() {
    let mut value = Maybe::some(1);
    if let Maybe::Present(payload) = value.as_mut() {
        *payload += 1;
    }
    assert_eq!(value, Maybe::Present(2));
}

#[rstest]
fn maybe_into_option() {
    assert_eq!(Maybe::some(1).into_option(), Some(1));
    assert_eq!(Maybe::<i32>::none().into_option(), None);
}

#[rstest]
fn maybe_collects_through_iterators() {
    let values = vec![Maybe::some(1), Maybe::none(), Maybe::some(3)];
    let present: Vec<i32> = values.into_iter().flatten().collect();
    assert_eq!(present, vec![1, 3]);
}
