//! Short-circuit scans over ordered sequences of outcomes.
//!
//! Every function here is a left-to-right scan that stops at the first
//! element of a given variant:
//!
//! | function | looks for | returns |
//! |---|---|---|
//! | [`join_oks`] | first `Success` | `Maybe<Outcome<T, E>>` |
//! | [`join_errors`] | first `Failure` | `Maybe<Outcome<T, E>>` |
//! | [`first_ok`] | first `Success` | `Maybe<T>` |
//! | [`first_error`] | first `Failure` | `Maybe<E>` |
//!
//! `Absent` means the scan ran out of elements without a hit. Elements after
//! the hit are not pulled from the iterator.
//!
//! The macros of the same names accept a fixed list of outcomes whose
//! payload types may differ, converting the matched payload with [`Into`]
//! into the common type of the result. They short-circuit too: arguments
//! after the hit are never evaluated, and only the matched payload is
//! converted.

use crate::option::Maybe;
use crate::result::Outcome;

/// Returns the first `Present` item of a sequence.
///
/// This is the scan the other functions of this module are built on.
///
/// # Examples
///
/// ```rust
/// use essentials::Maybe;
/// use essentials::result::first_present;
///
/// let items = [Maybe::none(), Maybe::some(2), Maybe::some(3)];
/// assert_eq!(first_present(items), Maybe::Present(2));
/// ```
pub fn first_present<T, I>(items: I) -> Maybe<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    items
        .into_iter()
        .find(Maybe::is_present)
        .unwrap_or_default()
}

/// Returns the first `Success` of a sequence, still wrapped in its outcome.
///
/// # Examples
///
/// ```rust
/// use essentials::{Maybe, Outcome};
/// use essentials::result::join_oks;
///
/// let outcomes: Vec<Outcome<i32, &str>> =
///     vec![Outcome::Failure("a"), Outcome::Success(1), Outcome::Success(2)];
/// assert_eq!(join_oks(outcomes), Maybe::Present(Outcome::Success(1)));
/// ```
pub fn join_oks<T, E, I>(outcomes: I) -> Maybe<Outcome<T, E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    first_present(
        outcomes
            .into_iter()
            .map(|outcome| outcome.ok().map(Outcome::Success)),
    )
}

/// Returns the first `Failure` of a sequence, still wrapped in its outcome.
///
/// `Absent` means every element was a `Success`.
pub fn join_errors<T, E, I>(outcomes: I) -> Maybe<Outcome<T, E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    first_present(
        outcomes
            .into_iter()
            .map(|outcome| outcome.err().map(Outcome::Failure)),
    )
}

/// Returns the value of the first `Success` of a sequence.
pub fn first_ok<T, E, I>(outcomes: I) -> Maybe<T>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    first_present(outcomes.into_iter().map(Outcome::ok))
}

/// Returns the error of the first `Failure` of a sequence.
///
/// # Examples
///
/// ```rust
/// use essentials::{Maybe, Outcome};
/// use essentials::result::first_error;
///
/// let checks = ["8080", "http", "-1"].map(|port| Outcome::checked(|| port.parse::<u16>()));
/// assert!(first_error(checks).is_present());
/// ```
pub fn first_error<T, E, I>(outcomes: I) -> Maybe<E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    first_present(outcomes.into_iter().map(Outcome::err))
}

/// Returns the first `Success` among its arguments, converted into the
/// common success type and rewrapped in an `Outcome`.
///
/// All arguments share the failure type.
///
/// # Examples
///
/// ```rust
/// use essentials::{join_oks, Maybe, Outcome};
///
/// let small: Outcome<i32, String> = Outcome::Failure("too small".to_string());
/// let half: Outcome<f32, String> = Outcome::Success(6.5);
/// let six: Outcome<i32, String> = Outcome::Success(6);
///
/// let joined: Maybe<Outcome<f64, String>> = join_oks!(small, half, six);
/// assert_eq!(joined, Maybe::Present(Outcome::Success(6.5)));
/// ```
#[macro_export]
macro_rules! join_oks {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::result::Outcome::ok($first)
            .map(|value| $crate::result::Outcome::Success(::core::convert::Into::into(value)))
            $(
                .or_else(|| {
                    $crate::result::Outcome::ok($rest).map(|value| {
                        $crate::result::Outcome::Success(::core::convert::Into::into(value))
                    })
                })
            )*
    };
}

/// Returns the first `Failure` among its arguments, converted into the
/// common failure type and rewrapped in an `Outcome`.
///
/// # Examples
///
/// ```rust
/// use essentials::{join_errors, Maybe, Outcome};
///
/// let six: Outcome<i32, i32> = Outcome::Success(6);
/// let half: Outcome<i32, f64> = Outcome::Failure(6.5);
/// let whole: Outcome<i32, i32> = Outcome::Failure(6);
///
/// let joined: Maybe<Outcome<i32, f64>> = join_errors!(six, half, whole);
/// assert_eq!(joined, Maybe::Present(Outcome::Failure(6.5)));
/// ```
#[macro_export]
macro_rules! join_errors {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::result::Outcome::err($first)
            .map(|error| $crate::result::Outcome::Failure(::core::convert::Into::into(error)))
            $(
                .or_else(|| {
                    $crate::result::Outcome::err($rest).map(|error| {
                        $crate::result::Outcome::Failure(::core::convert::Into::into(error))
                    })
                })
            )*
    };
}

/// Returns the value of the first `Success` among its arguments, converted
/// into the common success type.
///
/// # Examples
///
/// ```rust
/// use essentials::{first_ok, Maybe, Outcome};
///
/// let failed: Outcome<i32, String> = Outcome::Failure("offline".to_string());
/// let half: Outcome<f64, ()> = Outcome::Success(6.5);
/// let six: Outcome<i32, ()> = Outcome::Success(6);
///
/// let first: Maybe<f64> = first_ok!(failed, half, six);
/// assert_eq!(first, Maybe::Present(6.5));
/// ```
#[macro_export]
macro_rules! first_ok {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::result::Outcome::ok($first)
            .map(::core::convert::Into::into)
            $( .or_else(|| $crate::result::Outcome::ok($rest).map(::core::convert::Into::into)) )*
    };
}

/// Returns the error of the first `Failure` among its arguments, converted
/// into the common failure type.
#[macro_export]
macro_rules! first_error {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::result::Outcome::err($first)
            .map(::core::convert::Into::into)
            $( .or_else(|| $crate::result::Outcome::err($rest).map(::core::convert::Into::into)) )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_first_present_of_empty_sequence_is_absent() {
        let items: Vec<Maybe<i32>> = Vec::new();
        assert_eq!(first_present(items), Maybe::Absent);
    }

    #[rstest]
    fn test_scan_stops_at_first_hit() {
        let pulled = Cell::new(0);
        let outcomes = (0..10).map(|index| {
            pulled.set(pulled.get() + 1);
            if index == 2 {
                Outcome::Failure(index)
            } else {
                Outcome::Success(index)
            }
        });

        assert_eq!(first_error(outcomes), Maybe::Present(2));
        assert_eq!(pulled.get(), 3);
    }

    #[rstest]
    fn test_join_errors_all_success_is_absent() {
        let outcomes: [Outcome<i32, String>; 3] =
            [Outcome::Success(1), Outcome::Success(2), Outcome::Success(3)];
        assert_eq!(join_errors(outcomes), Maybe::Absent);
    }

    #[rstest]
    fn test_first_ok_all_failure_is_absent() {
        let outcomes: [Outcome<i32, &str>; 2] = [Outcome::Failure("a"), Outcome::Failure("b")];
        assert_eq!(first_ok(outcomes), Maybe::Absent);
    }

    #[rstest]
    fn test_first_error_macro_single_argument() {
        let only: Outcome<(), &str> = Outcome::Failure("only");
        let first: Maybe<&str> = first_error!(only);
        assert_eq!(first, Maybe::Present("only"));
    }
}
