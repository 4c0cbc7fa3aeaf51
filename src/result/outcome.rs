//! Outcome type - a computation that succeeded or failed.
//!
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. Failures are plain
//! data: they are propagated by chaining combinators and are never raised.
//! Asking a value for a payload it does not hold (e.g. `unwrap` on a
//! `Failure`) is a programmer error and panics with a
//! [`ContractViolation`] message instead.
//!
//! # Examples
//!
//! ```rust
//! use essentials::Outcome;
//!
//! let success: Outcome<i32, String> = Outcome::Success(21);
//! let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
//!
//! assert_eq!(success.map(|x| x * 2), Outcome::Success(42));
//! assert_eq!(failure.map_error(|e| e.len()), Outcome::Failure(4));
//! ```

use std::fmt;

use crate::option::Maybe;
use crate::violation::ContractViolation;

const UNWRAP_ON_FAILURE: &str = "called `Outcome::unwrap()` on a `Failure` value";
const EXPECT_ON_FAILURE: &str = "called `Outcome::expect()` on a `Failure` value";
const UNWRAP_ERR_ON_SUCCESS: &str = "called `Outcome::unwrap_err()` on a `Success` value";
const EXPECT_ERR_ON_SUCCESS: &str = "called `Outcome::expect_err()` on a `Success` value";

/// The result of a computation: either `Success(T)` or `Failure(E)`.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use essentials::{Maybe, Outcome};
///
/// let outcome: Outcome<u16, &str> = Outcome::success(8080);
/// assert_eq!(outcome.ok(), Maybe::Present(8080));
/// assert_eq!(outcome.err(), Maybe::Absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation completed with a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Success` value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` value.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Success` whose value satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    ///
    /// let outcome: Outcome<i32, ()> = Outcome::Success(3);
    /// assert!(outcome.is_success_and(|x| *x > 2));
    /// assert!(!Outcome::<i32, ()>::Failure(()).is_success_and(|_| true));
    /// ```
    #[inline]
    pub fn is_success_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` whose error satisfies `predicate`.
    #[inline]
    pub fn is_failure_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Projects the success value into a [`Maybe`], discarding any error.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(_) => Maybe::Absent,
        }
    }

    /// Projects the error into a [`Maybe`], discarding any success value.
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::Absent,
            Self::Failure(error) => Maybe::Present(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, passing failures through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    ///
    /// let success: Outcome<&str, i32> = Outcome::Success("four");
    /// assert_eq!(success.map(str::len), Outcome::Success(4));
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Failure(-1);
    /// assert_eq!(failure.map(str::len), Outcome::Failure(-1));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the success value, or returns `default` on failure.
    ///
    /// `default` is evaluated eagerly by the caller.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies a function to the success value, or computes a default on failure.
    ///
    /// `default` is invoked only on the `Failure` path.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default(),
        }
    }

    /// Applies a function to the error, passing success values through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Failure("bad input");
    /// assert_eq!(failure.map_error(str::len), Outcome::Failure(9));
    /// ```
    #[inline]
    pub fn map_error<O, F>(self, function: F) -> Outcome<T, O>
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Calls `inspector` with the success value, if any.
    #[inline]
    pub fn inspect<F>(&self, inspector: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = self {
            inspector(value);
        }
    }

    /// Calls `inspector` with the error, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let outcome: Outcome<i32, &str> = Outcome::Failure("disk full");
    /// outcome.inspect_error(|error| log.push(error.to_string()));
    /// assert_eq!(log, vec!["disk full".to_string()]);
    /// ```
    #[inline]
    pub fn inspect_error<F>(&self, inspector: F)
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = self {
            inspector(error);
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value or `default`.
    ///
    /// `default` is evaluated eagerly by the caller.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes it from `default`.
    ///
    /// `default` is invoked only on the `Failure` path.
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default(),
        }
    }

    /// Returns the error, consuming the value.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] message if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Success(_) => ContractViolation::new(UNWRAP_ERR_ON_SUCCESS).raise(),
            Self::Failure(error) => error,
        }
    }

    /// Returns the error, or the violation [`unwrap_err`](Self::unwrap_err)
    /// would have panicked with.
    ///
    /// # Errors
    ///
    /// Returns a violation if this is a `Success`.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, ContractViolation> {
        match self {
            Self::Success(_) => Err(ContractViolation::new(UNWRAP_ERR_ON_SUCCESS)),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the error, consuming the value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`; the message starts with `message`
    /// unless it is blank.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Success(_) => {
                ContractViolation::with_detail(message, EXPECT_ERR_ON_SUCCESS).raise()
            }
            Self::Failure(error) => error,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Returns `other` if this is a `Success`, otherwise this failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    ///
    /// let first: Outcome<i32, &str> = Outcome::Success(1);
    /// assert_eq!(first.and(Outcome::<&str, &str>::Success("next")), Outcome::Success("next"));
    ///
    /// let first: Outcome<i32, &str> = Outcome::Failure("early");
    /// assert_eq!(first.and(Outcome::<&str, &str>::Failure("late")), Outcome::Failure("early"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `function` with the success value, or passes the failure through.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns this success, otherwise `other`.
    #[inline]
    pub fn or<O>(self, other: Outcome<T, O>) -> Outcome<T, O> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Returns this success, otherwise calls `function` with the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    ///
    /// let retry = |attempts: u32| -> Outcome<&str, u32> {
    ///     if attempts < 3 { Outcome::Failure(attempts + 1) } else { Outcome::Success("done") }
    /// };
    /// let outcome: Outcome<&str, u32> = Outcome::Failure(2);
    /// assert_eq!(outcome.or_else(retry), Outcome::Failure(3));
    /// ```
    #[inline]
    pub fn or_else<O, F>(self, function: F) -> Outcome<T, O>
    where
        F: FnOnce(E) -> Outcome<T, O>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into the standard [`Result`], so the failure can be
    /// propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns `Err(e)` for `Failure(e)`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns an iterator over the success value (zero or one item).
    #[inline]
    pub fn iter(&self) -> IntoIter<&T> {
        self.as_ref().into_iter()
    }
}

// =============================================================================
// Operations Requiring a Printable Error
// =============================================================================

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`. The panic message is a
    /// [`ContractViolation`] whose cause is the `Debug` rendering of the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(2);
    /// assert_eq!(outcome.unwrap(), 2);
    /// ```
    ///
    /// ```rust,should_panic
    /// use essentials::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("emergency failure".to_string());
    /// outcome.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(violation) => violation.raise(),
        }
    }

    /// Returns the success value, or the violation [`unwrap`](Self::unwrap)
    /// would have panicked with.
    ///
    /// # Errors
    ///
    /// Returns a violation carrying the error as its cause if this is a
    /// `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Failure("boom");
    /// let violation = outcome.try_unwrap().unwrap_err();
    /// assert_eq!(violation.cause(), Some("\"boom\""));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, ContractViolation> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(ContractViolation::new(UNWRAP_ON_FAILURE).caused_by(error)),
        }
    }

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`; the message starts with `message`
    /// unless it is blank, and carries the error as its cause.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => ContractViolation::with_detail(message, EXPECT_ON_FAILURE)
                .caused_by(error)
                .raise(),
        }
    }
}

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }
}

// =============================================================================
// Nested Forms
// =============================================================================

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Success(Outcome::Failure("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> Outcome<Maybe<T>, E> {
    /// Swaps an `Outcome` of a `Maybe` into a `Maybe` of an `Outcome`.
    ///
    /// - `Success(Absent)` becomes `Absent`
    /// - `Success(Present(v))` becomes `Present(Success(v))`
    /// - `Failure(e)` becomes `Present(Failure(e))`
    ///
    /// This is the inverse of [`Maybe::transpose`].
    #[inline]
    pub fn transpose(self) -> Maybe<Outcome<T, E>> {
        match self {
            Self::Success(Maybe::Present(value)) => Maybe::Present(Outcome::Success(value)),
            Self::Success(Maybe::Absent) => Maybe::Absent,
            Self::Failure(error) => Maybe::Present(Outcome::Failure(error)),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)`, `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// An iterator over the success value of an [`Outcome`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: std::option::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.ok().into_option().into_iter(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> IntoIter<&'a T> {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone, Eq, std::hash::Hash);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_outcome_success_construction() {
        let outcome: Outcome<i32, String> = Outcome::success(1);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
    }

    #[rstest]
    fn test_outcome_failure_construction() {
        let outcome: Outcome<i32, String> = Outcome::failure("no".to_string());
        assert!(outcome.is_failure());
        assert!(!outcome.is_success());
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let outcome: Outcome<i32, String> = ok.into();
        assert_eq!(Result::from(outcome), Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let outcome: Outcome<i32, String> = err.into();
        assert_eq!(Result::from(outcome), Err("error".to_string()));
    }

    #[rstest]
    fn test_try_unwrap_err_on_success_reports_violation() {
        let outcome: Outcome<i32, String> = Outcome::Success(1);
        let violation = outcome.try_unwrap_err().unwrap_err();
        assert_eq!(
            violation.message(),
            "called `Outcome::unwrap_err()` on a `Success` value"
        );
        assert_eq!(violation.cause(), None);
    }
}
