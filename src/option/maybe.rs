//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which is either `Present(T)` or
//! `Absent`. Absence is carried by the variant tag alone, never by a
//! sentinel inside the payload, so a `Present` value always holds a usable
//! payload.
//!
//! Sentinel-based inputs are adapted once, at the boundary, with
//! [`Maybe::of`] / [`Maybe::from_value`].
//!
//! # Examples
//!
//! ```rust
//! use essentials::option::Maybe;
//!
//! let present = Maybe::some(21);
//! let absent: Maybe<i32> = Maybe::none();
//!
//! assert_eq!(present.map(|x| x * 2), Maybe::Present(42));
//! assert_eq!(absent.map(|x| x * 2), Maybe::Absent);
//!
//! match present {
//!     Maybe::Present(value) => println!("Got: {}", value),
//!     Maybe::Absent => println!("Nothing"),
//! }
//! ```

use std::fmt;

use crate::result::Outcome;
use crate::violation::ContractViolation;

const UNWRAP_ON_ABSENT: &str = "called `Maybe::unwrap()` on an `Absent` value";
const EXPECT_ON_ABSENT: &str = "called `Maybe::expect()` on an `Absent` value";

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// * `T` - The type of the payload
///
/// # Examples
///
/// ```rust
/// use essentials::option::Maybe;
///
/// let name = Maybe::some("Ferris");
/// assert_eq!(name.unwrap_or("anonymous"), "Ferris");
///
/// let missing: Maybe<&str> = Maybe::none();
/// assert_eq!(missing.unwrap_or("anonymous"), "anonymous");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No payload.
    Absent,
    /// A payload is present.
    Present(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Present` value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an `Absent` value.
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// assert!(Maybe::some(1).is_present());
    /// assert!(!Maybe::<i32>::none().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is an `Absent` value.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if this is `Present` and the payload satisfies `predicate`.
    ///
    /// The predicate runs at most once, and never on `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// assert!(Maybe::some(4).is_present_and(|x| x % 2 == 0));
    /// assert!(!Maybe::some(3).is_present_and(|x| x % 2 == 0));
    /// assert!(!Maybe::<i32>::none().is_present_and(|_| true));
    /// ```
    #[inline]
    pub fn is_present_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// assert_eq!(Maybe::some("four").map(str::len), Maybe::Present(4));
    /// assert_eq!(Maybe::<&str>::none().map(str::len), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a function to the payload, or returns `default` if absent.
    ///
    /// `default` is evaluated by the caller before the call, whether or not it
    /// is used. Use [`map_or_else`](Self::map_or_else) to defer it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// assert_eq!(Maybe::some("four").map_or(0, str::len), 4);
    /// assert_eq!(Maybe::<&str>::none().map_or(0, str::len), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Applies a function to the payload, or computes a default if absent.
    ///
    /// `default` is invoked exactly once, and only on the `Absent` path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// let fallback = 7;
    /// assert_eq!(Maybe::some(2).map_or_else(|| fallback * 2, |x| x * 10), 20);
    /// assert_eq!(Maybe::<i32>::none().map_or_else(|| fallback * 2, |x| x * 10), 14);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default(),
        }
    }

    // =========================================================================
    // Outcome Bridges
    // =========================================================================

    /// Transforms into an [`Outcome`], mapping `Absent` to `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::some(1).ok_or("missing"), Outcome::Success(1));
    /// assert_eq!(Maybe::<i32>::none().ok_or("missing"), Outcome::Failure("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }

    /// Transforms into an [`Outcome`], computing the error lazily when absent.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error()),
        }
    }

    /// Calls `inspector` with the payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// Maybe::some(3).inspect(|value| seen.push(*value));
    /// Maybe::<i32>::none().inspect(|value| seen.push(*value));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn inspect<F>(&self, inspector: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            inspector(value);
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the payload, consuming the value.
    ///
    /// # Panics
    ///
    /// Panics with a [`ContractViolation`] message if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).unwrap(), 42);
    /// ```
    ///
    /// ```rust,should_panic
    /// use essentials::option::Maybe;
    ///
    /// Maybe::<i32>::none().unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => ContractViolation::new(UNWRAP_ON_ABSENT).raise(),
        }
    }

    /// Returns the payload, or the [`ContractViolation`] that
    /// [`unwrap`](Self::unwrap) would have panicked with.
    ///
    /// # Errors
    ///
    /// Returns a violation if this is `Absent`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, ContractViolation> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(ContractViolation::new(UNWRAP_ON_ABSENT)),
        }
    }

    /// Returns the payload, consuming the value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Absent`. The panic message is `message` followed by
    /// a fixed explanation on the next line; a blank `message` is omitted.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use essentials::option::Maybe;
    ///
    /// Maybe::<i32>::none().expect("config must be loaded");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => ContractViolation::with_detail(message, EXPECT_ON_ABSENT).raise(),
        }
    }

    /// Returns the payload or `default`.
    ///
    /// `default` is evaluated eagerly by the caller.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the payload or computes it from `default`.
    ///
    /// `default` is invoked only when this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// let mut calls = 0;
    /// assert_eq!(Maybe::some(1).unwrap_or_else(|| { calls += 1; 0 }), 1);
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Keeps the payload only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(4).filter(|x| x % 2 == 0), Maybe::Present(4));
    /// assert_eq!(Maybe::some(3).filter(|x| x % 2 == 0), Maybe::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Present(value) = self {
            if predicate(&value) {
                return Self::Present(value);
            }
        }
        Self::Absent
    }

    /// Returns `Absent` if this is absent, otherwise returns `other`.
    ///
    /// The left payload is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).and(Maybe::some("x")), Maybe::Present("x"));
    /// assert_eq!(Maybe::<i32>::none().and(Maybe::some("x")), Maybe::Absent);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns `Absent` if this is absent, otherwise calls `function` with the
    /// payload and returns its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).and_then(half).and_then(half), Maybe::Present(2));
    /// assert_eq!(Maybe::some(6).and_then(half).and_then(half), Maybe::Absent);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns this value if present, otherwise `other`.
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Returns this value if present, otherwise the result of `other`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => other(),
        }
    }

    /// Returns whichever of `self` and `other` is present, if exactly one is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).xor(Maybe::none()), Maybe::Present(1));
    /// assert_eq!(Maybe::none().xor(Maybe::some(2)), Maybe::Present(2));
    /// assert_eq!(Maybe::some(1).xor(Maybe::some(2)), Maybe::Absent);
    /// assert_eq!(Maybe::<i32>::none().xor(Maybe::none()), Maybe::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            _ => Self::Absent,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into the standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns an iterator over the payload (zero or one item).
    #[inline]
    pub fn iter(&self) -> IntoIter<&T> {
        self.as_ref().into_iter()
    }
}

// =============================================================================
// Boundary Adapters
// =============================================================================

impl<T: PartialEq> Maybe<T> {
    /// Adapts a possibly missing value that may also hold sentinel values.
    ///
    /// Returns `Absent` when `value` is `None` or equal to any entry of
    /// `special_values`, and `Present(value)` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// assert_eq!(Maybe::of(Some("eve"), &["", "-"]), Maybe::Present("eve"));
    /// assert_eq!(Maybe::of(Some("-"), &["", "-"]), Maybe::Absent);
    /// assert_eq!(Maybe::<&str>::of(None, &[]), Maybe::Absent);
    /// ```
    pub fn of(value: Option<T>, special_values: &[T]) -> Self {
        match value {
            Some(value) if !special_values.contains(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// Same as [`of`](Self::of) for a value that is always supplied.
    pub fn from_value(value: T, special_values: &[T]) -> Self {
        Self::of(Some(value), special_values)
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the payload or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }
}

// =============================================================================
// Nested Forms
// =============================================================================

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::Present(1));
    /// assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::Absent);
    /// assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<T, E> Maybe<Outcome<T, E>> {
    /// Swaps a `Maybe` of an `Outcome` into an `Outcome` of a `Maybe`.
    ///
    /// - `Absent` becomes `Success(Absent)`
    /// - `Present(Success(v))` becomes `Success(Present(v))`
    /// - `Present(Failure(e))` becomes `Failure(e)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::{Maybe, Outcome};
    ///
    /// let value: Maybe<Outcome<i32, String>> = Maybe::some(Outcome::Success(5));
    /// assert_eq!(value.transpose(), Outcome::Success(Maybe::Present(5)));
    /// ```
    #[inline]
    pub fn transpose(self) -> Outcome<Maybe<T>, E> {
        match self {
            Self::Present(Outcome::Success(value)) => Outcome::Success(Maybe::Present(value)),
            Self::Present(Outcome::Failure(error)) => Outcome::Failure(error),
            Self::Absent => Outcome::Success(Maybe::Absent),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(v)` becomes `Present(v)`, `None` becomes `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

/// An iterator over the payload of a [`Maybe`].
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

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_option().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> IntoIter<&'a T> {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy, Default);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone, Eq, std::hash::Hash);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_maybe_present_construction() {
        let value = Maybe::some(42);
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn test_maybe_absent_construction() {
        let value: Maybe<i32> = Maybe::none();
        assert!(value.is_absent());
        assert!(!value.is_present());
        assert_eq!(value, Maybe::default());
    }

    #[rstest]
    #[case(Some(5), Maybe::Present(5))]
    #[case(Some(0), Maybe::Absent)]
    #[case(Some(-1), Maybe::Absent)]
    #[case(None, Maybe::Absent)]
    fn test_of_rejects_missing_and_special_values(
        #[case] input: Option<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(Maybe::of(input, &[0, -1]), expected);
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let present: Maybe<i32> = Some(3).into();
        assert_eq!(Option::from(present), Some(3));

        let absent: Maybe<i32> = None.into();
        assert_eq!(Option::<i32>::from(absent), None);
    }

    #[rstest]
    fn test_absent_orders_before_present() {
        assert!(Maybe::Absent < Maybe::Present(i32::MIN));
    }

    #[rstest]
    fn test_iteration_yields_payload_once() {
        assert_eq!(Maybe::some(9).into_iter().collect::<Vec<_>>(), vec![9]);
        assert_eq!(Maybe::<i32>::none().iter().count(), 0);
    }
}
