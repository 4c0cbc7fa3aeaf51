//! Failure kinds raised on misuse, as opposed to domain failures.
//!
//! Domain failures travel as data inside [`Outcome::Failure`](crate::Outcome::Failure).
//! The types here describe the two situations that are *not* domain
//! failures:
//!
//! - [`ContractViolation`]: a caller asked for a payload that is not there,
//!   e.g. `unwrap` on an `Absent` value. The panicking accessors render this
//!   type as their panic message, and the `try_*` accessors return it.
//! - [`PayloadMismatch`]: [`Outcome::unchecked`](crate::Outcome::unchecked)
//!   caught a panic whose payload is not of the expected type.

use std::fmt;

/// A programmer-contract violation: a payload was requested from the wrong variant.
///
/// # Examples
///
/// ```rust
/// use essentials::Maybe;
///
/// let violation = Maybe::<i32>::none().try_unwrap().unwrap_err();
/// assert_eq!(
///     violation.to_string(),
///     "called `Maybe::unwrap()` on an `Absent` value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractViolation {
    message: String,
    cause: Option<String>,
}

impl ContractViolation {
    /// Creates a violation with the given message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a violation whose message is `detail` followed by `message`
    /// on a new line. Blank details are dropped.
    pub fn with_detail(detail: &str, message: &str) -> Self {
        if detail.trim().is_empty() {
            Self::new(message)
        } else {
            Self::new(format!("{detail}\n{message}"))
        }
    }

    /// Attaches the rendering of the payload that caused the violation.
    #[must_use]
    pub fn caused_by(mut self, cause: impl fmt::Debug) -> Self {
        self.cause = Some(format!("{cause:?}"));
        self
    }

    /// The explanatory message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The `Debug` rendering of the underlying failure, if any.
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// Panics with this violation as the message.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{self}")
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(formatter, "{}: {cause}", self.message),
            None => formatter.write_str(&self.message),
        }
    }
}

impl std::error::Error for ContractViolation {}

/// Raised when a caught panic carries a payload of an unexpected type.
///
/// Its `Display` is written to stderr, then it is propagated with
/// [`std::panic::resume_unwind`], so the panic hook does not run for it and no
/// trace of its own is printed: it reports a classification problem, not the
/// place where the original panic happened.
///
/// # Examples
///
/// ```rust
/// use essentials::Outcome;
/// use essentials::violation::PayloadMismatch;
/// use std::panic::{AssertUnwindSafe, catch_unwind};
///
/// let caught = catch_unwind(AssertUnwindSafe(|| {
///     Outcome::<(), u8>::unchecked(|| panic!("boom"))
/// }))
/// .unwrap_err();
/// let mismatch = caught.downcast::<PayloadMismatch>().unwrap();
/// assert_eq!(mismatch.expected(), "u8");
/// assert_eq!(mismatch.message(), Some("boom"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PayloadMismatch {
    expected: &'static str,
    actual: &'static str,
    message: Option<String>,
}

impl PayloadMismatch {
    pub(crate) const fn new(
        expected: &'static str,
        actual: &'static str,
        message: Option<String>,
    ) -> Self {
        Self {
            expected,
            actual,
            message,
        }
    }

    /// Name of the payload type the caller declared.
    pub const fn expected(&self) -> &'static str {
        self.expected
    }

    /// Description of the payload type that was actually caught.
    pub const fn actual(&self) -> &'static str {
        self.actual
    }

    /// The original panic message, when the payload was textual.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for PayloadMismatch {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "panic payload was expected to be of type {}, but it is {}",
            self.expected, self.actual
        )?;
        if let Some(message) = &self.message {
            write!(formatter, " ({message})")?;
        }
        Ok(())
    }
}

impl std::error::Error for PayloadMismatch {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_violation_without_cause_display() {
        let violation = ContractViolation::new("called on the wrong variant");
        assert_eq!(violation.to_string(), "called on the wrong variant");
        assert_eq!(violation.cause(), None);
    }

    #[rstest]
    fn test_violation_with_cause_display() {
        let violation = ContractViolation::new("called on the wrong variant").caused_by("boom");
        assert_eq!(violation.to_string(), "called on the wrong variant: \"boom\"");
        assert_eq!(violation.cause(), Some("\"boom\""));
    }

    #[rstest]
    #[case("", "base")]
    #[case("   \t", "base")]
    #[case("custom", "custom\nbase")]
    fn test_violation_with_detail(#[case] detail: &str, #[case] expected: &str) {
        assert_eq!(ContractViolation::with_detail(detail, "base").message(), expected);
    }

    #[rstest]
    fn test_payload_mismatch_display() {
        let mismatch = PayloadMismatch::new("u8", "&str", Some("boom".to_string()));
        assert_eq!(
            mismatch.to_string(),
            "panic payload was expected to be of type u8, but it is &str (boom)"
        );

        let opaque = PayloadMismatch::new("u8", "a non-textual payload", None);
        assert_eq!(
            opaque.to_string(),
            "panic payload was expected to be of type u8, but it is a non-textual payload"
        );
    }
}
