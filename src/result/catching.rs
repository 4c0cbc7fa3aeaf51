//! Adapters that run a computation and capture its failure as an `Outcome`.
//!
//! Rust code fails in two ways: by returning `Err` (recoverable) or by
//! panicking (unrecoverable). The adapters below turn the first kind into an
//! [`Outcome`] and, for the unchecked adapters only, also the second kind
//! when the panic payload has the type the caller expects.

use std::any::{Any, type_name};
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use super::Outcome;
use crate::tuples::Tuple0;
use crate::violation::PayloadMismatch;

impl<T, E> Outcome<T, E> {
    /// Runs a fallible computation and captures its error.
    ///
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`. A panic
    /// inside `computation` is an unrecoverable failure and propagates
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    ///
    /// let parsed = Outcome::checked(|| "12".parse::<u8>());
    /// assert_eq!(parsed, Outcome::Success(12));
    ///
    /// let parsed = Outcome::checked(|| "300".parse::<u8>());
    /// assert!(parsed.is_failure());
    /// ```
    #[inline]
    pub fn checked<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        computation().into()
    }
}

impl<E> Outcome<Tuple0, E> {
    /// Runs a fallible action that produces no value.
    ///
    /// On success the outcome holds [`Tuple0`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    /// use essentials::tuples::Tuple0;
    ///
    /// let mut written = Vec::new();
    /// let outcome = Outcome::checked_run(|| -> Result<(), String> {
    ///     written.push("line");
    ///     Ok(())
    /// });
    /// assert_eq!(outcome, Outcome::Success(Tuple0));
    /// assert_eq!(written, vec!["line"]);
    /// ```
    #[inline]
    pub fn checked_run<F>(action: F) -> Self
    where
        F: FnOnce() -> Result<(), E>,
    {
        Outcome::checked(action).map(Tuple0::from)
    }
}

impl<T, E: Any + Send> Outcome<T, E> {
    /// Runs a fallible computation and captures both its error and a panic
    /// whose payload is an `E`.
    ///
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`, as with
    /// [`Outcome::checked`]. Panic payloads raised with
    /// [`std::panic::panic_any`] are matched by type. A string literal payload
    /// (`panic!("literal")`) is promoted to a `String` before matching, so
    /// `E = String` captures every textual panic.
    ///
    /// # Panics
    ///
    /// If the payload is not an `E`, writes the [`PayloadMismatch`] naming
    /// both types to stderr and resumes unwinding with it as the payload. The
    /// panic hook does not run for it, so no location or backtrace is printed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use essentials::Outcome;
    ///
    /// let divide = |divisor: u32| {
    ///     Outcome::<u32, String>::unchecked(|| {
    ///         if divisor == 1 {
    ///             return Err("dividing by one is pointless".to_string());
    ///         }
    ///         Ok(10 / divisor)
    ///     })
    /// };
    ///
    /// assert_eq!(divide(2), Outcome::Success(5));
    /// assert_eq!(divide(1), Outcome::Failure("dividing by one is pointless".to_string()));
    /// assert_eq!(
    ///     divide(0),
    ///     Outcome::Failure("attempt to divide by zero".to_string())
    /// );
    /// ```
    pub fn unchecked<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(result) => result.into(),
            Err(payload) => Self::Failure(downcast_payload::<E>(payload)),
        }
    }
}

impl<E: Any + Send> Outcome<Tuple0, E> {
    /// Runs a fallible action that produces no value, capturing its error and
    /// a panic whose payload is an `E`.
    ///
    /// # Panics
    ///
    /// Same as [`Outcome::unchecked`].
    pub fn unchecked_run<F>(action: F) -> Self
    where
        F: FnOnce() -> Result<(), E>,
    {
        Outcome::unchecked(action).map(Tuple0::from)
    }
}

fn downcast_payload<E: Any + Send>(payload: Box<dyn Any + Send>) -> E {
    downcast_or_report(payload, &mut io::stderr())
}

/// Returns the payload as an `E`, or writes a [`PayloadMismatch`] report to
/// `sink` and resumes unwinding with it.
fn downcast_or_report<E: Any + Send>(payload: Box<dyn Any + Send>, sink: &mut impl Write) -> E {
    let payload = match payload.downcast::<E>() {
        Ok(error) => return *error,
        Err(payload) => payload,
    };

    let (actual, message) = match payload.downcast::<&'static str>() {
        Ok(literal) => {
            let promoted: Box<dyn Any + Send> = Box::new((*literal).to_string());
            if let Ok(error) = promoted.downcast::<E>() {
                return *error;
            }
            ("&str", Some((*literal).to_string()))
        }
        Err(payload) => match payload.downcast::<String>() {
            Ok(message) => ("alloc::string::String", Some(*message)),
            Err(_) => ("a non-textual payload", None),
        },
    };

    let mismatch = PayloadMismatch::new(type_name::<E>(), actual, message);
    // A failed report must not replace the mismatch being raised.
    let _ = report_mismatch(&mismatch, sink);
    panic::resume_unwind(Box::new(mismatch))
}

/// Writes the one-line report of a mismatch.
fn report_mismatch(mismatch: &PayloadMismatch, sink: &mut impl Write) -> io::Result<()> {
    writeln!(sink, "{mismatch}")
}
