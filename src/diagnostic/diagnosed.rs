//! An error type that carries a [`Diagnostic`] as its message.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;

use super::Diagnostic;

const REPORT_SUGGESTION: &str =
    "If you can't solve this problem, show this information to the developers along this:";

/// An error whose user-facing message is a rendered [`Diagnostic`].
///
/// When a backtrace was captured, the message ends with a suggestion to
/// report the problem followed by the backtrace itself.
///
/// # Examples
///
/// ```rust
/// use essentials::diagnostic::{DiagnosedError, Diagnostic};
///
/// fn load() -> Result<(), DiagnosedError> {
///     Err(DiagnosedError::without_backtrace(
///         Diagnostic::error("Configuration is missing.")
///             .with_help("Create config.toml next to the binary."),
///     ))
/// }
///
/// let error = load().unwrap_err();
/// assert_eq!(error.diagnostic().helps().len(), 1);
/// assert_eq!(
///     format!("{error:#}"),
///     "\n\nError: Configuration is missing.\n\n\
///      Help: Create config.toml next to the binary.\n\n"
/// );
/// ```
#[derive(Debug)]
pub struct DiagnosedError {
    diagnostic: Diagnostic,
    backtrace: Backtrace,
}

impl DiagnosedError {
    /// Wraps `diagnostic`, capturing a backtrace if `RUST_BACKTRACE` or
    /// `RUST_LIB_BACKTRACE` enables it.
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic,
            backtrace: Backtrace::capture(),
        }
    }

    /// Wraps `diagnostic`, always capturing a backtrace.
    pub fn with_backtrace(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic,
            backtrace: Backtrace::force_capture(),
        }
    }

    /// Wraps `diagnostic` without a backtrace.
    pub const fn without_backtrace(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic,
            backtrace: Backtrace::disabled(),
        }
    }

    /// The wrapped diagnostic.
    pub const fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// The backtrace taken at construction.
    pub const fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Consumes the error, returning the diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        self.diagnostic
    }

    /// Sets the diagnostic's title. See [`Diagnostic::with_concept`].
    #[must_use]
    pub fn with_concept(self, concept: impl Into<String>) -> Self {
        self.map_diagnostic(|diagnostic| diagnostic.with_concept(concept))
    }

    /// Appends a note to the diagnostic. See [`Diagnostic::with_note`].
    #[must_use]
    pub fn with_note(self, note: impl Into<String>) -> Self {
        self.map_diagnostic(|diagnostic| diagnostic.with_note(note))
    }

    /// Appends a help message to the diagnostic. See [`Diagnostic::with_help`].
    #[must_use]
    pub fn with_help(self, help: impl Into<String>) -> Self {
        self.map_diagnostic(|diagnostic| diagnostic.with_help(help))
    }

    fn map_diagnostic<F>(self, function: F) -> Self
    where
        F: FnOnce(Diagnostic) -> Diagnostic,
    {
        Self {
            diagnostic: function(self.diagnostic),
            backtrace: self.backtrace,
        }
    }
}

impl Default for DiagnosedError {
    fn default() -> Self {
        Self::new(Diagnostic::new())
    }
}

impl From<Diagnostic> for DiagnosedError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(diagnostic)
    }
}

impl fmt::Display for DiagnosedError {
    /// `{:#}` renders the diagnostic without ANSI colors.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if formatter.alternate() {
            write!(formatter, "\n\n{:#}\n\n", self.diagnostic)?;
        } else {
            write!(formatter, "\n\n{}\n\n", self.diagnostic)?;
        }
        if self.backtrace.status() == BacktraceStatus::Captured {
            write!(
                formatter,
                "\n{REPORT_SUGGESTION}\n\nStack trace is:\n{}",
                self.backtrace
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for DiagnosedError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_without_backtrace_has_no_suggestion() {
        let error = DiagnosedError::without_backtrace(Diagnostic::error("broken"));
        assert_eq!(format!("{error:#}"), "\n\nError: broken\n\n");
    }

    #[rstest]
    fn test_forced_backtrace_appends_suggestion() {
        let error = DiagnosedError::with_backtrace(Diagnostic::error("broken"));
        let message = format!("{error:#}");
        assert!(message.starts_with("\n\nError: broken\n\n\nIf you can't solve this problem"));
        assert!(message.contains("Stack trace is:\n"));
    }

    #[rstest]
    fn test_builder_passthrough_updates_diagnostic() {
        let error = DiagnosedError::without_backtrace(Diagnostic::new())
            .with_concept("title")
            .with_note("note")
            .with_help("help");
        assert_eq!(error.diagnostic().notes(), ["note".to_string()]);
        assert_eq!(error.diagnostic().helps(), ["help".to_string()]);
        assert_eq!(
            error.into_diagnostic().concept().into_option(),
            Some("title")
        );
    }
}
