//! Human-readable diagnostic messages.
//!
//! A [`Diagnostic`] is built with chained setters and rendered with
//! `Display`:
//!
//! ```text
//! Error: Could not read the configuration.
//!        The file is empty.
//!
//! Note: It was created by a previous run that crashed.
//!
//! Help: Delete the file and run again.
//! ```
//!
//! Each label is colored with ANSI escapes; the alternate flag (`{:#}`)
//! renders the same layout without them. [`DiagnosedError`] wraps a
//! diagnostic as an [`std::error::Error`].
//!
//! # Examples
//!
//! ```rust
//! use essentials::diagnostic::Diagnostic;
//!
//! let diagnostic = Diagnostic::new()
//!     .with_concept("Could not read the configuration.")
//!     .with_note("It was created by a previous run that crashed.")
//!     .with_help("Delete the file and run again.");
//!
//! assert_eq!(
//!     format!("{diagnostic:#}"),
//!     "Error: Could not read the configuration.\n\n\
//!      Note: It was created by a previous run that crashed.\n\n\
//!      Help: Delete the file and run again."
//! );
//! ```

mod diagnosed;
#[allow(clippy::module_inception)]
mod diagnostic;

pub use diagnosed::DiagnosedError;
pub use diagnostic::{Diagnostic, Level};
