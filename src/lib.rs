//! # essentials
//!
//! Optional values, outcomes, fixed-arity tuples and a diagnostic formatter,
//! with an explicit combinator algebra between them.
//!
//! ## Overview
//!
//! - **Maybe**: a value that is either `Present` or `Absent`
//! - **Outcome**: a computation that ended in `Success` or `Failure`
//! - **Scans**: `join_oks`, `join_errors`, `first_ok`, `first_error` and their
//!   variadic macros
//! - **Tuples**: mutable slot structs `Tuple0`..`Tuple7` bridged to native tuples
//! - **Diagnostic**: a title/note/help message renderer
//!
//! ## Feature Flags
//!
//! - `diagnostic`: Diagnostic formatter (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for every value type
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use essentials::prelude::*;
//!
//! let port = Maybe::of(Some(0_u16), &[0]).unwrap_or(8080);
//! assert_eq!(port, 8080);
//!
//! let parsed: Outcome<u16, String> = Maybe::some(443_u16).ok_or("missing".to_string());
//! assert_eq!(parsed.map(|port| port + 1), Outcome::Success(444));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the value types, the scan functions and the error kinds.
///
/// # Usage
///
/// ```rust
/// use essentials::prelude::*;
/// ```
pub mod prelude {
    pub use crate::option::Maybe;
    pub use crate::result::{Outcome, first_error, first_ok, first_present, join_errors, join_oks};
    pub use crate::tuples::{
        AbsentSlot, OptionalRecord, Record, Tuple0, Tuple1, Tuple2, Tuple3, Tuple4, Tuple5,
        Tuple6, Tuple7,
    };
    pub use crate::violation::{ContractViolation, PayloadMismatch};

    #[cfg(feature = "diagnostic")]
    pub use crate::diagnostic::{DiagnosedError, Diagnostic, Level};
}

pub mod option;
pub mod result;
pub mod tuples;
pub mod violation;

#[cfg(feature = "diagnostic")]
pub mod diagnostic;

pub use option::Maybe;
pub use result::Outcome;
