//! Optional values.
//!
//! This module provides [`Maybe`], a value that is either `Present` or
//! `Absent`, together with its bridges to [`Outcome`](crate::Outcome) and the
//! standard [`Option`].
//!
//! # Examples
//!
//! ## Adapting sentinel values
//!
//! ```rust
//! use essentials::option::Maybe;
//!
//! // -1 is the "not found" sentinel of some legacy lookup
//! let index = Maybe::from_value(-1, &[-1]);
//! assert!(index.is_absent());
//!
//! let index = Maybe::from_value(3, &[-1]);
//! assert_eq!(index, Maybe::Present(3));
//! ```
//!
//! ## Chaining
//!
//! ```rust
//! use essentials::option::Maybe;
//!
//! let length = Maybe::some("essentials")
//!     .filter(|name| !name.is_empty())
//!     .map(str::len)
//!     .unwrap_or(0);
//! assert_eq!(length, 10);
//! ```

mod maybe;

pub use maybe::{IntoIter, Maybe};
