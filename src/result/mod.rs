//! Outcomes of computations.
//!
//! This module provides:
//!
//! - [`Outcome`]: a computation that ended in `Success(T)` or `Failure(E)`
//! - Adapters that run a computation and capture its failure:
//!   [`Outcome::checked`] for `Result`-returning code and
//!   [`Outcome::unchecked`] for `Result`-returning code that may also panic
//! - The short-circuit scans [`join_oks`], [`join_errors`], [`first_ok`] and
//!   [`first_error`], and the variadic macros of the same names
//!
//! # Examples
//!
//! ## Bridging to `?`
//!
//! ```rust
//! use essentials::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, std::num::ParseIntError> {
//!     Outcome::checked(|| input.parse::<i32>())
//! }
//!
//! fn double(input: &str) -> Result<i32, std::num::ParseIntError> {
//!     let value = parse(input).into_result()?;
//!     Ok(value * 2)
//! }
//!
//! assert_eq!(double("21"), Ok(42));
//! assert!(double("x").is_err());
//! ```
//!
//! ## Finding the first failure
//!
//! ```rust
//! use essentials::{first_error, Maybe, Outcome};
//!
//! let name: Outcome<&str, String> = Outcome::Success("ferris");
//! let age: Outcome<u8, String> = Outcome::Failure("age is negative".to_string());
//! let email: Outcome<String, String> = Outcome::Failure("email is empty".to_string());
//!
//! let first: Maybe<String> = first_error!(name, age, email);
//! assert_eq!(first, Maybe::Present("age is negative".to_string()));
//! ```

mod catching;
mod outcome;
mod scan;

pub use outcome::{IntoIter, Outcome};
pub use scan::{first_error, first_ok, first_present, join_errors, join_oks};
