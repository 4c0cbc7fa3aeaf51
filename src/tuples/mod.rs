//! Fixed-arity tuples with named, mutable slots.
//!
//! Each arity from 0 to 7 comes in two forms:
//!
//! - a slot struct ([`Tuple0`]..[`Tuple7`]) whose `pub` fields `v0`, `v1`, ...
//!   can be assigned in place while a value is being built, and
//! - the native tuple (`()`, `(T0,)`, `(T0, T1)`, ...), the immutable record
//!   form used for destructuring.
//!
//! Converting between the forms moves the slot values into a new value; it
//! never reinterprets one in place.
//!
//! # Examples
//!
//! ```rust
//! use essentials::tuples::{self, Tuple2};
//!
//! let mut pair: Tuple2<&str, u32> = tuples::of(("requests", 0));
//! pair.v1 += 3;
//!
//! let (name, count) = pair.into_record();
//! assert_eq!((name, count), ("requests", 3));
//! ```
//!
//! ## Rejecting missing slots
//!
//! ```rust
//! use essentials::Outcome;
//! use essentials::tuples::{self, AbsentSlot, Tuple3};
//!
//! let complete = tuples::checked((Some(1), Some("a"), Some('x')));
//! assert_eq!(complete, Outcome::Success(Tuple3::new(1, "a", 'x')));
//!
//! let partial = tuples::checked((Some(1), None::<&str>, Some('x')));
//! assert_eq!(partial, Outcome::Failure(AbsentSlot::new(1, 3)));
//! ```

mod factory;
mod slots;

pub use factory::{AbsentSlot, checked, of, of_nullables};
pub use slots::{
    OptionalRecord, Record, Tuple0, Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7,
};
