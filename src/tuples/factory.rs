//! Tuple factories.
//!
//! Two families build slot structs from native tuples:
//!
//! - [`of`] / [`of_nullables`] accept any record; slots may hold `Option`s.
//! - [`checked`] accepts a record of `Option`s and rejects it if any slot is
//!   `None`.

use std::fmt;

use super::slots::{OptionalRecord, Record};
use crate::result::Outcome;

/// Builds the slot struct of the same arity as `record`.
///
/// # Examples
///
/// ```rust
/// use essentials::tuples::{self, Tuple2};
///
/// assert_eq!(tuples::of((1, 'a')), Tuple2::new(1, 'a'));
/// ```
pub fn of<R: Record>(record: R) -> R::Slots {
    record.into_slots()
}

/// Builds a slot struct whose slots may be absent.
///
/// # Examples
///
/// ```rust
/// use essentials::tuples;
///
/// let partial = tuples::of_nullables((Some(1), None::<char>));
/// assert_eq!(partial.v0, Some(1));
/// assert_eq!(partial.v1, None);
/// ```
pub fn of_nullables<R>(record: R) -> R::Slots
where
    R: Record + OptionalRecord,
{
    record.into_slots()
}

/// Builds a slot struct from a record of `Option`s, failing on the first
/// `None` slot.
pub fn checked<R: OptionalRecord>(record: R) -> Outcome<<R::Record as Record>::Slots, AbsentSlot> {
    Outcome::from(record.transpose_slots()).map(Record::into_slots)
}

/// A slot that was required but absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsentSlot {
    index: usize,
    arity: usize,
}

impl AbsentSlot {
    /// Creates the error for slot `index` of a tuple of `arity` slots.
    pub const fn new(index: usize, arity: usize) -> Self {
        Self { index, arity }
    }

    /// Zero-based index of the absent slot.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Arity of the tuple being built.
    pub const fn arity(&self) -> usize {
        self.arity
    }
}

impl fmt::Display for AbsentSlot {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "slot v{} of Tuple{} is absent",
            self.index, self.arity
        )
    }
}

impl std::error::Error for AbsentSlot {}
