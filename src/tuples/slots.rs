//! Slot structs `Tuple0`..`Tuple7` and their bridge to native tuples.

use std::fmt;

use super::factory::AbsentSlot;

/// A native tuple: the immutable record form of a slot struct.
///
/// Implemented for `()` and for tuples of one to seven elements.
pub trait Record: Sized {
    /// The slot struct of the same arity.
    type Slots: Into<Self>;

    /// Number of slots.
    const ARITY: usize;

    /// Moves the elements into a new slot struct.
    fn into_slots(self) -> Self::Slots;
}

/// A native tuple whose elements are all `Option`s.
pub trait OptionalRecord {
    /// The record with every `Option` removed.
    type Record: Record;

    /// Unwraps every element, or reports the first `None`.
    ///
    /// # Errors
    ///
    /// Returns the index of the first `None` element as an [`AbsentSlot`].
    fn transpose_slots(self) -> Result<Self::Record, AbsentSlot>;
}

/// The empty tuple.
///
/// It is the success value of outcomes that carry no data, e.g. the result of
/// [`Outcome::checked_run`](crate::Outcome::checked_run).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple0;

impl Tuple0 {
    /// Number of slots.
    pub const ARITY: usize = 0;

    /// Creates the empty tuple.
    pub const fn new() -> Self {
        Self
    }

    /// Converts into `()`.
    pub const fn into_record(self) {}

    /// Creates the empty tuple from `()`.
    pub const fn from_record((): ()) -> Self {
        Self
    }
}

impl fmt::Display for Tuple0 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Tuple0{}")
    }
}

impl From<()> for Tuple0 {
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Tuple0> for () {
    fn from(_: Tuple0) -> Self {}
}

impl Record for () {
    type Slots = Tuple0;
    const ARITY: usize = 0;

    fn into_slots(self) -> Tuple0 {
        Tuple0
    }
}

impl OptionalRecord for () {
    type Record = ();

    fn transpose_slots(self) -> Result<(), AbsentSlot> {
        Ok(())
    }
}

macro_rules! define_tuple {
    ($arity:literal; $($index:tt => $param:ident),+) => {
        paste::paste! {
            #[doc = concat!("A tuple of ", stringify!($arity), " mutable slots.")]
            ///
            /// Equality, ordering and hashing are structural over all slots, in
            /// slot order.
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct [<Tuple $arity>]<$($param),+> {
                $(
                    #[doc = concat!("Slot ", stringify!($index), ".")]
                    pub [<v $index>]: $param,
                )+
            }

            impl<$($param),+> [<Tuple $arity>]<$($param),+> {
                /// Number of slots.
                pub const ARITY: usize = $arity;

                /// Creates a tuple from its slot values.
                #[allow(clippy::too_many_arguments)]
                pub const fn new($([<v $index>]: $param),+) -> Self {
                    Self { $([<v $index>]),+ }
                }

                /// Moves the slots into the native tuple form.
                pub fn into_record(self) -> ($($param,)+) {
                    ($(self.[<v $index>],)+)
                }

                /// Moves the elements of a native tuple into slots.
                pub fn from_record(record: ($($param,)+)) -> Self {
                    Self { $([<v $index>]: record.$index),+ }
                }

                /// Borrows every slot, in order.
                pub const fn as_record(&self) -> ($(&$param,)+) {
                    ($(&self.[<v $index>],)+)
                }
            }

            impl<$($param: fmt::Display),+> fmt::Display for [<Tuple $arity>]<$($param),+> {
                #[allow(unused_assignments)]
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.write_str(concat!("Tuple", stringify!($arity), "{"))?;
                    let mut separator = "";
                    $(
                        write!(formatter, "{separator}v{}={}", $index, self.[<v $index>])?;
                        separator = ", ";
                    )+
                    formatter.write_str("}")
                }
            }

            impl<$($param),+> From<($($param,)+)> for [<Tuple $arity>]<$($param),+> {
                fn from(record: ($($param,)+)) -> Self {
                    Self::from_record(record)
                }
            }

            impl<$($param),+> From<[<Tuple $arity>]<$($param),+>> for ($($param,)+) {
                fn from(slots: [<Tuple $arity>]<$($param),+>) -> Self {
                    slots.into_record()
                }
            }

            impl<$($param),+> Record for ($($param,)+) {
                type Slots = [<Tuple $arity>]<$($param),+>;
                const ARITY: usize = $arity;

                fn into_slots(self) -> Self::Slots {
                    [<Tuple $arity>]::from_record(self)
                }
            }

            impl<$($param),+> OptionalRecord for ($(Option<$param>,)+) {
                type Record = ($($param,)+);

                fn transpose_slots(self) -> Result<Self::Record, AbsentSlot> {
                    Ok(($(
                        match self.$index {
                            Some(value) => value,
                            None => return Err(AbsentSlot::new($index, $arity)),
                        },
                    )+))
                }
            }
        }
    };
}

define_tuple!(1; 0 => T0);
define_tuple!(2; 0 => T0, 1 => T1);
define_tuple!(3; 0 => T0, 1 => T1, 2 => T2);
define_tuple!(4; 0 => T0, 1 => T1, 2 => T2, 3 => T3);
define_tuple!(5; 0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4);
define_tuple!(6; 0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5);
define_tuple!(7; 0 => T0, 1 => T1, 2 => T2, 3 => T3, 4 => T4, 5 => T5, 6 => T6);

static_assertions::assert_impl_all!(Tuple3<i32, String, bool>: Send, Sync, Clone, Eq, std::hash::Hash);
static_assertions::const_assert_eq!(<(u8, u8, u8, u8, u8, u8, u8) as Record>::ARITY, 7);
