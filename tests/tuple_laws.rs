//! Property-based tests for the slot structs.
//!
//! - **Round trip**: `of(record).into_record() == record` for every arity
//!   from 1 to 7 (arity 0 has a single value and is covered in `tuple_tests.rs`)
//! - **Checked**: `checked` succeeds exactly when no slot is `None`, and
//!   otherwise reports the first `None`
//! - **Ordering** of slot structs matches the ordering of their records

use essentials::Outcome;
use essentials::tuples::{self, AbsentSlot, Tuple2, Tuple3};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_tuple1_round_trip(record in any::<(i32,)>()) {
        prop_assert_eq!(tuples::of(record).into_record(), record);
    }

    #[test]
    fn prop_tuple2_round_trip(record in any::<(i32, String)>()) {
        prop_assert_eq!(tuples::of(record.clone()).into_record(), record);
    }

    #[test]
    fn prop_tuple3_round_trip(record in any::<(u64, bool, i8)>()) {
        prop_assert_eq!(tuples::of(record).into_record(), record);
    }

    #[test]
    fn prop_tuple4_round_trip(record in any::<(i32, bool, char, u8)>()) {
        prop_assert_eq!(tuples::of(record).into_record(), record);
    }

    #[test]
    fn prop_tuple5_round_trip(record in any::<(i32, bool, char, u8, i64)>()) {
        prop_assert_eq!(tuples::of(record).into_record(), record);
    }

    #[test]
    fn prop_tuple6_round_trip(record in any::<(i32, bool, char, u8, i64, u16)>()) {
        prop_assert_eq!(tuples::of(record).into_record(), record);
    }

    #[test]
    fn prop_tuple7_round_trip(record in any::<(i8, i16, i32, i64, u8, u16, u32)>()) {
        prop_assert_eq!(tuples::of(record).into_record(), record);
    }

    #[test]
    fn prop_checked_reports_first_absent(
        record in any::<(Option<u8>, Option<u8>, Option<u8>)>()
    ) {
        let first_absent = [record.0, record.1, record.2].iter().position(Option::is_none);
        let outcome = tuples::checked(record);

        match first_absent {
            Some(index) => prop_assert_eq!(outcome, Outcome::Failure(AbsentSlot::new(index, 3))),
            None => prop_assert_eq!(
                outcome,
                Outcome::Success(Tuple3::new(
                    record.0.unwrap(),
                    record.1.unwrap(),
                    record.2.unwrap(),
                ))
            ),
        }
    }

    #[test]
    fn prop_ordering_matches_record(left in any::<(i32, i32)>(), right in any::<(i32, i32)>()) {
        prop_assert_eq!(
            Tuple2::from(left).cmp(&Tuple2::from(right)),
            left.cmp(&right)
        );
    }
}
