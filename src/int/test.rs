use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use super::*;
use crate::Error;

fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn basic_init_and_value() {
    let x = WrapInt::up_to(0, 5i64).unwrap();
    assert_eq!(x.get(), 0);
    assert_eq!(x.left(), 0);
    assert_eq!(x.right(), 5);
    assert_eq!(x.span(), 5);
}

#[test]
fn init_with_left_offset() {
    let x = WrapInt::new(0, -1i64, 2).unwrap();
    assert_eq!(x.left(), -1);
    assert_eq!(x.right(), 2);
    assert_eq!(x.span(), 3);
    assert_eq!(x.get(), 0);
    assert_eq!(x.offset(), 1);
}

#[test]
fn init_wraps_out_of_range() {
    assert_eq!(WrapInt::up_to(7, 5u32).unwrap().get(), 2);
    assert_eq!(WrapInt::up_to(-1, 5u32).unwrap().get(), 4);
    assert_eq!(WrapInt::new(-1, -1i8, 2).unwrap().get(), -1);
    assert_eq!(WrapInt::new(u128::MAX >> 1, 0u8, 10).unwrap().get(), 7);
}

#[test]
fn invalid_interval() {
    assert_eq!(
        WrapInt::up_to(0, 0i64),
        Err(Error::InvalidInterval { left: 0, right: 0 })
    );
    assert_eq!(
        WrapInt::up_to(0, -1i64),
        Err(Error::InvalidInterval { left: 0, right: -1 })
    );
    assert_eq!(
        WrapInt::new(0, 1i64, 1),
        Err(Error::InvalidInterval { left: 1, right: 1 })
    );
}

#[test]
fn invalid_initial() {
    assert_eq!(
        WrapInt::up_to(u128::MAX, 5i64),
        Err(Error::InvalidIndexType)
    );
}

#[test]
fn wrap_around_positive() {
    let mut x = WrapInt::up_to(0, 3i64).unwrap();
    x += 1i64;
    assert_eq!(x.get(), 1);
    x += 2i64;
    assert_eq!(x.get(), 0);
    x += 5i64;
    assert_eq!(x.get(), 2);
}

#[test]
fn wrap_around_negative() {
    let mut x = WrapInt::up_to(0, 4i64).unwrap();
    x -= 1i64;
    assert_eq!(x.get(), 3);
    x -= 5i64;
    assert_eq!(x.get(), 2);
}

#[test]
fn unsigned_wraps_below_zero() {
    let mut x = WrapInt::up_to(0, 10u8).unwrap();
    x -= 3i64;
    assert_eq!(x.get(), 7);
    x += u64::MAX;
    assert_eq!(x.get(), ((7 + u64::MAX as u128) % 10) as u8);
}

#[test]
fn add_sub_do_not_mutate() {
    let x = WrapInt::up_to(0, 5i64).unwrap();
    let y = x + 3i64;
    let z = x - 1i64;
    assert_eq!(x.get(), 0);
    assert_eq!(y.get(), 3);
    assert_eq!(z.get(), 4);
}

#[test]
fn wrap_operand_rejected() {
    let mut x = WrapInt::up_to(2, 5i64).unwrap();
    let other = WrapInt::up_to(1, 5i64).unwrap();

    assert_eq!(x.try_add_assign(other), Err(Error::InvalidOperand));
    assert_eq!(x.try_sub_assign(other), Err(Error::InvalidOperand));
    assert_eq!(x.try_add(other), Err(Error::InvalidOperand));
    assert_eq!(x.try_sub(other), Err(Error::InvalidOperand));
    assert_eq!(x.get(), 2);

    x.try_add_assign(4i64).unwrap();
    assert_eq!(x.get(), 1);
    assert_eq!(x.try_sub(3i64).unwrap().get(), 3);
}

#[test]
fn equality_ignores_interval() {
    let a = WrapInt::new(0, -1i64, 2).unwrap();
    let b = WrapInt::new(0, -2i64, 3).unwrap();
    let c = WrapInt::new(1, -2i64, 3).unwrap();

    assert_eq!(a, b);
    assert_eq!(a, 0i64);
    assert_eq!(0i64, b);
    assert_ne!(c, a);
    assert_ne!(c, 0i64);

    let narrow = WrapInt::up_to(1, 3u8).unwrap();
    assert_eq!(c, narrow);
    assert!(c.eq_operand(&Operand::Int(1i64)));
    assert!(c.eq_operand(&Operand::Wrap(b + 1i64)));
    assert!(!c.eq_operand(&Operand::Int(2i64)));
}

#[test]
fn ordering_by_value() {
    let a = WrapInt::up_to(1, 5i32).unwrap();
    let b = WrapInt::new(3, 2i32, 10).unwrap();
    assert!(a < b);
    assert!(a < 2i32);
    assert!(4i32 > a);
    assert_eq!(a.max(b).get(), 3);
}

#[test]
fn hash_matches_plain_integer() {
    let x = WrapInt::up_to(0, 10i64).unwrap();
    assert_eq!(hash_of(&x), hash_of(&0i64));

    let mut set = HashSet::new();
    set.insert(x);
    assert!(set.contains(&0i64));
    assert!(set.contains(&WrapInt::up_to(0, 5i64).unwrap()));
    assert!(!set.contains(&1i64));
}

#[test]
fn indexes_plain_slices() {
    let data = ["zero", "one", "two"];
    let idx = WrapInt::up_to(1, 3usize).unwrap();
    assert_eq!(data[idx.get()], "one");
    let idx = WrapInt::up_to(-1, 3usize).unwrap();
    assert_eq!(data[usize::from(idx)], "two");
    assert_eq!(idx.as_index(), Ok(2));
}

#[test]
fn formatting() {
    let x = WrapInt::up_to(7, 10i64).unwrap();
    assert_eq!(format!("{x:03}"), "007");
    assert_eq!(x.to_string(), "7");
    assert_eq!(format!("{x:>4}"), "   7");
    assert_eq!(format!("{x:#x}"), "0x7");
    assert_eq!(format!("{x:b}"), "111");

    let y = WrapInt::new(-1, -1i64, 2).unwrap();
    assert_eq!(format!("{y:+}"), "-1");
}

#[test]
fn debug_contains_bounds() {
    let x = WrapInt::up_to(0, 5i64).unwrap();
    assert_eq!(format!("{x:?}"), "WrapInt { value: 0, left: 0, right: 5 }");
}

#[test]
fn copy_is_independent() {
    let x = WrapInt::new(0, -1i64, 5).unwrap();
    let mut clone = x;
    assert_eq!(clone.get(), x.get());
    assert_eq!(clone.interval(), x.interval());

    clone += 1i64;
    assert_ne!(clone.get(), x.get());
    assert_eq!(x.get(), 0);
}

#[test]
fn left_right_with_offset() {
    let mut x = WrapInt::new(-1, -1i64, 2).unwrap();
    assert_eq!(x.get(), -1);
    x += 1i64;
    assert_eq!(x.get(), 0);
    x += 3i64;
    assert_eq!(x.get(), 0);
}

#[test]
fn negation() {
    let x = WrapInt::up_to(1, 5i64).unwrap();
    assert_eq!((-x).get(), 4);
    assert_eq!((-WrapInt::up_to(0, 5i64).unwrap()).get(), 0);

    let y = WrapInt::new(2, 1i64, 4).unwrap();
    // -2 in [1, 4) is 1
    assert_eq!((-y).get(), 1);
}

#[test]
fn reflected_add() {
    let x = WrapInt::up_to(2, 5i64).unwrap();
    assert_eq!((3i64 + x).get(), 0);
    assert_eq!((0i64 + x).get(), 2);
    assert_eq!((-1i64 + x).get(), 1);
    assert_eq!((10i64 + x).get(), 2);
}

#[test]
fn reflected_sub() {
    let x = WrapInt::up_to(1, 5i64).unwrap();
    assert_eq!((3i64 - x).get(), 2);
    assert_eq!((0i64 - x).get(), 4);
    assert_eq!((-2i64 - x).get(), 2);
    assert_eq!((10i64 - x).get(), 4);
}

#[test]
fn succ_pred_and_distance() {
    let x = WrapInt::up_to(4, 5u8).unwrap();
    assert_eq!(x.succ().get(), 0);
    assert_eq!(x.pred().get(), 3);
    assert_eq!(x.distance_to(1), Ok(2));
    assert_eq!(x.distance_to(x.pred()), Ok(4));
    assert_eq!(x.distance_to(u128::MAX), Err(Error::InvalidIndexType));
}

#[test]
fn small_types_at_their_limits() {
    let mut x = WrapInt::new(i8::MIN, i8::MIN, i8::MAX).unwrap();
    assert_eq!(x.span(), 255);
    x -= 1i64;
    assert_eq!(x.get(), i8::MAX - 1);
    x += i64::MAX;
    assert!(x.interval().contains(x.get()));
}

fn params() -> impl Strategy<Value = (i64, i64, i64)> {
    (-10_000i64..10_000, -1000i64..1000, 1i64..1000)
        .prop_map(|(current, left, span)| (current, left, left + span))
}

proptest! {
    #[test]
    fn value_always_in_range((current, left, right) in params()) {
        let x = WrapInt::new(current, left, right).unwrap();
        prop_assert!(left <= x.get() && x.get() < right);
    }

    #[test]
    fn add_sub_round_trip((current, left, right) in params(), step in -10_000i64..10_000) {
        let mut x = WrapInt::new(current, left, right).unwrap();
        let original = x.get();
        x += step;
        x -= step;
        prop_assert_eq!(x.get(), original);
        prop_assert_eq!(((x + step) - step).get(), original);
    }

    #[test]
    fn add_is_modular((current, left, right) in params(), step in -10_000i64..10_000) {
        let x = WrapInt::new(current, left, right).unwrap();
        let span = right - left;
        let expected = left + (x.get() + step - left).rem_euclid(span);
        prop_assert_eq!((x + step).get(), expected);
    }

    #[test]
    fn equality_and_hash_follow_value((current, left, right) in params()) {
        let x = WrapInt::new(current, left, right).unwrap();
        let value = x.get();
        prop_assert!(x == value);
        prop_assert!(value == x);
        prop_assert_eq!(hash_of(&x), hash_of(&value));
    }

    #[test]
    fn copy_keeps_invariants((current, left, right) in params()) {
        let x = WrapInt::new(current, left, right).unwrap();
        let mut clone = x;
        prop_assert_eq!(clone, x);
        prop_assert_eq!(clone.interval(), x.interval());
        let original = x.get();
        clone += 1i64;
        prop_assert_eq!(x.get(), original);
    }

    #[test]
    fn negation_is_additive_inverse((current, left, right) in params()) {
        let x = WrapInt::new(current, left, right).unwrap();
        let neg = -x;
        prop_assert_eq!(neg.get(), left + (-x.get() - left).rem_euclid(right - left));
    }
}
