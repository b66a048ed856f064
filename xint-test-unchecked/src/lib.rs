#![allow(arithmetic_overflow)]
#![cfg(test)]

use std::panic::catch_unwind;

use xint::prelude::*;

#[test]
fn test_profile() {
    if let Err(_) = catch_unwind(|| 255u8 + 1u8) {
        panic!("this crate expects to be tested with overflow-checks disabled");
    }
}

#[xint_literals]
#[test]
fn test_add_overflow_with_native_operand_wraps() {
    assert_eq!(127_U7 + 129, 0_U7);
}

#[xint_literals]
#[test]
fn test_add_overflow_wraps() {
    assert_eq!(127_U7 + 1_U7, 0_U7);
    assert_eq!(63_I7 + 1_I7, I7::MIN);
}

#[xint_literals]
#[test]
fn test_sub_overflow_wraps() {
    assert_eq!(0_U7 - 1_U7, 127_U7);
    assert_eq!(I7::MIN - 1_I7, 63_I7);
}

#[xint_literals]
#[test]
fn test_mul_overflow_wraps() {
    assert_eq!(0xffff_ffff_U32 * 0xffff_ffff_U32, 1_U32);
    assert_eq!(U64::MAX * U64::MAX, 1_U64);
    assert_eq!(I64::MIN * -(1_I64), I64::MIN);
}

#[test]
fn test_min_div_minus_one_wraps() {
    assert_eq!(xint!(-64_I7) / xint!(-1_I7), I7::MIN);
    assert_eq!(I64::MIN / -1, I64::MIN);
    assert_eq!(I64::MIN % -1, I64::ZERO);
}

#[test]
fn test_neg_and_shift_never_panic() {
    assert_eq!(-I64::MIN, I64::MIN);
    assert_eq!(-U64::ONE, U64::MAX);
    assert_eq!(U64::ONE << 64, U64::ZERO);
    assert_eq!(I64::MIN >> 100, xint!(-1_I64));
    assert_eq!(U8::ONE << -1, U8::ZERO);
}

#[test]
#[should_panic]
fn test_division_by_zero_panics() {
    let _ = U7::MAX / U7::ZERO;
}
