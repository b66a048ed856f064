//! Ordering and comparisons against native integers.

use core::cmp::Ordering;

use crate::word::bit_cast;
use crate::{Primitive, Xint};

impl<const N: u32, const SIGNED: bool> Ord for Xint<N, SIGNED> {
    fn cmp(&self, other: &Self) -> Ordering {
        // The padding is equal (zero) on both sides, so unsigned words order
        // like their values. Signed words must be reinterpreted first or the
        // order breaks across the sign boundary.
        if SIGNED {
            bit_cast(self.0).cmp(&bit_cast(other.0))
        } else {
            self.0.cmp(&other.0)
        }
    }
}

impl<const N: u32, const SIGNED: bool> PartialOrd for Xint<N, SIGNED> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Primitive, const N: u32, const SIGNED: bool> PartialEq<T> for Xint<N, SIGNED> {
    fn eq(&self, other: &T) -> bool {
        *self == Self::new_masked(*other)
    }
}

impl<T: Primitive, const N: u32, const SIGNED: bool> PartialOrd<T> for Xint<N, SIGNED> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.cmp(&Self::new_masked(*other)))
    }
}

macro_rules! impl_native_lhs_cmp {
    ($($primitive:ident)*) => {
        $(
            impl<const N: u32, const SIGNED: bool> PartialEq<Xint<N, SIGNED>> for $primitive {
                fn eq(&self, other: &Xint<N, SIGNED>) -> bool {
                    Xint::<N, SIGNED>::new_masked(*self) == *other
                }
            }

            impl<const N: u32, const SIGNED: bool> PartialOrd<Xint<N, SIGNED>> for $primitive {
                fn partial_cmp(&self, other: &Xint<N, SIGNED>) -> Option<Ordering> {
                    Some(Xint::<N, SIGNED>::new_masked(*self).cmp(other))
                }
            }
        )*
    };
}

impl_native_lhs_cmp!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_signed_order_crosses_sign_boundary() {
        let minus_one = I8::new_masked(-1i8);
        let one = I8::new_masked(1i8);
        assert!(minus_one < one);
        assert!(I8::MIN < I8::MAX);
        assert!(I8::MIN < minus_one);
        assert_eq!(I1::MIN.cmp(&I1::MAX), core::cmp::Ordering::Less);
    }

    #[test]
    fn test_same_pattern_orders_by_flavor() {
        let unsigned = U8::new_masked(255u8);
        assert!(unsigned > 0);
        assert!(unsigned > U8::from_bits(0x7f));

        let signed = I8::new_masked(255u8);
        assert_eq!(signed, -1);
        assert!(signed < 0);
        assert!(signed < I8::from_bits(0x7f));
    }

    #[test]
    fn test_native_lhs() {
        assert!(0 < U8::MAX);
        assert!(-1 < I8::ONE);
        assert!(7u8 == U3::MAX);
        assert!(7i64 >= I4::MAX);
        assert!(-8 <= I4::MIN);
    }

    #[test]
    fn test_native_operand_is_truncated() {
        // 16 has no 4-bit representation and truncates to 0.
        assert_eq!(U4::ZERO, 16);
        assert!(U4::MAX > 16u32);
        assert_eq!(I4::MIN, 8u8);
    }

    #[test]
    fn test_full_width() {
        assert!(U64::MAX > U64::from_bits(1 << 63));
        assert!(I64::MIN < I64::ZERO);
        assert_eq!(I64::MIN, i64::MIN);
        assert_eq!(U64::MAX, u64::MAX);
    }
}
