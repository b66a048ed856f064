//! Lossless [`From`] conversions.
//!
//! A conversion exists only when every value of the source type is a value of
//! the target type:
//!
//! - between fixed-width types of the same signedness when the target is at
//!   least as wide,
//! - from an unsigned fixed-width type to a strictly wider signed one,
//! - between native and fixed-width types under the same two rules.
//!
//! Everything else goes through [`Xint::convert_lossy`] or
//! [`Xint::try_convert`].
//!
//! ```compile_fail
//! # use xint::prelude::*;
//! let x = U9::from(300u16);
//! ```
//!
//! ```compile_fail
//! # use xint::prelude::*;
//! let x = u8::from(I8::ZERO);
//! ```

use seq_macro::seq;

use crate::{Primitive, Xint};

macro_rules! impl_widening_from {
    ($from:literal => $to:literal) => {
        impl From<Xint<$from, false>> for Xint<$to, false> {
            #[inline]
            fn from(value: Xint<$from, false>) -> Self {
                value.convert_lossy()
            }
        }

        impl From<Xint<$from, true>> for Xint<$to, true> {
            #[inline]
            fn from(value: Xint<$from, true>) -> Self {
                value.convert_lossy()
            }
        }

        impl From<Xint<$from, false>> for Xint<$to, true> {
            #[inline]
            fn from(value: Xint<$from, false>) -> Self {
                value.convert_lossy()
            }
        }
    };
}

seq!(TO in 2..=64 {
    seq!(FROM in 1..TO {
        impl_widening_from!(FROM => TO);
    });
});

macro_rules! impl_from_primitive {
    ($primitive:ident => $bits:literal, $signed:literal) => {
        impl From<$primitive> for Xint<$bits, $signed> {
            #[inline]
            fn from(value: $primitive) -> Self {
                Self::new_masked(value)
            }
        }
    };
}

seq!(N in 8..=64 {
    impl_from_primitive!(u8 => N, false);
    impl_from_primitive!(i8 => N, true);
});
seq!(N in 9..=64 { impl_from_primitive!(u8 => N, true); });
seq!(N in 16..=64 {
    impl_from_primitive!(u16 => N, false);
    impl_from_primitive!(i16 => N, true);
});
seq!(N in 17..=64 { impl_from_primitive!(u16 => N, true); });
seq!(N in 32..=64 {
    impl_from_primitive!(u32 => N, false);
    impl_from_primitive!(i32 => N, true);
});
seq!(N in 33..=64 { impl_from_primitive!(u32 => N, true); });
impl_from_primitive!(u64 => 64, false);
impl_from_primitive!(i64 => 64, true);

impl<const N: u32> From<bool> for Xint<N, false> {
    #[inline]
    fn from(value: bool) -> Self {
        Self::from_bits(u64::from(value))
    }
}

macro_rules! impl_into_primitive {
    ($bits:literal, $signed:literal => $primitive:ident) => {
        impl From<Xint<$bits, $signed>> for $primitive {
            #[inline]
            fn from(value: Xint<$bits, $signed>) -> Self {
                $primitive::from_word(value.to_extended_word())
            }
        }
    };
}

seq!(N in 1..=8 {
    impl_into_primitive!(N, false => u8);
    impl_into_primitive!(N, true => i8);
});
seq!(N in 1..=16 {
    impl_into_primitive!(N, false => u16);
    impl_into_primitive!(N, true => i16);
});
seq!(N in 1..=32 {
    impl_into_primitive!(N, false => u32);
    impl_into_primitive!(N, true => i32);
});
seq!(N in 1..8 { impl_into_primitive!(N, false => i8); });
seq!(N in 1..16 { impl_into_primitive!(N, false => i16); });
seq!(N in 1..32 { impl_into_primitive!(N, false => i32); });
seq!(N in 1..64 { impl_into_primitive!(N, false => i64); });

impl<const N: u32> From<Xint<N, false>> for u64 {
    #[inline]
    fn from(value: Xint<N, false>) -> Self {
        value.to_bits()
    }
}

impl<const N: u32> From<Xint<N, false>> for u128 {
    #[inline]
    fn from(value: Xint<N, false>) -> Self {
        u128::from(value.to_bits())
    }
}

impl<const N: u32> From<Xint<N, true>> for i64 {
    #[inline]
    fn from(value: Xint<N, true>) -> Self {
        value.to_sign_extended()
    }
}

impl<const N: u32, const SIGNED: bool> From<Xint<N, SIGNED>> for i128 {
    #[inline]
    fn from(value: Xint<N, SIGNED>) -> Self {
        value.to_i128()
    }
}

impl From<Xint<1, false>> for bool {
    #[inline]
    fn from(value: Xint<1, false>) -> Self {
        !value.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_widening_same_signedness() {
        assert_eq!(U12::from(U4::MAX), U12::from_bits(15));
        assert_eq!(I12::from(I4::MIN).to_i128(), -8);
        assert_eq!(I64::from(I1::MIN).to_i128(), -1);
        assert_eq!(U64::from(U63::MAX).to_bits(), u64::MAX >> 1);
    }

    #[test]
    fn test_widening_unsigned_to_signed() {
        assert_eq!(I5::from(U4::MAX).to_i128(), 15);
        assert_eq!(I64::from(U63::MAX).to_i128(), i64::MAX as i128);
    }

    #[test]
    fn test_widen_into_then_back() {
        for bits in 0..16 {
            let x = I4::from_bits(bits);
            let wide: I16 = x.widen();
            assert_eq!(wide.to_i128(), x.to_i128());
            assert_eq!(wide.convert_lossy::<I4>(), x);
        }
    }

    #[test]
    fn test_from_primitive() {
        assert_eq!(U8::from(255u8), U8::MAX);
        assert_eq!(I9::from(255u8).to_i128(), 255);
        assert_eq!(I16::from(-1i8).to_i128(), -1);
        assert_eq!(U33::from(u32::MAX).to_bits(), u32::MAX as u64);
        assert_eq!(I64::from(i64::MIN), I64::MIN);
        assert_eq!(U64::from(u64::MAX), U64::MAX);
        assert_eq!(U7::from(true), U7::ONE);
        assert_eq!(U7::from(false), U7::ZERO);
    }

    #[test]
    fn test_into_primitive() {
        assert_eq!(u8::from(U3::MAX), 7);
        assert_eq!(i8::from(I3::MIN), -4);
        assert_eq!(i8::from(U7::MAX), 127);
        assert_eq!(i16::from(I9::MIN), -256);
        assert_eq!(u32::from(U32::MAX), u32::MAX);
        assert_eq!(i64::from(U63::MAX), i64::MAX);
        assert_eq!(u64::from(U64::MAX), u64::MAX);
        assert_eq!(i64::from(I64::MIN), i64::MIN);
        assert_eq!(u128::from(U40::MAX), (1 << 40) - 1);
        assert_eq!(i128::from(I40::MIN), -(1 << 39));
        assert!(bool::from(U1::MAX));
        assert!(!bool::from(U1::ZERO));
    }
}
