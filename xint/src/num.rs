//! [`num_traits`] integration.
//!
//! Trait methods take their receivers by reference while the inherent
//! methods take them by value, so every impl here calls the inherent method
//! through `Self::` to avoid resolving back to the trait.

use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedShl, CheckedShr,
    CheckedSub, FromPrimitive, Num, One, Signed, ToPrimitive, Unsigned, WrappingAdd, WrappingMul,
    WrappingNeg, WrappingShl, WrappingShr, WrappingSub, Zero,
};
use paste::paste;

use crate::{ParseXintError, Xint};

impl<const N: u32, const SIGNED: bool> Zero for Xint<N, SIGNED> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(*self)
    }
}

impl<const N: u32, const SIGNED: bool> One for Xint<N, SIGNED> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<const N: u32, const SIGNED: bool> Num for Xint<N, SIGNED> {
    type FromStrRadixErr = ParseXintError;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, ParseXintError> {
        Self::from_str_radix(str, radix)
    }
}

impl<const N: u32, const SIGNED: bool> Bounded for Xint<N, SIGNED> {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

macro_rules! impl_binary_num_traits {
    ($($kind:ident: $($method:ident)*;)*) => {
        paste! {
            $($(
                impl<const N: u32, const SIGNED: bool> [<$kind $method:camel>] for Xint<N, SIGNED> {
                    impl_binary_num_traits!(@method $kind [<$kind:lower _ $method>]);
                }
            )*)*
        }
    };
    (@method Checked $name:ident) => {
        fn $name(&self, v: &Self) -> Option<Self> {
            Self::$name(*self, *v)
        }
    };
    (@method Wrapping $name:ident) => {
        fn $name(&self, v: &Self) -> Self {
            Self::$name(*self, *v)
        }
    };
}

impl_binary_num_traits! {
    Checked: add sub mul div rem;
    Wrapping: add sub mul;
}

impl<const N: u32, const SIGNED: bool> CheckedNeg for Xint<N, SIGNED> {
    fn checked_neg(&self) -> Option<Self> {
        Self::checked_neg(*self)
    }
}

impl<const N: u32, const SIGNED: bool> WrappingNeg for Xint<N, SIGNED> {
    fn wrapping_neg(&self) -> Self {
        Self::wrapping_neg(*self)
    }
}

impl<const N: u32, const SIGNED: bool> CheckedShl for Xint<N, SIGNED> {
    fn checked_shl(&self, rhs: u32) -> Option<Self> {
        Self::checked_shl(*self, rhs)
    }
}

impl<const N: u32, const SIGNED: bool> CheckedShr for Xint<N, SIGNED> {
    fn checked_shr(&self, rhs: u32) -> Option<Self> {
        Self::checked_shr(*self, rhs)
    }
}

impl<const N: u32, const SIGNED: bool> WrappingShl for Xint<N, SIGNED> {
    fn wrapping_shl(&self, rhs: u32) -> Self {
        Self::wrapping_shl(*self, rhs)
    }
}

impl<const N: u32, const SIGNED: bool> WrappingShr for Xint<N, SIGNED> {
    fn wrapping_shr(&self, rhs: u32) -> Self {
        Self::wrapping_shr(*self, rhs)
    }
}

impl<const N: u32, const SIGNED: bool> ToPrimitive for Xint<N, SIGNED> {
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(Self::to_i128(*self)).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(Self::to_i128(*self)).ok()
    }

    fn to_i128(&self) -> Option<i128> {
        Some(Self::to_i128(*self))
    }
}

impl<const N: u32, const SIGNED: bool> FromPrimitive for Xint<N, SIGNED> {
    fn from_i64(n: i64) -> Option<Self> {
        Self::new(n)
    }

    fn from_u64(n: u64) -> Option<Self> {
        Self::new(n)
    }

    fn from_i128(n: i128) -> Option<Self> {
        Self::from_i128(n)
    }
}

impl<const N: u32> Signed for Xint<N, true> {
    fn abs(&self) -> Self {
        Self::wrapping_abs(*self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if *self <= *other {
            Self::ZERO
        } else {
            Self::wrapping_sub(*self, *other)
        }
    }

    fn signum(&self) -> Self {
        if Self::is_zero(*self) {
            Self::ZERO
        } else if Self::is_negative(*self) {
            Self::from_bits(u64::MAX)
        } else {
            Self::ONE
        }
    }

    fn is_positive(&self) -> bool {
        !Self::is_zero(*self) && !Self::is_negative(*self)
    }

    fn is_negative(&self) -> bool {
        Self::is_negative(*self)
    }
}

impl<const N: u32> Unsigned for Xint<N, false> {}
