use core::fmt::{Debug, Display};
use core::hash::Hash;

use num_traits::{Bounded, Num};

use crate::sealed::Sealed;

/// Fixed-width integer types emulated in a 64-bit word.
///
/// There is exactly one type implementing `FixedWidth` for each combination
/// of bit width from 1 to 64 inclusive and signedness: the
/// [`Xint`](crate::Xint) instantiations, also reachable through the aliases
/// [`U1`](crate::types::U1) through [`I64`](crate::types::I64).
pub trait FixedWidth:
    Copy
    + Debug
    + Display
    + Hash
    + Eq
    + Ord
    + Num
    + Bounded
    + num_traits::CheckedAdd
    + num_traits::CheckedDiv
    + num_traits::CheckedMul
    + num_traits::CheckedRem
    + num_traits::CheckedSub
    + num_traits::WrappingAdd
    + num_traits::WrappingMul
    + num_traits::WrappingSub
    + Sized
    + Sealed
{
    /// The bit width of this type.
    const BITS: u32;
    /// Whether values of this type are interpreted as two's complement.
    const IS_SIGNED: bool;

    /// The smallest value of this type.
    const MIN: Self;
    /// The largest value of this type.
    const MAX: Self;

    /// The value `0` represented in this type.
    const ZERO: Self;
    /// The value `1` represented in this type.
    const ONE: Self;

    /// Creates a value from the low [`BITS`](Self::BITS) bits of a word,
    /// discarding the rest.
    fn from_bits(bits: u64) -> Self;

    /// Returns the bit pattern of the value in the least significant bits of
    /// a word. The upper bits are clear.
    fn to_bits(self) -> u64;

    /// Returns the value extended to a full word: sign-extended for signed
    /// types, zero-extended for unsigned types.
    ///
    /// Every conversion between fixed-width types goes through this word.
    fn to_extended_word(self) -> u64;

    /// Returns the mathematical value.
    fn to_i128(self) -> i128;

    /// Creates a value from a mathematical value if it is in range for this
    /// type.
    fn from_i128(value: i128) -> Option<Self>;
}

/// Native integer types that may be used as operands alongside fixed-width
/// values.
///
/// Implemented for every primitive integer type no wider than the 64-bit
/// backing word.
pub trait Primitive: Copy + Sealed {
    /// Extends the value to a word: sign-extended for signed types,
    /// zero-extended for unsigned types.
    fn into_word(self) -> u64;

    /// Creates a value from the low bits of a word.
    fn from_word(word: u64) -> Self;

    /// Returns the mathematical value.
    fn into_i128(self) -> i128;
}

macro_rules! impl_primitive {
    ($($primitive:ident)*) => {
        $(
            impl Sealed for $primitive {}

            impl Primitive for $primitive {
                #[inline(always)]
                fn into_word(self) -> u64 {
                    self as u64
                }

                #[inline(always)]
                fn from_word(word: u64) -> Self {
                    word as $primitive
                }

                #[inline(always)]
                fn into_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_primitive!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

#[cfg(test)]
mod tests {
    use super::Primitive;

    #[test]
    fn test_into_word_extends() {
        assert_eq!((-1i8).into_word(), u64::MAX);
        assert_eq!(0xffu8.into_word(), 0xff);
        assert_eq!(i16::MIN.into_word(), 0xffff_ffff_ffff_8000);
        assert_eq!(u32::MAX.into_word(), 0xffff_ffff);
    }

    #[test]
    fn test_from_word_truncates() {
        assert_eq!(u8::from_word(0x1234), 0x34);
        assert_eq!(i8::from_word(0xff), -1);
        assert_eq!(i64::from_word(u64::MAX), -1);
    }

    #[test]
    fn test_into_i128() {
        assert_eq!(u64::MAX.into_i128(), u64::MAX as i128);
        assert_eq!(i64::MIN.into_i128(), i64::MIN as i128);
        assert_eq!((-1isize).into_i128(), -1);
        assert_eq!(usize::MAX.into_word(), usize::MAX as u64);
    }
}
