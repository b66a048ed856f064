//! The generic fixed-width integer type [`Xint`].

use crate::sealed::Sealed;
use crate::word::{bit_cast, safe_abs, SIGN_BIT, WORD_BITS};
use crate::{FixedWidth, Primitive, RangeError};

/// An `N`-bit integer, signed (two's complement) if `SIGNED` is true,
/// emulated in a 64-bit word.
///
/// Arithmetic wraps at `N` bits exactly as an `N`-bit hardware register
/// would, for every operator and every build profile.
///
/// # Layout
///
/// This type is `#[repr(transparent)]` to [`u64`], but imposes additional
/// invariants.
///
/// # Invariants
///
/// The value is left-justified: its `N` bits occupy the most significant bits
/// of the word. The `64 - N` least significant bits are always clear. Keeping
/// the value at the top of the word lets native wrapping addition and
/// subtraction on the whole word wrap at exactly `N` bits.
///
/// # Width
///
/// `N` must be in `1..=64`. Every constant and constructor evaluates the
/// width assertion, so no value of any other width can exist and any code
/// that creates one fails to compile:
///
/// ```compile_fail
/// # use xint::Xint;
/// const _: Xint<65, false> = Xint::from_bits(1);
/// ```
///
/// ```compile_fail
/// # use xint::Xint;
/// const _: Xint<0, true> = Xint::from_bits(0);
/// ```
///
/// ```compile_fail
/// # use xint::Xint;
/// type Wide = Xint<65, false>;
/// let x = Wide::ZERO + Wide::ZERO;
/// assert!(x.is_zero());
/// ```
///
/// ```compile_fail
/// # use xint::Xint;
/// let x = Xint::<0, true>::default();
/// assert!(x <= Xint::<0, true>::ZERO);
/// ```
///
/// ```compile_fail
/// # use xint::Xint;
/// let x = Xint::<65, true>::MIN | Xint::<65, true>::ONE;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Xint<const N: u32, const SIGNED: bool>(pub(crate) u64);

/// The unsigned `N`-bit integer type.
pub type Uint<const N: u32> = Xint<N, false>;

/// The signed `N`-bit integer type.
pub type Int<const N: u32> = Xint<N, true>;

impl<const N: u32, const SIGNED: bool> Xint<N, SIGNED> {
    /// Number of always-clear padding bits below the value.
    ///
    /// Fails const evaluation for widths outside `1..=64`. Every constant and
    /// constructor reads it, directly or through [`from_bits`](Self::from_bits).
    pub(crate) const OFFSET: u32 = {
        assert!(
            N >= 1 && N <= WORD_BITS,
            "cannot simulate an integer of this width in a 64-bit word",
        );
        WORD_BITS - N
    };
    /// The word representing `1`.
    pub(crate) const UNIT: u64 = 1 << Self::OFFSET;
    /// The bits of the word that may be set.
    pub(crate) const WORD_MASK: u64 = u64::MAX << Self::OFFSET;

    /// The bit width of this type.
    pub const BITS: u32 = WORD_BITS - Self::OFFSET;
    /// Whether values of this type are interpreted as two's complement.
    pub const IS_SIGNED: bool = SIGNED;

    /// The smallest value of this type.
    pub const MIN: Self = if SIGNED {
        Self(SIGN_BIT & Self::WORD_MASK)
    } else {
        Self::from_bits(0)
    };
    /// The largest value of this type.
    pub const MAX: Self = if SIGNED {
        Self((SIGN_BIT - 1) & Self::WORD_MASK)
    } else {
        Self(Self::WORD_MASK)
    };

    /// The value `0` represented in this type.
    pub const ZERO: Self = Self::from_bits(0);
    /// The value `1` represented in this type. For `Int<1>` this wraps to
    /// `-1`.
    pub const ONE: Self = Self(Self::UNIT);

    /// Creates a value from the low `N` bits of a word, discarding the rest.
    ///
    /// ```
    /// # use xint::prelude::*;
    /// assert_eq!(U4::from_bits(0x1f), U4::from_bits(0xf));
    /// assert_eq!(I4::from_bits(0xf).to_i128(), -1);
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits << Self::OFFSET)
    }

    /// Creates a value from a native integer by keeping its low `N` bits.
    ///
    /// Signed natives are sign-extended first, so `-1` becomes the all-ones
    /// pattern at every width.
    #[inline(always)]
    #[must_use]
    pub fn new_masked<T: Primitive>(value: T) -> Self {
        Self::from_bits(value.into_word())
    }

    /// Creates a value from a native integer if it is in range for this type.
    #[inline]
    #[must_use]
    pub fn new<T: Primitive>(value: T) -> Option<Self> {
        Self::from_i128(value.into_i128())
    }

    /// Creates a value from a mathematical value if it is in range for this
    /// type.
    #[must_use]
    pub const fn from_i128(value: i128) -> Option<Self> {
        if value < Self::MIN.to_i128() || value > Self::MAX.to_i128() {
            None
        } else {
            Some(Self::from_bits(value as u64))
        }
    }

    /// Returns the bit pattern in the least significant bits of a word. The
    /// upper bits are clear.
    ///
    /// For unsigned types this is the value itself.
    #[inline(always)]
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.0 >> Self::OFFSET
    }

    /// Returns the bit pattern interpreted as an `N`-bit two's-complement
    /// value and sign-extended to an [`i64`].
    ///
    /// Only unsigned words are shifted; the result is reinterpreted as signed
    /// at the end.
    #[must_use]
    pub const fn to_sign_extended(self) -> i64 {
        if bit_cast(self.0) < 0 {
            bit_cast(!(!self.0 >> Self::OFFSET))
        } else {
            bit_cast(self.0 >> Self::OFFSET)
        }
    }

    /// Returns the value extended to a full word: sign-extended for signed
    /// types, zero-extended for unsigned types.
    #[inline]
    #[must_use]
    pub const fn to_extended_word(self) -> u64 {
        if SIGNED {
            self.to_sign_extended() as u64
        } else {
            self.to_bits()
        }
    }

    /// Returns the mathematical value.
    #[inline]
    #[must_use]
    pub const fn to_i128(self) -> i128 {
        if SIGNED {
            self.to_sign_extended() as i128
        } else {
            self.to_bits() as i128
        }
    }

    /// Returns `true` if the value is zero.
    #[inline(always)]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the value is negative. Always `false` for unsigned
    /// types.
    #[inline(always)]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        SIGNED && bit_cast(self.0) < 0
    }

    /// Converts to a type that can represent every value of this type.
    ///
    /// This is the named form of the lossless [`From`] conversions, which
    /// exist for wider types of the same signedness and for signed types
    /// strictly wider than an unsigned source.
    ///
    /// ```
    /// # use xint::prelude::*;
    /// let x: I12 = I5::from_bits(0x1f).widen();
    /// assert_eq!(x.to_i128(), -1);
    /// ```
    ///
    /// ```compile_fail
    /// # use xint::prelude::*;
    /// // Narrowing can lose bits.
    /// let x: U4 = U12::from_bits(0x123).widen();
    /// ```
    ///
    /// ```compile_fail
    /// # use xint::prelude::*;
    /// // An unsigned value does not fit a signed type of the same width.
    /// let x: I8 = U8::from_bits(0xff).widen();
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn widen<T: From<Self>>(self) -> T {
        T::from(self)
    }

    /// Converts to any fixed-width type, keeping the low bits of the extended
    /// value.
    ///
    /// Narrowing keeps the low bits of the two's-complement pattern and
    /// changing signedness reinterprets the bits.
    ///
    /// ```
    /// # use xint::prelude::*;
    /// let x: U4 = U12::from_bits(0x123).convert_lossy();
    /// assert_eq!(x.to_bits(), 0x3);
    /// let y: U8 = I4::from_bits(0xf).convert_lossy();
    /// assert_eq!(y.to_bits(), 0xff);
    /// ```
    #[inline]
    #[must_use]
    pub fn convert_lossy<T: FixedWidth>(self) -> T {
        T::from_bits(self.to_extended_word())
    }

    /// Converts to any fixed-width type if the value is in range for it.
    pub fn try_convert<T: FixedWidth>(self) -> Result<T, RangeError> {
        T::from_i128(self.to_i128()).ok_or(RangeError(()))
    }

    /// Wrapping addition. Computes `self + rhs`, wrapping around at the
    /// boundary of the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    /// Wrapping subtraction. Computes `self - rhs`, wrapping around at the
    /// boundary of the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    /// Wrapping negation. Computes `-self`, wrapping around at the boundary of
    /// the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// Wrapping multiplication. Computes `self * rhs`, wrapping around at the
    /// boundary of the type.
    ///
    /// The cross terms of a full-word product would spill into the padding,
    /// so the operands are unpacked first.
    #[inline]
    #[must_use]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits().wrapping_mul(rhs.to_bits()))
    }

    /// Wrapping division. Computes `self / rhs`, truncating toward zero.
    ///
    /// The only case that wraps is `MIN / -1` on signed types, which yields
    /// `MIN`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub const fn wrapping_div(self, rhs: Self) -> Self {
        if SIGNED {
            let negative = self.is_negative() != rhs.is_negative();
            let magnitude = (safe_abs(bit_cast(self.0)) >> Self::OFFSET)
                / (safe_abs(bit_cast(rhs.0)) >> Self::OFFSET);
            Self::from_magnitude(magnitude, negative)
        } else {
            Self::from_bits(self.to_bits() / rhs.to_bits())
        }
    }

    /// Wrapping remainder. Computes `self % rhs`; the result has the sign of
    /// `self`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub const fn wrapping_rem(self, rhs: Self) -> Self {
        if SIGNED {
            let magnitude = (safe_abs(bit_cast(self.0)) >> Self::OFFSET)
                % (safe_abs(bit_cast(rhs.0)) >> Self::OFFSET);
            Self::from_magnitude(magnitude, self.is_negative())
        } else {
            Self::from_bits(self.to_bits() % rhs.to_bits())
        }
    }

    /// Wrapping absolute value. `MIN.wrapping_abs()` is `MIN` for signed
    /// types.
    #[inline]
    #[must_use]
    pub const fn wrapping_abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Wrapping shift left. Computes `self << (rhs % N)`.
    #[inline]
    #[must_use]
    pub const fn wrapping_shl(self, rhs: u32) -> Self {
        self.shl_within(rhs % N)
    }

    /// Wrapping shift right. Computes `self >> (rhs % N)`; arithmetic for
    /// signed types, logical for unsigned types.
    #[inline]
    #[must_use]
    pub const fn wrapping_shr(self, rhs: u32) -> Self {
        self.shr_within(rhs % N)
    }

    /// Checked addition. Computes `self + rhs`, returning `None` if overflow
    /// occurred.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        Self::from_i128(self.to_i128() + rhs.to_i128())
    }

    /// Checked subtraction. Computes `self - rhs`, returning `None` if
    /// overflow occurred.
    #[must_use]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        Self::from_i128(self.to_i128() - rhs.to_i128())
    }

    /// Checked multiplication. Computes `self * rhs`, returning `None` if
    /// overflow occurred.
    #[must_use]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.to_i128().checked_mul(rhs.to_i128()) {
            Some(product) => Self::from_i128(product),
            None => None,
        }
    }

    /// Checked division. Computes `self / rhs`, returning `None` if `rhs` is
    /// zero or the division overflows (`MIN / -1`).
    #[must_use]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() || self.is_overflowing_division(rhs) {
            None
        } else {
            Some(self.wrapping_div(rhs))
        }
    }

    /// Checked remainder. Computes `self % rhs`, returning `None` if `rhs` is
    /// zero or the matching division overflows (`MIN % -1`).
    #[must_use]
    pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() || self.is_overflowing_division(rhs) {
            None
        } else {
            Some(self.wrapping_rem(rhs))
        }
    }

    /// Checked negation. Computes `-self`, returning `None` unless the result
    /// is representable.
    #[must_use]
    pub const fn checked_neg(self) -> Option<Self> {
        Self::from_i128(-self.to_i128())
    }

    /// Checked shift left. Computes `self << rhs`, returning `None` if `rhs`
    /// is not less than `N`.
    #[must_use]
    pub const fn checked_shl(self, rhs: u32) -> Option<Self> {
        if rhs < Self::BITS {
            Some(self.shl_within(rhs))
        } else {
            None
        }
    }

    /// Checked shift right. Computes `self >> rhs`, returning `None` if `rhs`
    /// is not less than `N`.
    #[must_use]
    pub const fn checked_shr(self, rhs: u32) -> Option<Self> {
        if rhs < Self::BITS {
            Some(self.shr_within(rhs))
        } else {
            None
        }
    }

    /// Saturating addition. Computes `self + rhs`, clamping at the numeric
    /// bounds.
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self::saturate(self.to_i128() + rhs.to_i128())
    }

    /// Saturating subtraction. Computes `self - rhs`, clamping at the numeric
    /// bounds.
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self::saturate(self.to_i128() - rhs.to_i128())
    }

    /// Adds one in place, wrapping, and returns the new value.
    #[inline]
    pub fn increment(&mut self) -> Self {
        self.0 = self.0.wrapping_add(Self::UNIT);
        *self
    }

    /// Subtracts one in place, wrapping, and returns the new value.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        self.0 = self.0.wrapping_sub(Self::UNIT);
        *self
    }

    /// Returns the number of ones in the bit pattern.
    #[inline]
    #[must_use]
    pub const fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns the number of leading zeros in the `N`-bit pattern.
    #[inline]
    #[must_use]
    pub const fn leading_zeros(self) -> u32 {
        if self.0 == 0 {
            Self::BITS
        } else {
            self.0.leading_zeros()
        }
    }

    /// Returns the number of trailing zeros in the `N`-bit pattern.
    #[inline]
    #[must_use]
    pub const fn trailing_zeros(self) -> u32 {
        if self.0 == 0 {
            Self::BITS
        } else {
            self.0.trailing_zeros() - Self::OFFSET
        }
    }

    /// Shifts left by an amount known to be less than `N`.
    #[inline(always)]
    pub(crate) const fn shl_within(self, rhs: u32) -> Self {
        Self((self.0 << rhs) & Self::WORD_MASK)
    }

    /// Shifts right by an amount known to be less than `N`.
    #[inline]
    pub(crate) const fn shr_within(self, rhs: u32) -> Self {
        let shifted = if self.is_negative() {
            !(!self.0 >> rhs)
        } else {
            self.0 >> rhs
        };
        Self(shifted & Self::WORD_MASK)
    }

    /// Shifts left by any amount. Amounts outside `0..N` shift every bit out.
    pub(crate) fn shl_by(self, rhs: i128) -> Self {
        match Self::shift_amount(rhs) {
            Some(rhs) => self.shl_within(rhs),
            None => Self::ZERO,
        }
    }

    /// Shifts right by any amount. Amounts outside `0..N` shift every bit
    /// out, leaving only copies of the sign bit.
    pub(crate) fn shr_by(self, rhs: i128) -> Self {
        match Self::shift_amount(rhs) {
            Some(rhs) => self.shr_within(rhs),
            None if self.is_negative() => Self(Self::WORD_MASK),
            None => Self::ZERO,
        }
    }

    fn shift_amount(rhs: i128) -> Option<u32> {
        if (0..Self::BITS as i128).contains(&rhs) {
            Some(rhs as u32)
        } else {
            None
        }
    }

    const fn from_magnitude(magnitude: u64, negative: bool) -> Self {
        let word = magnitude << Self::OFFSET;
        if negative {
            Self(word.wrapping_neg())
        } else {
            Self(word)
        }
    }

    const fn is_overflowing_division(self, rhs: Self) -> bool {
        SIGNED && self.0 == Self::MIN.0 && rhs.0 == Self::WORD_MASK
    }

    const fn saturate(value: i128) -> Self {
        if value < Self::MIN.to_i128() {
            Self::MIN
        } else if value > Self::MAX.to_i128() {
            Self::MAX
        } else {
            Self::from_bits(value as u64)
        }
    }
}

impl<const N: u32, const SIGNED: bool> Default for Xint<N, SIGNED> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: u32, const SIGNED: bool> Sealed for Xint<N, SIGNED> {}

impl<const N: u32, const SIGNED: bool> FixedWidth for Xint<N, SIGNED> {
    const BITS: u32 = Self::BITS;
    const IS_SIGNED: bool = SIGNED;

    const MIN: Self = Self::MIN;
    const MAX: Self = Self::MAX;

    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn from_bits(bits: u64) -> Self {
        Self::from_bits(bits)
    }

    fn to_bits(self) -> u64 {
        self.to_bits()
    }

    fn to_extended_word(self) -> u64 {
        self.to_extended_word()
    }

    fn to_i128(self) -> i128 {
        self.to_i128()
    }

    fn from_i128(value: i128) -> Option<Self> {
        Self::from_i128(value)
    }
}
