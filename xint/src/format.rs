//! Formatting and parsing.

use core::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex};
use core::str::FromStr;

use crate::{ParseXintError, RangeError, Xint};

// Renders the unsigned value of the N-bit pattern for both flavors, so `I4`
// holding -8 displays as `8`. `Debug` shows the signed value.
impl<const N: u32, const SIGNED: bool> Display for Xint<N, SIGNED> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.to_bits(), f)
    }
}

impl<const N: u32, const SIGNED: bool> Debug for Xint<N, SIGNED> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let prefix = if SIGNED { 'I' } else { 'U' };
        write!(f, "{prefix}{N}({})", self.to_i128())
    }
}

macro_rules! impl_radix_fmt {
    ($($trait:ident)*) => {
        $(
            // Renders the N-bit pattern, as the primitive types do for
            // negative values.
            impl<const N: u32, const SIGNED: bool> $trait for Xint<N, SIGNED> {
                fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                    $trait::fmt(&self.to_bits(), f)
                }
            }
        )*
    };
}

impl_radix_fmt!(Binary Octal LowerHex UpperHex);

impl<const N: u32, const SIGNED: bool> FromStr for Xint<N, SIGNED> {
    type Err = ParseXintError;

    fn from_str(s: &str) -> Result<Self, ParseXintError> {
        Self::from_str_radix(s, 10)
    }
}

impl<const N: u32, const SIGNED: bool> Xint<N, SIGNED> {
    /// Parses a value in the given radix, failing if it is out of range for
    /// this type.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `2..=36`.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseXintError> {
        Self::from_i128(i128::from_str_radix(s, radix)?).ok_or_else(|| RangeError(()).into())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::ParseXintError;

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", U1::MAX), "U1(1)");
        assert_eq!(format!("{:?}", U12::from_bits(1234)), "U12(1234)");
        assert_eq!(format!("{:?}", I4::MIN), "I4(-8)");
        assert_eq!(format!("{:?}", I64::MIN), "I64(-9223372036854775808)");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", U4::MAX), "15");
        assert_eq!(format!("{}", U64::MAX), "18446744073709551615");
        assert_eq!(format!("{:>5}", U7::from_bits(42)), "   42");
        assert_eq!(format!("{:+}", I7::from_bits(42)), "+42");
    }

    #[test]
    fn test_display_signed_shows_unsigned_pattern_value() {
        assert_eq!(format!("{}", I4::MIN), "8");
        assert_eq!(format!("{}", I4::new_masked(-1i8)), "15");
        assert_eq!(format!("{}", I4::MAX), "7");
        assert_eq!(format!("{}", I1::MIN), "1");
        assert_eq!(format!("{}", I64::MIN), "9223372036854775808");
        assert_eq!(I12::new_masked(-2i8).to_string(), "4094");
    }

    #[test]
    fn test_radix_formats_show_bit_pattern() {
        assert_eq!(format!("{:b}", I4::new_masked(-2i8)), "1110");
        assert_eq!(format!("{:#x}", U12::MAX), "0xfff");
        assert_eq!(format!("{:X}", I12::MIN), "800");
        assert_eq!(format!("{:o}", U9::MAX), "777");
        assert_eq!(format!("{:08b}", U5::ONE), "00000001");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("15".parse::<U4>(), Ok(U4::MAX));
        assert_eq!("-8".parse::<I4>(), Ok(I4::MIN));
        assert!(matches!("16".parse::<U4>(), Err(ParseXintError::Range(_))));
        assert!(matches!("-1".parse::<U4>(), Err(ParseXintError::Range(_))));
        assert!(matches!("8".parse::<I4>(), Err(ParseXintError::Range(_))));
        assert!(matches!("".parse::<U4>(), Err(ParseXintError::Parse(_))));
        assert!(matches!("x".parse::<U4>(), Err(ParseXintError::Parse(_))));
    }

    #[test]
    fn test_from_str_radix() {
        assert_eq!(U12::from_str_radix("fff", 16), Ok(U12::MAX));
        assert_eq!(I8::from_str_radix("-80", 16), Ok(I8::MIN));
        assert!(U12::from_str_radix("1000", 16).is_err());
    }
}
