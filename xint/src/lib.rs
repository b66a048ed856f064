#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc = include_str!("../README.md")]

use core::fmt::{self, Display, Formatter};
use core::num::ParseIntError;

mod cmp;
mod convert;
mod format;
mod num;
mod ops;
pub mod prelude;
mod traits;
pub mod types;
mod value;
mod word;

// For macro access via `$crate`.
#[doc(hidden)]
pub mod __private {
    pub use xint_macros::xint;
}

mod sealed {
    pub trait Sealed {}
}

/// The error type returned when a conversion to a fixed-width integer type
/// fails because the value is out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeError(pub(crate) ());

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "value out of range for fixed-width integer type")
    }
}

impl core::error::Error for RangeError {}

/// The error type returned when parsing a string to a fixed-width integer
/// fails.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseXintError {
    /// Parsing failed because the string is not an integer.
    Parse(ParseIntError),
    /// Parsing failed because the integer is out of range.
    Range(RangeError),
}

impl Display for ParseXintError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Range(e) => write!(f, "{e}"),
        }
    }
}

impl core::error::Error for ParseXintError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Range(e) => Some(e),
        }
    }
}

impl From<ParseIntError> for ParseXintError {
    fn from(value: ParseIntError) -> Self {
        Self::Parse(value)
    }
}

impl From<RangeError> for ParseXintError {
    fn from(value: RangeError) -> Self {
        Self::Range(value)
    }
}

pub use traits::*;
pub use value::{Int, Uint, Xint};

/// Constructs a fixed-width integer literal.
///
/// A fixed-width literal is an integer literal with a suffix consisting of
/// `'U'` or `'I'` followed by a width, which must be at least one and at most
/// 64. The suffix names one of the aliases in [`types`].
///
/// This macro accepts one literal, optionally negated. Only zero may be
/// negated when the suffix is `'U'`. The value is checked against the type's range and replaced with
/// either a call to a const constructor or a compile error.
///
/// # Examples
///
/// ```
/// # use xint::prelude::*;
/// // Underscores are permitted anywhere in a Rust literal and are encouraged
/// // for readability.
/// let x = xint!(6_U3);
/// assert_eq!(x.to_bits(), 6);
///
/// let y = xint!(-8_I4);
/// assert_eq!(y, I4::MIN);
/// ```
///
/// ```compile_fail
/// # use xint::prelude::*;
/// // This value is out of range for `U16`.
/// xint!(65536_U16);
/// ```
///
/// ```compile_fail
/// # use xint::prelude::*;
/// // This value is out of range for `I8`.
/// xint!(128_I8);
/// ```
///
/// ```compile_fail
/// # use xint::prelude::*;
/// // There is no 65-bit type.
/// xint!(1_U65);
/// ```
#[macro_export]
macro_rules! xint {
    ($($tt:tt)*) => {
        $crate::__private::xint! { ($crate, $($tt)*) }
    };
}

/// Rewrites fixed-width integer literals in the item it is attached to.
///
/// A fixed-width literal is an integer literal with a suffix consisting of
/// `'U'` or `'I'` followed by a width, which must be at least one and at most
/// 64. Each literal is checked against the corresponding type's range and
/// replaced with either a call to a const constructor or a compile error. All
/// other tokens are preserved.
///
/// Literals rewritten by this attribute are never negative. Negate them with
/// the ordinary operator, as in `-5_I4`, and spell the minimum of a signed
/// type with [`xint!`] or `MIN`.
///
/// The generated code refers to this crate as `::xint`. Pass
/// `crate_path = <path>` to use another path.
///
/// # Examples
///
/// ```
/// # use xint::prelude::*;
/// #[xint_literals]
/// fn example() {
///     let x = 6_U3;
///     assert_eq!(x.to_bits(), 6);
///     assert_eq!(x + 3_U3, 1_U3);
/// }
/// # example();
/// ```
///
/// ```compile_fail
/// # use xint::prelude::*;
/// #[xint_literals]
/// fn example() {
///     // This value is out of range for `U16`.
///     let x = 65536_U16;
/// }
/// ```
pub use xint_macros::xint_literals;

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::{ParseXintError, RangeError};

    #[test]
    fn test_literal_macro() {
        assert_eq!(xint!(0_U1), U1::ZERO);
        assert_eq!(xint!(-0_U4), U4::ZERO);
        assert_eq!(xint!(1_U1), U1::MAX);
        assert_eq!(xint!(0x0fff_U12), U12::MAX);
        assert_eq!(xint!(0_I1), I1::ZERO);
        assert_eq!(xint!(-1_I1), I1::MIN);
        assert_eq!(xint!(-32_I6), I6::MIN);
        assert_eq!(xint!(31_I6), I6::MAX);
        assert_eq!(xint!(18446744073709551615_U64), U64::MAX);
        assert_eq!(xint!(-9223372036854775808_I64), I64::MIN);
    }

    #[xint_literals(crate_path = crate)]
    #[test]
    fn test_literal_attribute() {
        let x = 5_U3;
        assert_eq!(x + 5_U3, 2_U3);
        assert_eq!(-(1_I8), I8::new_masked(-1i8));
        assert_eq!(0x7f_I8, I8::MAX);
        // Unsuffixed literals are left alone.
        assert_eq!(x.to_bits(), 5);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", RangeError(())),
            "value out of range for fixed-width integer type",
        );
        let parse = "z".parse::<U8>().unwrap_err();
        assert!(matches!(parse, ParseXintError::Parse(_)));
        assert_eq!(format!("{parse}"), format!("{}", "z".parse::<u8>().unwrap_err()));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let err = "300".parse::<U8>().unwrap_err();
        assert_eq!(err, ParseXintError::Range(RangeError(())));
        assert!(err.source().is_some());
    }
}
