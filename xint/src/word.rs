//! Bit-pattern helpers for the 64-bit backing word.
//!
//! Both helpers are total: neither relies on a native operation that can
//! overflow for boundary inputs such as [`i64::MIN`].

/// The width of the backing word.
pub(crate) const WORD_BITS: u32 = u64::BITS;

/// The sign bit of the backing word. Also the bias between an unsigned
/// pattern and its two's-complement signed value.
pub(crate) const SIGN_BIT: u64 = 1 << (WORD_BITS - 1);

/// Reinterprets an unsigned 64-bit pattern as the signed value with the same
/// two's-complement bits.
///
/// Patterns below the sign bit are the same number in both domains. Patterns
/// at or above it are rebased onto [`i64::MIN`] after removing the bias, so
/// neither branch can overflow.
#[inline(always)]
#[must_use]
pub(crate) const fn bit_cast(pattern: u64) -> i64 {
    if pattern < SIGN_BIT {
        pattern as i64
    } else {
        (pattern - SIGN_BIT) as i64 + i64::MIN
    }
}

/// Returns the magnitude of a signed value as an unsigned word.
///
/// The negation happens in the unsigned domain, where it is well defined for
/// [`i64::MIN`] (whose magnitude `2^63` has no signed representation).
#[inline(always)]
#[must_use]
pub(crate) const fn safe_abs(value: i64) -> u64 {
    let pattern = value as u64;
    if value < 0 {
        pattern.wrapping_neg()
    } else {
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_cast_boundaries() {
        assert_eq!(bit_cast(0), 0);
        assert_eq!(bit_cast(1), 1);
        assert_eq!(bit_cast(SIGN_BIT - 1), i64::MAX);
        assert_eq!(bit_cast(SIGN_BIT), i64::MIN);
        assert_eq!(bit_cast(SIGN_BIT + 1), i64::MIN + 1);
        assert_eq!(bit_cast(u64::MAX), -1);
    }

    #[test]
    fn test_bit_cast_matches_native_reinterpretation() {
        for pattern in [
            0x0123_4567_89ab_cdef_u64,
            0x8000_0000_0000_0001,
            0xdead_beef_0000_0000,
            0xffff_ffff_ffff_fffe,
            0x7fff_0000_0000_0000,
        ] {
            assert_eq!(bit_cast(pattern), i64::from_ne_bytes(pattern.to_ne_bytes()));
        }
    }

    #[test]
    fn test_safe_abs() {
        assert_eq!(safe_abs(0), 0);
        assert_eq!(safe_abs(5), 5);
        assert_eq!(safe_abs(-5), 5);
        assert_eq!(safe_abs(i64::MAX), i64::MAX as u64);
        assert_eq!(safe_abs(i64::MIN), 1 << 63);
        assert_eq!(safe_abs(i64::MIN + 1), i64::MAX as u64);
    }
}
