//! Decoding share values written in an arbitrary base.
//!
//! Digits are `0-9` followed by `a-z` (case-insensitive), so base 36 is the
//! largest expressible radix. No sign, prefix or separator is accepted.

use num_bigint::BigInt;
use num_traits::Zero;

use super::error::InputError;
use crate::config::{MAX_RADIX, MIN_RADIX};

/// Decode `value` as an unsigned integer in `base`.
///
/// ```
/// use num_bigint::BigInt;
/// use shamir_recovery::input::decode_base;
///
/// assert_eq!(decode_base("111", 2).unwrap(), BigInt::from(7));
/// assert_eq!(decode_base("zZ", 36).unwrap(), BigInt::from(1295));
/// ```
///
/// # Errors
///
/// - [`InputError::UnsupportedBase`] if `base` is outside `2..=36`
/// - [`InputError::EmptyValue`] if `value` is empty
/// - [`InputError::InvalidDigit`] for any character that is not a digit of `base`
pub fn decode_base(value: &str, base: u32) -> Result<BigInt, InputError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&base) {
        return Err(InputError::UnsupportedBase(base));
    }
    if value.is_empty() {
        return Err(InputError::EmptyValue);
    }

    let radix = BigInt::from(base);
    value.chars().try_fold(BigInt::zero(), |acc, digit| {
        let d = digit
            .to_digit(MAX_RADIX)
            .filter(|&d| d < base)
            .ok_or(InputError::InvalidDigit { digit, base })?;
        Ok(acc * &radix + d)
    })
}
