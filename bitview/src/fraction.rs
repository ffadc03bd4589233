//! Binary digits of fractions in `[0, 1)`.

use alloc::string::String;

use log::trace;

use crate::{FractionOutOfRangeSnafu, FractionTooLongSnafu, Result};

/// The longest string [`binary_fraction`] returns, counting the leading `0.`.
pub const MAX_FRACTION_LEN: usize = 32;

/// Writes `value` as a binary fraction such as `0.101`.
///
/// Digits are produced until the remainder is exactly zero, so the result is
/// exact. Fails with
/// [`Error::FractionOutOfRange`](crate::Error::FractionOutOfRange) unless
/// `0 <= value < 1`, and with
/// [`Error::FractionTooLong`](crate::Error::FractionTooLong) if the result
/// would exceed [`MAX_FRACTION_LEN`] characters. Zero is written as `0.0`.
///
/// ```
/// use bitview::binary_fraction;
///
/// assert_eq!(binary_fraction(0.625)?, "0.101");
/// assert!(binary_fraction(0.1).is_err());
/// # Ok::<(), bitview::Error>(())
/// ```
pub fn binary_fraction(value: f64) -> Result<String> {
    if !(0.0..1.0).contains(&value) {
        return FractionOutOfRangeSnafu { value }.fail();
    }

    let mut text = String::with_capacity(MAX_FRACTION_LEN);
    text.push_str("0.");
    let mut remainder = value;
    let mut place = 0.5;
    loop {
        // Subtracting a power of two no larger than the remainder is exact.
        if remainder >= place {
            text.push('1');
            remainder -= place;
        } else {
            text.push('0');
        }
        if remainder == 0.0 {
            break;
        }
        if text.len() == MAX_FRACTION_LEN {
            return FractionTooLongSnafu {
                value,
                max_digits: MAX_FRACTION_LEN - 2,
            }
            .fail();
        }
        place /= 2.0;
    }

    trace!("{value} is {text} in binary");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_exact_fractions() {
        assert_eq!(binary_fraction(0.75).unwrap(), "0.11");
        assert_eq!(binary_fraction(0.5).unwrap(), "0.1");
        assert_eq!(binary_fraction(0.25).unwrap(), "0.01");
        assert_eq!(binary_fraction(0.125).unwrap(), "0.001");
        assert_eq!(binary_fraction(0.0).unwrap(), "0.0");
    }

    #[test]
    fn test_longest_fraction() {
        let text = binary_fraction(2f64.powi(-30)).unwrap();
        assert_eq!(text.len(), MAX_FRACTION_LEN);
        assert!(text.ends_with("01"));
        assert!(matches!(
            binary_fraction(2f64.powi(-31)),
            Err(Error::FractionTooLong { max_digits: 30, .. })
        ));
    }

    #[test]
    fn test_inexact_fractions() {
        assert!(matches!(
            binary_fraction(0.72),
            Err(Error::FractionTooLong { .. })
        ));
        assert!(matches!(
            binary_fraction(0.1),
            Err(Error::FractionTooLong { .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        for value in [core::f64::consts::PI, 1.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    binary_fraction(value),
                    Err(Error::FractionOutOfRange { .. })
                ),
                "{value}"
            );
        }
        assert_eq!(
            binary_fraction(1.5).unwrap_err().to_string(),
            "1.5 is not in [0, 1)"
        );
    }
}
