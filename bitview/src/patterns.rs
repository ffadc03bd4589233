//! Bit pattern algorithms built on the primitives in [`view`](crate::view).

use log::trace;

use crate::view::low_bits;
use crate::{
    bits, count, mask, value_width, Direction, Integral, InvalidInputSnafu, NoSuchValueSnafu,
    Result,
};

/// Replaces bits `i..=j` of `n` with the low `j - i + 1` bits of `m`.
///
/// Fails with [`Error::RangeViolation`](crate::Error::RangeViolation) unless
/// `i <= j < width::<T>()`.
///
/// ```
/// use bitview::insert_bit_pattern;
///
/// assert_eq!(insert_bit_pattern(0b100_0000_0000u32, 0b10011, 2, 6)?, 0b100_0100_1100);
/// # Ok::<(), bitview::Error>(())
/// ```
pub fn insert_bit_pattern<T: Integral>(n: T, m: T, i: u32, j: u32) -> Result<T> {
    let mask = mask::<T>(i, j)?;
    Ok((n & !mask) | ((m << i as usize) & mask))
}

/// Returns the smallest value greater than `value` with the same number of
/// set bits.
///
/// Only the value bits of `T` take part; the sign bit of a signed type is
/// never set. Fails with [`Error::InvalidInput`](crate::Error::InvalidInput)
/// if `value` is not positive, and with
/// [`Error::NoSuchValue`](crate::Error::NoSuchValue) if the set bits are
/// already packed against the top of the value bits.
///
/// ```
/// use bitview::get_binary_greater;
///
/// assert_eq!(get_binary_greater(0b0110u8)?, 0b1001);
/// assert!(get_binary_greater(u8::MAX).is_err());
/// # Ok::<(), bitview::Error>(())
/// ```
pub fn get_binary_greater<T: Integral>(value: T) -> Result<T> {
    ensure_positive(value)?;

    let mut first_set = None;
    for (i, bit) in (0..T::VALUE_WIDTH).zip(bits(value)) {
        match (first_set, bit) {
            (None, true) => first_set = Some(i),
            (Some(first), false) => {
                // Bit `i` is the first clear bit above a run of ones starting at
                // `first`. Move one of the ones up into it and pack the rest at
                // the bottom.
                let run = i - first;
                let result =
                    (value & !low_bits::<T>(i)) | (T::one() << i as usize) | low_bits(run - 1);
                trace!("next greater of {value:#b} is {result:#b}");
                return Ok(result);
            }
            _ => {}
        }
    }

    NoSuchValueSnafu {
        direction: Direction::Greater,
        width: value_width::<T>(),
    }
    .fail()
}

/// Returns the largest value less than `value` with the same number of set
/// bits.
///
/// Fails with [`Error::InvalidInput`](crate::Error::InvalidInput) if `value`
/// is not positive, and with [`Error::NoSuchValue`](crate::Error::NoSuchValue)
/// if `value` has the form `2^k - 1`.
///
/// ```
/// use bitview::get_binary_lesser;
///
/// assert_eq!(get_binary_lesser(0b1001u8)?, 0b0110);
/// assert!(get_binary_lesser(0b0111u8).is_err());
/// # Ok::<(), bitview::Error>(())
/// ```
pub fn get_binary_lesser<T: Integral>(value: T) -> Result<T> {
    ensure_positive(value)?;

    let mut first_clear = None;
    for (i, bit) in (0..T::VALUE_WIDTH).zip(bits(value)) {
        match (first_clear, bit) {
            (None, false) => first_clear = Some(i),
            (Some(ones), true) => {
                // `ones` trailing ones sit below the clear bit. Move bit `i`
                // down by one and pack the trailing ones directly beneath it.
                let upper = value & !low_bits::<T>(i + 1);
                let packed = low_bits::<T>(ones) << (i - 1 - ones) as usize;
                let result = upper | (T::one() << (i - 1) as usize) | packed;
                trace!("next lesser of {value:#b} is {result:#b}");
                return Ok(result);
            }
            _ => {}
        }
    }

    NoSuchValueSnafu {
        direction: Direction::Lesser,
        width: value_width::<T>(),
    }
    .fail()
}

fn ensure_positive<T: Integral>(value: T) -> Result<()> {
    if value > T::zero() {
        Ok(())
    } else {
        InvalidInputSnafu.fail()
    }
}

/// Returns the number of bit positions at which `a` and `b` differ.
///
/// ```
/// assert_eq!(bitview::get_hamming_distance(0b11101, 0b01111), 2);
/// ```
#[must_use]
pub fn get_hamming_distance<T: Integral>(a: T, b: T) -> u32 {
    count(a ^ b)
}

/// Exchanges every even-indexed bit with the odd-indexed bit above it.
///
/// Applying the swap twice returns the original value.
///
/// ```
/// assert_eq!(bitview::swap_even_with_odd_bits(0b1010_1010u8), 0b0101_0101);
/// ```
#[must_use]
pub fn swap_even_with_odd_bits<T: Integral>(value: T) -> T {
    ((value << 1) & T::ODD_PATTERN) | (value.unsigned_shr(1) & T::EVEN_PATTERN)
}

/// Exchanges two values in place without a temporary.
pub fn xor_swap<T: Integral>(a: &mut T, b: &mut T) {
    *a = *a ^ *b;
    *b = *b ^ *a;
    *a = *a ^ *b;
}
