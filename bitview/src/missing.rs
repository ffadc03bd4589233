//! Finding the one element missing from a sequence `0..=n`.

use log::debug;
use num_traits::Unsigned;

use crate::{
    bits, BitViewMut, InconsistentSnafu, Integral, OutOfSequenceSnafu, Result,
    SequenceTooLongSnafu,
};

/// Returns the one element of `0..=n` absent from `sequence`, where `n` is
/// `sequence.len()`.
///
/// Each bit position below the bit length of `n` gets a vote counter: `+1` for
/// every element with that bit set and `-1` for every element with it clear.
/// The complete range `0..=n` has a known net count at every position, and the
/// observed counter differs from it by exactly one vote, whose sign is the
/// missing element's bit. This takes `O(n log n)` time and a fixed number of
/// counters, without sorting or allocating.
///
/// The input is validated by rejecting elements above `n` and by re-scanning
/// for the reconstructed element, so malformed input fails with
/// [`Error::OutOfSequence`](crate::Error::OutOfSequence) or
/// [`Error::Inconsistent`](crate::Error::Inconsistent) instead of producing a
/// wrong answer.
///
/// ```
/// use bitview::find_missing_element;
///
/// assert_eq!(find_missing_element(&[3u32, 0, 4, 1])?, 2);
/// assert_eq!(find_missing_element::<u8>(&[])?, 0);
/// # Ok::<(), bitview::Error>(())
/// ```
pub fn find_missing_element<T: Integral + Unsigned>(sequence: &[T]) -> Result<T> {
    let n = sequence.len() as u128;
    let positions = u128::BITS - n.leading_zeros();
    if positions > T::WIDTH {
        return SequenceTooLongSnafu {
            len: sequence.len(),
            width: T::WIDTH,
        }
        .fail();
    }

    let mut votes = [0i64; 128];
    let votes = &mut votes[..positions as usize];
    for &element in sequence {
        if element.to_raw_bits() > n {
            return OutOfSequenceSnafu {
                value: element.to_raw_bits(),
                n,
            }
            .fail();
        }
        for (vote, bit) in votes.iter_mut().zip(bits(element)) {
            *vote += if bit { 1 } else { -1 };
        }
    }

    let mut missing = T::zero();
    let view = BitViewMut::new(&mut missing);
    for (j, &vote) in (0..positions).zip(votes.iter()) {
        // Count the zeros and ones at position `j` across `0..=n`. Whole
        // periods of `2^(j + 1)` contribute equally to both.
        let remainder = match 1u128.checked_shl(j + 1) {
            Some(period) => (n + 1) % period,
            None => n + 1,
        };
        let zeros = remainder.min(1 << j);
        let ones = remainder - zeros;
        match i128::from(vote) + zeros as i128 - ones as i128 {
            -1 => view.set(j, true)?,
            1 => {}
            _ => return InconsistentSnafu { n }.fail(),
        }
    }

    if missing.to_raw_bits() > n || sequence.contains(&missing) {
        return InconsistentSnafu { n }.fail();
    }

    debug!("found missing element {missing} among {n} elements");
    Ok(missing)
}
