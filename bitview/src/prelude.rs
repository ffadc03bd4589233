//! Convenience re-exports.

#[doc(no_inline)]
pub use crate::{
    binary_fraction, bit_at, bits, count, even_pattern, find_missing_element, get_binary_greater,
    get_binary_lesser, get_hamming_distance, insert_bit_pattern, mask, odd_pattern, set_bit,
    swap_even_with_odd_bits, value_width, width, xor_swap, BitRef, BitView, BitViewMut, Direction,
    Error, Integral, Screen,
};
