use core::fmt::{Binary, Debug, Display};
use core::hash::Hash;

use num_traits::PrimInt;

use crate::sealed::Sealed;

/// Primitive integer types that can be viewed as a fixed-width sequence of
/// bits.
///
/// There is one implementation for each of the primitive signed and unsigned
/// integer types, including the pointer-sized ones. The trait is sealed, so
/// generic code bounded by `Integral` only ever sees a machine integer.
///
/// ```compile_fail
/// // Floating point values are not integral.
/// let _ = bitview::width::<f32>();
/// ```
pub trait Integral: PrimInt + Binary + Debug + Display + Hash + Default + Sealed {
    /// The bit width of this type.
    const WIDTH: u32;

    /// The number of bits that carry magnitude.
    ///
    /// Equal to [`WIDTH`](Self::WIDTH) for unsigned types and one less for
    /// signed types, whose most significant bit is the sign.
    const VALUE_WIDTH: u32;

    /// Whether the most significant bit of this type is a sign bit.
    const SIGNED: bool;

    /// All even-indexed bits (0, 2, 4, ...) set, `0x55` for `u8`.
    ///
    /// Patterns are named by the zero-based index of their bits. Counting
    /// positions from one instead swaps the names, so this is sometimes
    /// called the odd pattern.
    const EVEN_PATTERN: Self;

    /// All odd-indexed bits (1, 3, 5, ...) set, `0xaa` for `u8`.
    ///
    /// See [`EVEN_PATTERN`](Self::EVEN_PATTERN) for the naming.
    const ODD_PATTERN: Self;

    /// The value with every bit set.
    const ALL_ONES: Self;

    /// Zero-extends the raw bits of this value to 128 bits.
    ///
    /// Signed values are reinterpreted as their unsigned counterpart first, so
    /// `-1i8` becomes `0xff`.
    fn to_raw_bits(self) -> u128;
}

macro_rules! impl_integral {
    (unsigned: $($ty:ident),*) => {$(
        impl Sealed for $ty {}

        impl Integral for $ty {
            const WIDTH: u32 = $ty::BITS;
            const VALUE_WIDTH: u32 = $ty::BITS;
            const SIGNED: bool = false;
            const EVEN_PATTERN: Self = $ty::MAX / 3;
            const ODD_PATTERN: Self = ($ty::MAX / 3) << 1;
            const ALL_ONES: Self = $ty::MAX;

            #[inline(always)]
            fn to_raw_bits(self) -> u128 {
                self as u128
            }
        }
    )*};
    (signed: $($ty:ident as $unsigned:ident),*) => {$(
        impl Sealed for $ty {}

        impl Integral for $ty {
            const WIDTH: u32 = $ty::BITS;
            const VALUE_WIDTH: u32 = $ty::BITS - 1;
            const SIGNED: bool = true;
            const EVEN_PATTERN: Self = ($unsigned::MAX / 3) as $ty;
            const ODD_PATTERN: Self = (($unsigned::MAX / 3) << 1) as $ty;
            const ALL_ONES: Self = -1;

            #[inline(always)]
            fn to_raw_bits(self) -> u128 {
                self as $unsigned as u128
            }
        }
    )*};
}

impl_integral!(unsigned: u8, u16, u32, u64, u128, usize);
impl_integral!(signed: i8 as u8, i16 as u16, i32 as u32, i64 as u64, i128 as u128, isize as usize);

#[cfg(test)]
mod tests {
    use super::Integral;

    #[test]
    fn test_widths() {
        assert_eq!(u8::WIDTH, 8);
        assert_eq!(i16::WIDTH, 16);
        assert_eq!(u32::WIDTH, 32);
        assert_eq!(i64::WIDTH, 64);
        assert_eq!(u128::WIDTH, 128);
        assert_eq!(usize::WIDTH, usize::BITS);
    }

    #[test]
    fn test_value_widths() {
        assert_eq!(u8::VALUE_WIDTH, 8);
        assert_eq!(i8::VALUE_WIDTH, 7);
        assert_eq!(i32::VALUE_WIDTH, 31);
        assert_eq!(u64::VALUE_WIDTH, 64);
    }

    #[test]
    fn test_patterns() {
        assert_eq!(u8::EVEN_PATTERN, 0b0101_0101);
        assert_eq!(u8::ODD_PATTERN, 0b1010_1010);
        assert_eq!(u32::EVEN_PATTERN, 0x5555_5555);
        assert_eq!(u32::ODD_PATTERN, 0xaaaa_aaaa);
        assert_eq!(i8::EVEN_PATTERN, 0b0101_0101);
        assert_eq!(i8::ODD_PATTERN as u8, 0b1010_1010);
        assert_eq!(i64::ODD_PATTERN as u64, 0xaaaa_aaaa_aaaa_aaaa);
    }

    #[test]
    fn test_to_raw_bits() {
        assert_eq!(200u8.to_raw_bits(), 200);
        assert_eq!((-1i8).to_raw_bits(), 0xff);
        assert_eq!(i32::MIN.to_raw_bits(), 0x8000_0000);
        assert_eq!(u128::MAX.to_raw_bits(), u128::MAX);
    }

    #[test]
    fn test_patterns_partition_all_bits() {
        assert_eq!(u16::EVEN_PATTERN | u16::ODD_PATTERN, u16::ALL_ONES);
        assert_eq!(u16::EVEN_PATTERN & u16::ODD_PATTERN, 0);
        assert_eq!(i128::EVEN_PATTERN | i128::ODD_PATTERN, i128::ALL_ONES);
        assert_eq!(i128::EVEN_PATTERN & i128::ODD_PATTERN, 0);
    }
}
