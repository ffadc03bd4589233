#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc = include_str!("../README.md")]

extern crate alloc;

use core::fmt::{self, Display, Formatter};

use snafu::Snafu;

pub mod fraction;
pub mod missing;
pub mod patterns;
pub mod prelude;
pub mod screen;
mod traits;
pub mod view;

mod sealed {
    pub trait Sealed {}
}

/// Which neighbor an equal-population search was looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The next greater value.
    Greater,
    /// The next lesser value.
    Lesser,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Greater => write!(f, "greater"),
            Self::Lesser => write!(f, "lesser"),
        }
    }
}

/// The error type for every fallible operation in this crate.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// An equal-population search was given zero or a negative value.
    #[snafu(display("input must be positive"))]
    InvalidInput,

    /// No value with the same population count exists in the requested
    /// direction.
    #[snafu(display("no {direction} value with the same number of set bits fits in {width} bits"))]
    NoSuchValue {
        /// The direction of the search.
        direction: Direction,
        /// The number of value bits that were searched.
        width: u32,
    },

    /// A bit index or bit range fell outside the integer's width, or the
    /// range was reversed. A single index is reported with `start == end`.
    #[snafu(display("bit range {start}..={end} is invalid for a {width}-bit integer"))]
    RangeViolation {
        /// First bit of the range.
        start: u32,
        /// Last bit of the range, inclusive.
        end: u32,
        /// Width of the integer type.
        width: u32,
    },

    /// A sequence element was larger than the sequence length allows.
    #[snafu(display("element {value} is outside the sequence 0..={n}"))]
    OutOfSequence {
        /// The offending element.
        value: u128,
        /// The largest element the sequence may hold.
        n: u128,
    },

    /// A sequence did not hold every element of `0..=n` but one.
    #[snafu(display("sequence is not 0..={n} with exactly one element missing"))]
    Inconsistent {
        /// The largest element the sequence may hold.
        n: u128,
    },

    /// A sequence was too long for its element type to be missing an element.
    #[snafu(display("{len} elements cannot be missing a value of a {width}-bit integer"))]
    SequenceTooLong {
        /// The length of the sequence.
        len: usize,
        /// Width of the element type.
        width: u32,
    },

    /// A screen width was zero or not a multiple of 8.
    #[snafu(display("screen width {width} is not a positive multiple of 8"))]
    InvalidScreenWidth {
        /// The rejected width.
        width: usize,
    },

    /// A screen's cells do not divide into whole rows.
    #[snafu(display("{len} cells do not form whole rows of {stride} cells"))]
    RaggedCells {
        /// The number of cells provided.
        len: usize,
        /// The number of cells per row.
        stride: usize,
    },

    /// A pixel coordinate fell outside the screen.
    #[snafu(display("pixel ({x}, {y}) is outside the screen"))]
    PixelOutOfBounds {
        /// Horizontal coordinate.
        x: usize,
        /// Vertical coordinate.
        y: usize,
    },

    /// A horizontal line's start was to the right of its end.
    #[snafu(display("line start {x1} is after line end {x2}"))]
    ReversedLine {
        /// Start coordinate.
        x1: usize,
        /// End coordinate.
        x2: usize,
    },

    /// A value to be written as a binary fraction was not in `[0, 1)`.
    #[snafu(display("{value} is not in [0, 1)"))]
    FractionOutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// A binary fraction needed more digits than allowed.
    #[snafu(display("{value} needs more than {max_digits} binary digits"))]
    FractionTooLong {
        /// The rejected value.
        value: f64,
        /// The number of digits allowed after the binary point.
        max_digits: usize,
    },
}

/// A specialized [`Result`](core::result::Result) type for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

pub use fraction::binary_fraction;
pub use missing::find_missing_element;
pub use patterns::{
    get_binary_greater, get_binary_lesser, get_hamming_distance, insert_bit_pattern,
    swap_even_with_odd_bits, xor_swap,
};
pub use screen::Screen;
pub use traits::*;
pub use view::{
    bit_at, bits, count, even_pattern, mask, odd_pattern, set_bit, value_width, width, BitRef,
    BitView, BitViewMut, Bits,
};
