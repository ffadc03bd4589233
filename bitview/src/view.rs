//! Bit-indexed views over integral values.
//!
//! The free functions in this module are the primitive operations every other
//! part of the crate is built on. [`BitView`] and [`BitViewMut`] bundle them
//! around a borrowed value, and [`Bits`] iterates over a value's bits in either
//! direction.

use core::cell::Cell;
use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;

use crate::{Integral, RangeViolationSnafu, Result};

/// Returns the bit width of `T`.
///
/// ```
/// assert_eq!(bitview::width::<u8>(), 8);
/// assert_eq!(bitview::width::<i64>(), 64);
/// ```
#[inline(always)]
#[must_use]
pub const fn width<T: Integral>() -> u32 {
    T::WIDTH
}

/// Returns the number of non-sign bits of `T`.
#[inline(always)]
#[must_use]
pub const fn value_width<T: Integral>() -> u32 {
    T::VALUE_WIDTH
}

/// Returns the value of `T` with every even-indexed bit set.
#[inline(always)]
#[must_use]
pub const fn even_pattern<T: Integral>() -> T {
    T::EVEN_PATTERN
}

/// Returns the value of `T` with every odd-indexed bit set.
#[inline(always)]
#[must_use]
pub const fn odd_pattern<T: Integral>() -> T {
    T::ODD_PATTERN
}

/// Returns a value with bits `start..=end` set and all other bits clear.
///
/// Fails with [`Error::RangeViolation`](crate::Error::RangeViolation) unless
/// `start <= end < width::<T>()`.
///
/// ```
/// assert_eq!(bitview::mask::<u8>(2, 5)?, 0b0011_1100);
/// assert_eq!(bitview::mask::<u8>(0, 7)?, 0xff);
/// assert!(bitview::mask::<u8>(5, 2).is_err());
/// # Ok::<(), bitview::Error>(())
/// ```
pub fn mask<T: Integral>(start: u32, end: u32) -> Result<T> {
    if start > end || end >= T::WIDTH {
        return RangeViolationSnafu {
            start,
            end,
            width: T::WIDTH,
        }
        .fail();
    }
    Ok(mask_unchecked(start, end))
}

/// Returns a value with the lowest `len` bits set.
///
/// `len` may be anywhere in `0..=width::<T>()`.
pub(crate) fn low_bits<T: Integral>(len: u32) -> T {
    debug_assert!(len <= T::WIDTH);
    if len == 0 {
        T::zero()
    } else {
        mask_unchecked(0, len - 1)
    }
}

fn mask_unchecked<T: Integral>(start: u32, end: u32) -> T {
    let len = end - start + 1;
    T::ALL_ONES.unsigned_shr(T::WIDTH - len) << start as usize
}

fn check_index<T: Integral>(index: u32) -> Result<()> {
    if index < T::WIDTH {
        Ok(())
    } else {
        RangeViolationSnafu {
            start: index,
            end: index,
            width: T::WIDTH,
        }
        .fail()
    }
}

#[inline(always)]
fn read_bit<T: Integral>(value: T, index: u32) -> bool {
    value.unsigned_shr(index) & T::one() == T::one()
}

#[inline(always)]
fn write_bit<T: Integral>(value: T, index: u32, flag: bool) -> T {
    let bit = T::one() << index as usize;
    if flag {
        value | bit
    } else {
        value & !bit
    }
}

/// Returns the bit of `value` at `index`.
///
/// ```
/// assert!(bitview::bit_at(0b100u8, 2)?);
/// assert!(!bitview::bit_at(0b100u8, 1)?);
/// assert!(bitview::bit_at(0b100u8, 8).is_err());
/// # Ok::<(), bitview::Error>(())
/// ```
pub fn bit_at<T: Integral>(value: T, index: u32) -> Result<bool> {
    check_index::<T>(index)?;
    Ok(read_bit(value, index))
}

/// Returns `value` with the bit at `index` replaced by `flag`.
pub fn set_bit<T: Integral>(value: T, index: u32, flag: bool) -> Result<T> {
    check_index::<T>(index)?;
    Ok(write_bit(value, index, flag))
}

/// Returns the number of set bits in `value`.
#[inline(always)]
#[must_use]
pub fn count<T: Integral>(value: T) -> u32 {
    value.count_ones()
}

/// Returns an iterator over the bits of `value`, least significant first.
///
/// Use [`Iterator::rev`] to visit the most significant bit first.
pub fn bits<T: Integral>(value: T) -> Iter<T> {
    Bits::new(ByValue(value))
}

/// How a [`Bits`] iterator reads the bits of its value.
///
/// [`ByValue`] reads from a copy and yields plain `bool`s. [`ByCell`] reads
/// through a shared cell and yields writable [`BitRef`]s.
pub trait Access: Clone {
    /// The integral type being iterated.
    type Value: Integral;

    /// The item produced for each bit position.
    type Bit;

    /// Produces the item for the bit at `index`, which is always in range.
    fn bit(&self, index: u32) -> Self::Bit;
}

/// Read-only access to a copy of a value.
#[derive(Clone, Copy, Debug)]
pub struct ByValue<T>(T);

impl<T: Integral> Access for ByValue<T> {
    type Value = T;
    type Bit = bool;

    fn bit(&self, index: u32) -> bool {
        read_bit(self.0, index)
    }
}

/// Writable access to a value through a shared cell.
#[derive(Clone, Copy)]
pub struct ByCell<'a, T>(&'a Cell<T>);

impl<'a, T: Integral> Debug for ByCell<'a, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("ByCell").field(self.0).finish()
    }
}

impl<'a, T: Integral> Access for ByCell<'a, T> {
    type Value = T;
    type Bit = BitRef<'a, T>;

    fn bit(&self, index: u32) -> BitRef<'a, T> {
        BitRef {
            cell: self.0,
            index,
        }
    }
}

/// A double-ended iterator over the bit positions of an integral value.
///
/// Iteration runs from bit 0 towards the most significant bit; consuming from
/// the back runs the other way. Front and back meet in the middle, so every
/// position is produced exactly once. The iterator is `Clone`, and a clone
/// restarts from the clone's current position.
#[derive(Clone, Debug)]
pub struct Bits<A> {
    access: A,
    front: u32,
    back: u32,
}

/// Iterator over the bits of a value, yielding `bool`.
pub type Iter<T> = Bits<ByValue<T>>;

/// Iterator over the bits of a mutably borrowed value, yielding [`BitRef`].
pub type IterMut<'a, T> = Bits<ByCell<'a, T>>;

impl<A: Access> Bits<A> {
    fn new(access: A) -> Self {
        Self {
            access,
            front: 0,
            back: <A::Value as Integral>::WIDTH,
        }
    }
}

impl<A: Access> Iterator for Bits<A> {
    type Item = A::Bit;

    fn next(&mut self) -> Option<A::Bit> {
        if self.front == self.back {
            return None;
        }
        let bit = self.access.bit(self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back - self.front) as usize;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<A::Bit> {
        let remaining = self.back - self.front;
        self.front += u32::try_from(n).map_or(remaining, |n| n.min(remaining));
        self.next()
    }
}

impl<A: Access> DoubleEndedIterator for Bits<A> {
    fn next_back(&mut self) -> Option<A::Bit> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.access.bit(self.back))
    }
}

impl<A: Access> ExactSizeIterator for Bits<A> {}

impl<A: Access> FusedIterator for Bits<A> {}

/// A writable reference to a single bit of a borrowed value.
///
/// Any number of `BitRef`s to the same value may exist at once. Each write is
/// immediately visible to every other reference and to the owning
/// [`BitViewMut`].
#[derive(Clone, Copy)]
pub struct BitRef<'a, T> {
    cell: &'a Cell<T>,
    index: u32,
}

impl<'a, T: Integral> BitRef<'a, T> {
    /// The position of this bit.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Reads the bit.
    pub fn get(&self) -> bool {
        read_bit(self.cell.get(), self.index)
    }

    /// Overwrites the bit, leaving every other bit unchanged.
    pub fn set(&self, flag: bool) {
        self.cell.set(write_bit(self.cell.get(), self.index, flag));
    }

    /// Inverts the bit and returns its new state.
    pub fn toggle(&self) -> bool {
        let flag = !self.get();
        self.set(flag);
        flag
    }
}

impl<'a, T: Integral> Debug for BitRef<'a, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BitRef")
            .field("index", &self.index)
            .field("bit", &self.get())
            .finish()
    }
}

impl<'a, T: Integral> From<BitRef<'a, T>> for bool {
    fn from(value: BitRef<'a, T>) -> Self {
        value.get()
    }
}

/// A read-only view over the bits of a borrowed value.
///
/// ```
/// use bitview::BitView;
///
/// let value = 0b1011_0000u8;
/// let view = BitView::new(&value);
/// assert_eq!(view.count(), 3);
/// let msb_first: Vec<bool> = view.iter().rev().take(4).collect();
/// assert_eq!(msb_first, [true, false, true, true]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BitView<'a, T> {
    value: &'a T,
}

impl<'a, T: Integral> BitView<'a, T> {
    /// Creates a view over `value`.
    pub fn new(value: &'a T) -> Self {
        Self { value }
    }

    /// The number of bit positions in the view.
    pub const fn width(&self) -> u32 {
        T::WIDTH
    }

    /// Reads the bit at `index`.
    pub fn get(&self, index: u32) -> Result<bool> {
        bit_at(*self.value, index)
    }

    /// The number of set bits.
    pub fn count(&self) -> u32 {
        count(*self.value)
    }

    /// Iterates over the bits, least significant first.
    pub fn iter(&self) -> Iter<T> {
        bits(*self.value)
    }
}

impl<'a, T: Integral> IntoIterator for BitView<'a, T> {
    type Item = bool;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

/// A writable view over the bits of a mutably borrowed value.
///
/// The borrowed value is held through a [`Cell`], so the view hands out
/// [`BitRef`]s that may all write to it. Forward and reverse iterations over
/// the same view may be interleaved; each write is visible to every later
/// read. A view is `!Sync` and stays on the thread that created it.
///
/// ```
/// use bitview::BitViewMut;
///
/// let mut value = 0u8;
/// let view = BitViewMut::new(&mut value);
/// for bit in view.iter().step_by(2) {
///     bit.set(true);
/// }
/// assert_eq!(value, 0b0101_0101);
/// ```
#[derive(Clone, Copy)]
pub struct BitViewMut<'a, T> {
    cell: &'a Cell<T>,
}

impl<'a, T: Integral> BitViewMut<'a, T> {
    /// Creates a writable view over `value`.
    pub fn new(value: &'a mut T) -> Self {
        Self {
            cell: Cell::from_mut(value),
        }
    }

    /// The number of bit positions in the view.
    pub const fn width(&self) -> u32 {
        T::WIDTH
    }

    /// The current value.
    pub fn value(&self) -> T {
        self.cell.get()
    }

    /// Reads the bit at `index`.
    pub fn get(&self, index: u32) -> Result<bool> {
        bit_at(self.cell.get(), index)
    }

    /// Overwrites the bit at `index`.
    pub fn set(&self, index: u32, flag: bool) -> Result<()> {
        self.cell.set(set_bit(self.cell.get(), index, flag)?);
        Ok(())
    }

    /// Inverts the bit at `index` and returns its new state.
    pub fn toggle(&self, index: u32) -> Result<bool> {
        Ok(self.bit(index)?.toggle())
    }

    /// Returns a writable reference to the bit at `index`.
    pub fn bit(&self, index: u32) -> Result<BitRef<'a, T>> {
        check_index::<T>(index)?;
        Ok(ByCell(self.cell).bit(index))
    }

    /// The number of set bits.
    pub fn count(&self) -> u32 {
        count(self.cell.get())
    }

    /// Iterates over writable references to the bits, least significant
    /// first.
    pub fn iter(&self) -> IterMut<'a, T> {
        Bits::new(ByCell(self.cell))
    }
}

impl<'a, T: Integral> Debug for BitViewMut<'a, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BitViewMut")
            .field("value", &self.cell.get())
            .finish()
    }
}

impl<'a, T: Integral> IntoIterator for BitViewMut<'a, T> {
    type Item = BitRef<'a, T>;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter()
    }
}
