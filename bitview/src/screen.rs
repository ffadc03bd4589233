//! A monochrome screen packed eight pixels to a byte.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter, Write};

use log::trace;

use crate::{
    bits, mask, InvalidScreenWidthSnafu, PixelOutOfBoundsSnafu, RaggedCellsSnafu, Result,
    ReversedLineSnafu,
};

/// A monochrome screen of `width` by `height` pixels.
///
/// Pixels are stored row-major in `u8` cells, eight horizontal pixels per
/// cell, with the most significant bit of each cell holding the leftmost
/// pixel.
///
/// ```
/// use bitview::Screen;
///
/// let mut screen = Screen::new(16, 1)?;
/// screen.draw_horizontal_line(3, 12, 0)?;
/// assert_eq!(screen.cells(), [0b0001_1111, 0b1111_1000]);
/// # Ok::<(), bitview::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Screen {
    width: usize,
    cells: Vec<u8>,
}

impl Screen {
    /// Creates a blank screen.
    ///
    /// Fails with [`Error::InvalidScreenWidth`](crate::Error::InvalidScreenWidth)
    /// unless `width` is a positive multiple of 8.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_width(width)?;
        Ok(Self {
            width,
            cells: vec![0; width / 8 * height],
        })
    }

    /// Wraps existing cells laid out as described on [`Screen`].
    pub fn from_cells(width: usize, cells: Vec<u8>) -> Result<Self> {
        check_width(width)?;
        let stride = width / 8;
        if cells.len() % stride != 0 {
            return RaggedCellsSnafu {
                len: cells.len(),
                stride,
            }
            .fail();
        }
        Ok(Self { width, cells })
    }

    /// The width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height in pixels.
    pub fn height(&self) -> usize {
        self.cells.len() / self.stride()
    }

    /// The packed cells, row by row.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn stride(&self) -> usize {
        self.width / 8
    }

    /// Sets pixels `x1..=x2` of row `y`.
    pub fn draw_horizontal_line(&mut self, x1: usize, x2: usize, y: usize) -> Result<()> {
        for (x, y) in [(x1, y), (x2, y)] {
            if x >= self.width || y >= self.height() {
                return PixelOutOfBoundsSnafu { x, y }.fail();
            }
        }
        if x1 > x2 {
            return ReversedLineSnafu { x1, x2 }.fail();
        }

        trace!("drawing {x1}..={x2} on row {y}");
        let row = y * self.stride();
        let mut x = x1;
        while x <= x2 {
            // `p1..=p2` are the pixel offsets covered within this cell, counted
            // from the left.
            let p1 = (x & 7) as u32;
            let p2 = ((x | 7).min(x2) & 7) as u32;
            self.cells[row + (x >> 3)] |= mask::<u8>(7 - p2, 7 - p1)?;
            x = (x | 7) + 1;
        }
        Ok(())
    }
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 || width % 8 != 0 {
        InvalidScreenWidthSnafu { width }.fail()
    } else {
        Ok(())
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.stride()) {
            for &cell in row {
                for pixel in bits(cell).rev() {
                    f.write_char(if pixel { '\u{2588}' } else { '\u{2591}' })?;
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
