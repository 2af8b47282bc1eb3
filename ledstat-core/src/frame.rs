//! Fixed-size pixel frames
//!
//! A frame is a row-major grid of per-pixel brightness values. Frames are
//! plain arrays sized at compile time, so rendering never allocates.

/// Brightness of a lit pixel
pub const LIT: u8 = 255;

/// Brightness of a pixel that is part of a picture but switched off
pub const DIM: u8 = 10;

/// Value of a cell nothing has written to yet
///
/// Only valid inside partially built frames; finished pictures never
/// contain it.
pub const UNSET: u8 = 0;

/// Pixel coordinate, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset of this coordinate in a row-major buffer `width` cells wide
    pub const fn index(self, width: usize) -> usize {
        self.row * width + self.col
    }
}

/// Row-major grid of `HEIGHT` rows by `WIDTH` columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<const WIDTH: usize, const HEIGHT: usize> {
    cells: [[u8; WIDTH]; HEIGHT],
}

impl<const WIDTH: usize, const HEIGHT: usize> Default for Frame<WIDTH, HEIGHT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const WIDTH: usize, const HEIGHT: usize> Frame<WIDTH, HEIGHT> {
    /// Total number of cells
    pub const LEN: usize = WIDTH * HEIGHT;

    /// Create a frame with every cell `UNSET`
    pub const fn new() -> Self {
        Self::filled(UNSET)
    }

    /// Create a frame with every cell set to `value`
    pub const fn filled(value: u8) -> Self {
        Self {
            cells: [[value; WIDTH]; HEIGHT],
        }
    }

    /// Read a cell, `None` outside the grid
    pub fn get(&self, coord: Coord) -> Option<u8> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    /// Write a cell; writes outside the grid are ignored
    pub fn set(&mut self, coord: Coord, value: u8) {
        if let Some(cell) = self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
        {
            *cell = value;
        }
    }

    /// Row-major view, index = `row * WIDTH + col`
    pub fn as_bytes(&self) -> &[u8] {
        self.cells.as_flattened()
    }

    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[u8; WIDTH]> {
        self.cells.iter()
    }

    /// Copy out one column, top to bottom
    pub fn column(&self, col: usize) -> Option<[u8; HEIGHT]> {
        if col >= WIDTH {
            return None;
        }
        Some(core::array::from_fn(|row| self.cells[row][col]))
    }

    /// Merge `other` into this frame
    ///
    /// A cell is only overwritten when the incoming value is non-zero, so
    /// cells another layer never wrote cannot erase what is already here.
    pub fn overlay(&mut self, other: &Self) {
        for (dst_row, src_row) in self.cells.iter_mut().zip(other.cells.iter()) {
            for (dst, &src) in dst_row.iter_mut().zip(src_row.iter()) {
                if src > UNSET {
                    *dst = src;
                }
            }
        }
    }

    /// True when no cell is `UNSET`
    pub fn is_fully_set(&self) -> bool {
        self.as_bytes().iter().all(|&v| v != UNSET)
    }

    /// Number of cells holding exactly `value`
    pub fn count(&self, value: u8) -> usize {
        self.as_bytes().iter().filter(|&&v| v == value).count()
    }
}

/// Build a fresh frame by overlaying `layers` in order
pub fn compose<const WIDTH: usize, const HEIGHT: usize>(
    layers: &[Frame<WIDTH, HEIGHT>],
) -> Frame<WIDTH, HEIGHT> {
    let mut out = Frame::new();
    for layer in layers {
        out.overlay(layer);
    }
    out
}

#[cfg(feature = "defmt")]
impl<const WIDTH: usize, const HEIGHT: usize> defmt::Format for Frame<WIDTH, HEIGHT> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Frame{}x{}[", WIDTH, HEIGHT);
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{=[u8]}", &row[..]);
        }
        defmt::write!(f, "]");
    }
}
