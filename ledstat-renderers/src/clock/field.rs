//! Clock field tables and formatters
//!
//! The 4x8 clock grid is split into three column bands, one per field:
//!
//! ```text
//!  col  0  1  2 | 3  4  5 | 6  7
//!  row0 .  h  . | .  m  . | .  s
//!  row1 .  h  . | M  m  . | S  s
//!  row2 T  h  . | M  m  . | S  s
//!  row3 t  h  . | M  m  . | S  s
//! ```
//!
//! `T`/`t` light for twenty/ten hours, `h`, `m`, `s` are the 4-bit units
//! digits and `M`, `S` the 3-bit tens digits, most significant bit on top.
//! Cells marked `.` belong to a band but never light.

use ledstat_core::bcd::{bit_plane, decode_bit_plane, split_digits};
use ledstat_core::{Coord, Frame, DIM, LIT};

/// Clock grid columns
pub const CLOCK_WIDTH: usize = 8;

/// Clock grid rows
pub const CLOCK_HEIGHT: usize = 4;

/// One rendered clock picture or field layer
pub type ClockFrame = Frame<CLOCK_WIDTH, CLOCK_HEIGHT>;

/// Bits used by a units digit (0-9)
pub const UNITS_BITS: usize = 4;

/// Bits used by a minutes or seconds tens digit (0-5)
pub const TENS_BITS: usize = 3;

/// How a field shows its tens digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensEncoding {
    /// One pixel for "ten", another for "twenty"; both dim for zero
    TenTwenty { ten: Coord, twenty: Coord },
    /// Plain bit plane
    Bits([Coord; TENS_BITS]),
}

/// Pixel layout of one two-digit clock field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    /// First column owned by this field
    pub first_col: usize,
    /// One past the last column owned by this field
    pub end_col: usize,
    pub tens: TensEncoding,
    /// Units digit bits, most significant first
    pub units: [Coord; UNITS_BITS],
}

const fn column(col: usize, first_row: usize) -> [Coord; 3] {
    [
        Coord::new(first_row, col),
        Coord::new(first_row + 1, col),
        Coord::new(first_row + 2, col),
    ]
}

const fn full_column(col: usize) -> [Coord; UNITS_BITS] {
    [
        Coord::new(0, col),
        Coord::new(1, col),
        Coord::new(2, col),
        Coord::new(3, col),
    ]
}

/// Hours, 0-23
pub const HOURS: FieldMap = FieldMap {
    first_col: 0,
    end_col: 3,
    tens: TensEncoding::TenTwenty {
        ten: Coord::new(3, 0),
        twenty: Coord::new(2, 0),
    },
    units: full_column(1),
};

/// Minutes, 0-59
pub const MINUTES: FieldMap = FieldMap {
    first_col: 3,
    end_col: 6,
    tens: TensEncoding::Bits(column(3, 1)),
    units: full_column(4),
};

/// Seconds, 0-59
pub const SECONDS: FieldMap = FieldMap {
    first_col: 6,
    end_col: CLOCK_WIDTH,
    tens: TensEncoding::Bits(column(6, 1)),
    units: full_column(7),
};

/// All fields in the order they are composed
pub const FIELDS: [FieldMap; 3] = [HOURS, MINUTES, SECONDS];

impl FieldMap {
    /// Every cell this field owns, row by row
    pub fn region(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..CLOCK_HEIGHT)
            .flat_map(move |row| (self.first_col..self.end_col).map(move |col| Coord::new(row, col)))
    }

    /// True if `coord` is inside this field's band
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < CLOCK_HEIGHT && (self.first_col..self.end_col).contains(&coord.col)
    }

    /// Render `value` as a layer
    ///
    /// Every cell of the band is `DIM` or `LIT`; everything outside the
    /// band is left `UNSET` so the layer can be overlaid on the others.
    pub fn format(&self, value: u8) -> ClockFrame {
        let mut frame = ClockFrame::new();
        for coord in self.region() {
            frame.set(coord, DIM);
        }

        let (tens, units) = split_digits(value);
        match self.tens {
            TensEncoding::TenTwenty { ten, twenty } => match tens {
                2 => frame.set(twenty, LIT),
                1 => frame.set(ten, LIT),
                _ => {}
            },
            TensEncoding::Bits(coords) => light(&mut frame, &coords, bit_plane(tens)),
        }
        light(&mut frame, &self.units, bit_plane(units));

        frame
    }

    /// Read this field's value back out of a frame
    ///
    /// Returns `None` if the band holds anything but `DIM` and `LIT`, or if
    /// both the ten and twenty pixels are lit.
    pub fn decode(&self, frame: &ClockFrame) -> Option<u8> {
        let mut bits = [false; UNITS_BITS];
        for coord in self.region() {
            match frame.get(coord)? {
                DIM | LIT => {}
                _ => return None,
            }
        }

        let tens = match self.tens {
            TensEncoding::TenTwenty { ten, twenty } => {
                match (frame.get(ten)? == LIT, frame.get(twenty)? == LIT) {
                    (false, false) => 0,
                    (true, false) => 1,
                    (false, true) => 2,
                    (true, true) => return None,
                }
            }
            TensEncoding::Bits(coords) => {
                for (bit, coord) in bits.iter_mut().zip(coords.iter()) {
                    *bit = frame.get(*coord)? == LIT;
                }
                decode_bit_plane(&bits[..TENS_BITS])
            }
        };

        for (bit, coord) in bits.iter_mut().zip(self.units.iter()) {
            *bit = frame.get(*coord)? == LIT;
        }
        let units = decode_bit_plane(&bits);

        Some(tens * 10 + units)
    }
}

fn light<const N: usize>(frame: &mut ClockFrame, coords: &[Coord; N], bits: [bool; N]) {
    for (&coord, bit) in coords.iter().zip(bits) {
        frame.set(coord, if bit { LIT } else { DIM });
    }
}

/// Hours layer, 0-23
pub fn format_hours(hours: u8) -> ClockFrame {
    HOURS.format(hours)
}

/// Minutes layer, 0-59
pub fn format_minutes(minutes: u8) -> ClockFrame {
    MINUTES.format(minutes)
}

/// Seconds layer, 0-59
pub fn format_seconds(seconds: u8) -> ClockFrame {
    SECONDS.format(seconds)
}
