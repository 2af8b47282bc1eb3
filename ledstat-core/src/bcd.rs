//! Binary-coded-decimal helpers
//!
//! A two-digit field (hours, minutes, seconds) is split into its decimal
//! digits, and each digit is expanded into a fixed-width bit plane that maps
//! one bit onto one pixel.

/// Decimal radix used for digit decomposition
pub const RADIX: u8 = 10;

/// Split a two-digit value into `(tens, units)`
///
/// No range check is done; callers pass values below 100.
pub const fn split_digits(value: u8) -> (u8, u8) {
    (value / RADIX, value % RADIX)
}

/// Expand `digit` into `W` bits, most significant bit first
///
/// Digits shorter than `W` bits are padded with leading zeros. Bits above
/// `W` cannot be represented and are dropped.
pub fn bit_plane<const W: usize>(digit: u8) -> [bool; W] {
    core::array::from_fn(|i| {
        let shift = W - 1 - i;
        shift < u8::BITS as usize && (digit >> shift) & 1 == 1
    })
}

/// Read a bit plane back as a number, most significant bit first
pub fn decode_bit_plane(bits: &[bool]) -> u8 {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | bit as u8)
}
