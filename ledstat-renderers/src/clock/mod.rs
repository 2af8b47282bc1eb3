//! Binary-coded-decimal clock
//!
//! Shows UTC `hh:mm:ss` on a 4x8 grid. Each field is rendered as its own
//! layer, then the three layers are merged into a single picture.

pub mod field;

use ledstat_core::traits::{pixels_from, EpochClock, Picture, Pixels};
use ledstat_core::{compose, RendererMetadata};

pub use field::{
    format_hours, format_minutes, format_seconds, ClockFrame, FieldMap, TensEncoding,
    CLOCK_HEIGHT, CLOCK_WIDTH, FIELDS, HOURS, MINUTES, SECONDS,
};

/// Descriptor of the clock picture
pub const CLOCK_METADATA: RendererMetadata =
    RendererMetadata::new("time", CLOCK_WIDTH, CLOCK_HEIGHT);

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Time of day, UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl ClockTime {
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Time of day for a Unix timestamp
    pub const fn from_epoch_secs(epoch_secs: u64) -> Self {
        let secs = epoch_secs % SECS_PER_DAY;
        Self {
            hours: (secs / SECS_PER_HOUR) as u8,
            minutes: (secs % SECS_PER_HOUR / SECS_PER_MINUTE) as u8,
            seconds: (secs % SECS_PER_MINUTE) as u8,
        }
    }

    /// Read a rendered clock picture back
    pub fn decode(frame: &ClockFrame) -> Option<Self> {
        Some(Self {
            hours: HOURS.decode(frame)?,
            minutes: MINUTES.decode(frame)?,
            seconds: SECONDS.decode(frame)?,
        })
    }
}

/// Render one clock picture
///
/// Hours, minutes and seconds are rendered separately and overlaid in that
/// order. The bands cover the whole grid, so every cell ends up `DIM` or
/// `LIT`.
pub fn render_time(time: ClockTime) -> ClockFrame {
    compose(&[
        format_hours(time.hours),
        format_minutes(time.minutes),
        format_seconds(time.seconds),
    ])
}

/// Clock picture driven by a wall clock
pub struct ClockFace<C> {
    clock: C,
}

impl<C: EpochClock> ClockFace<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Sample the clock and render
    pub fn render(&mut self) -> ClockFrame {
        render_time(ClockTime::from_epoch_secs(self.clock.epoch_secs()))
    }

    /// Get access to the underlying clock
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: EpochClock> Picture for ClockFace<C> {
    fn metadata(&self) -> RendererMetadata {
        CLOCK_METADATA
    }

    fn draw(&mut self) -> Pixels {
        pixels_from(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledstat_core::{Coord, DIM, LIT, UNSET};
    use proptest::prelude::*;

    fn lit_count(frame: &ClockFrame, coords: &[Coord]) -> usize {
        coords.iter().filter(|&&c| frame.get(c) == Some(LIT)).count()
    }

    #[test]
    fn test_from_epoch_secs() {
        assert_eq!(ClockTime::from_epoch_secs(0), ClockTime::new(0, 0, 0));
        assert_eq!(ClockTime::from_epoch_secs(86_399), ClockTime::new(23, 59, 59));
        assert_eq!(ClockTime::from_epoch_secs(86_400), ClockTime::new(0, 0, 0));
        // 2024-03-01T09:05:00Z
        assert_eq!(
            ClockTime::from_epoch_secs(1_709_283_900),
            ClockTime::new(9, 5, 0)
        );
    }

    #[test]
    fn test_midnight_is_all_dim() {
        let frame = render_time(ClockTime::from_epoch_secs(0));
        assert_eq!(frame, ClockFrame::filled(DIM));
    }

    #[test]
    fn test_end_of_day() {
        let frame = render_time(ClockTime::from_epoch_secs(86_399));

        // Twenty lit, ten dim
        assert_eq!(frame.get(Coord::new(2, 0)), Some(LIT));
        assert_eq!(frame.get(Coord::new(3, 0)), Some(DIM));
        // Hours units 3 = 0011
        assert_eq!(frame.column(1), Some([DIM, DIM, LIT, LIT]));
        // Minutes tens 5 = 101, units 9 = 1001
        assert_eq!(frame.column(3), Some([DIM, LIT, DIM, LIT]));
        assert_eq!(frame.column(4), Some([LIT, DIM, DIM, LIT]));
        // Seconds the same
        assert_eq!(frame.column(6), Some([DIM, LIT, DIM, LIT]));
        assert_eq!(frame.column(7), Some([LIT, DIM, DIM, LIT]));
        // Separators
        assert_eq!(frame.column(2), Some([DIM; 4]));
        assert_eq!(frame.column(5), Some([DIM; 4]));
    }

    #[test]
    fn test_nine_oh_five() {
        let frame = render_time(ClockTime::new(9, 5, 0));

        assert_eq!(lit_count(&frame, &[Coord::new(2, 0), Coord::new(3, 0)]), 0);
        // Hours units 9 = 1001
        assert_eq!(frame.column(1), Some([LIT, DIM, DIM, LIT]));
        // Minutes tens 0 = 000, units 5 = 0101
        assert_eq!(frame.column(3), Some([DIM; 4]));
        assert_eq!(frame.column(4), Some([DIM, LIT, DIM, LIT]));
        // Seconds all dim
        assert_eq!(frame.column(6), Some([DIM; 4]));
        assert_eq!(frame.column(7), Some([DIM; 4]));
    }

    #[test]
    fn test_output_bytes_row_major() {
        let mut face = ClockFace::new(|| 86_399u64);
        let pixels = face.draw();
        assert_eq!(pixels.len(), CLOCK_METADATA.picture_len());
        assert_eq!(pixels.len(), 32);
        // Row 2 col 0 is the twenty-hours pixel
        assert_eq!(pixels[2 * CLOCK_WIDTH], LIT);
        assert_eq!(pixels[3 * CLOCK_WIDTH], DIM);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut face = ClockFace::new(|| 1_700_000_000u64);
        let first = face.draw();
        let second = face.draw();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unset_layer_cells_do_not_erase() {
        let hours = format_hours(23);
        let minutes = format_minutes(59);
        let seconds = format_seconds(59);

        // A malformed layer with stray zeros inside the hours band
        let mut malformed = seconds;
        for coord in HOURS.region() {
            malformed.set(coord, UNSET);
        }

        let frame = compose(&[hours, minutes, malformed]);
        assert_eq!(frame, render_time(ClockTime::new(23, 59, 59)));
    }

    #[test]
    fn test_metadata_matches_frame() {
        assert_eq!(CLOCK_METADATA.name, "time");
        assert_eq!(CLOCK_METADATA.picture_len(), ClockFrame::LEN);
    }

    proptest! {
        #[test]
        fn prop_every_cell_dim_or_lit(epoch in any::<u64>()) {
            let time = ClockTime::from_epoch_secs(epoch);
            prop_assert!(!format_hours(time.hours).is_fully_set());
            let frame = render_time(time);
            prop_assert!(frame.is_fully_set());
            prop_assert!(frame.as_bytes().iter().all(|&v| v == DIM || v == LIT));
        }

        #[test]
        fn prop_frame_reads_back(epoch in any::<u64>()) {
            let time = ClockTime::from_epoch_secs(epoch);
            prop_assert_eq!(ClockTime::decode(&render_time(time)), Some(time));
        }

        #[test]
        fn prop_time_of_day_only(day in 0u64..100_000, secs in 0u64..86_400) {
            let a = render_time(ClockTime::from_epoch_secs(secs));
            let b = render_time(ClockTime::from_epoch_secs(day * 86_400 + secs));
            prop_assert_eq!(a, b);
        }
    }
}
