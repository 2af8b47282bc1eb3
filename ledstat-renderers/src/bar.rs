//! Bar-graph renderers
//!
//! Battery charge and CPU load are both shown as a vertical bar that fills
//! up from the bottom one row per tenth.

use ledstat_core::traits::{pixels_from, BatteryGauge, CpuLoad, FillLevel, Picture, Pixels};
use ledstat_core::{Coord, Frame, RendererMetadata, DIM, LIT};

/// Battery bar columns
pub const BATTERY_WIDTH: usize = 5;

/// Battery bar rows
pub const BATTERY_HEIGHT: usize = 10;

/// CPU bar columns
pub const CPU_WIDTH: usize = 2;

/// CPU bar rows
pub const CPU_HEIGHT: usize = 10;

/// Descriptor of the battery picture
pub const BATTERY_METADATA: RendererMetadata =
    RendererMetadata::new("battery", BATTERY_WIDTH, BATTERY_HEIGHT);

/// Descriptor of the CPU picture
pub const CPU_METADATA: RendererMetadata = RendererMetadata::new("cpu", CPU_WIDTH, CPU_HEIGHT);

pub type BatteryFrame = Frame<BATTERY_WIDTH, BATTERY_HEIGHT>;
pub type CpuFrame = Frame<CPU_WIDTH, CPU_HEIGHT>;

/// Render a bar filled to `level`
///
/// A row is lit when the level is greater than its index counted from the
/// bottom row, so level 0 is an all-dim bar and level `HEIGHT` a full one.
pub fn fill_bar<const WIDTH: usize, const HEIGHT: usize>(level: FillLevel) -> Frame<WIDTH, HEIGHT> {
    let mut frame = Frame::filled(DIM);
    let level = level.tenths() as usize;
    for row in 0..HEIGHT {
        let from_bottom = HEIGHT - 1 - row;
        if level > from_bottom {
            for col in 0..WIDTH {
                frame.set(Coord::new(row, col), LIT);
            }
        }
    }
    frame
}

/// Battery charge bar
pub struct BatteryBar<B> {
    gauge: B,
}

impl<B: BatteryGauge> BatteryBar<B> {
    pub fn new(gauge: B) -> Self {
        Self { gauge }
    }

    pub fn render(&mut self) -> BatteryFrame {
        fill_bar(FillLevel::from_fraction(self.gauge.state_of_charge()))
    }
}

impl<B: BatteryGauge> Picture for BatteryBar<B> {
    fn metadata(&self) -> RendererMetadata {
        BATTERY_METADATA
    }

    fn draw(&mut self) -> Pixels {
        pixels_from(&self.render())
    }
}

/// CPU load bar
pub struct CpuBar<C> {
    load: C,
}

impl<C: CpuLoad> CpuBar<C> {
    pub fn new(load: C) -> Self {
        Self { load }
    }

    pub fn render(&mut self) -> CpuFrame {
        fill_bar(FillLevel::from_percent(self.load.global_cpu_usage()))
    }
}

impl<C: CpuLoad> Picture for CpuBar<C> {
    fn metadata(&self) -> RendererMetadata {
        CPU_METADATA
    }

    fn draw(&mut self) -> Pixels {
        pixels_from(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    /// Walks the buffer backwards from the last cell, the way the bar
    /// pictures were first drawn
    fn reference_bar(percentile: i32, width: usize, height: usize) -> Vec<u8> {
        let len = width * height;
        let mut out = std::vec![0u8; len];
        for i in (0..len).rev() {
            let row = (i / width) as i32;
            out[len - 1 - i] = if percentile > row { LIT } else { DIM };
        }
        out
    }

    #[test]
    fn test_empty_and_full() {
        let empty: BatteryFrame = fill_bar(FillLevel::EMPTY);
        assert_eq!(empty, BatteryFrame::filled(DIM));

        let full: BatteryFrame = fill_bar(FillLevel::FULL);
        assert_eq!(full, BatteryFrame::filled(LIT));
    }

    #[test]
    fn test_fills_from_bottom() {
        let frame: CpuFrame = fill_bar(FillLevel::from_percent(30.0));
        let lit_rows: Vec<usize> = frame
            .rows()
            .enumerate()
            .filter(|(_, row)| row.iter().all(|&v| v == LIT))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(lit_rows, [7, 8, 9]);
        assert_eq!(frame.count(LIT), 3 * CPU_WIDTH);
        assert_eq!(frame.count(DIM), 7 * CPU_WIDTH);
    }

    #[test]
    fn test_battery_matches_reference() {
        for percent in 0..=100u8 {
            let charge = percent as f32 / 100.0;
            let mut bar = BatteryBar::new(|| charge);
            let percentile = FillLevel::from_fraction(charge).tenths() as i32;
            assert_eq!(
                bar.draw().as_slice(),
                reference_bar(percentile, BATTERY_WIDTH, BATTERY_HEIGHT).as_slice(),
                "charge {}",
                charge
            );
        }
    }

    #[test]
    fn test_cpu_matches_reference() {
        for usage in [0.0f32, 5.0, 10.0, 42.5, 99.9, 100.0] {
            let mut bar = CpuBar::new(|| usage);
            let percentile = (usage / 10.0) as i32;
            assert_eq!(
                bar.draw().as_slice(),
                reference_bar(percentile, CPU_WIDTH, CPU_HEIGHT).as_slice(),
                "usage {}",
                usage
            );
        }
    }

    #[test]
    fn test_battery_half() {
        let mut bar = BatteryBar::new(|| 0.5f32);
        let frame = bar.render();
        assert_eq!(frame.column(0), Some([DIM, DIM, DIM, DIM, DIM, LIT, LIT, LIT, LIT, LIT]));
    }

    #[test]
    fn test_metadata_matches_frames() {
        assert_eq!(BATTERY_METADATA.picture_len(), BatteryFrame::LEN);
        assert_eq!(CPU_METADATA.picture_len(), CpuFrame::LEN);
        assert_eq!(BatteryBar::new(|| 1.0f32).draw().len(), 50);
        assert_eq!(CpuBar::new(|| 1.0f32).draw().len(), 20);
    }
}
