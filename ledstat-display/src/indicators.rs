//! Stock picture set

use ledstat_core::traits::{BatteryGauge, CpuLoad, EpochClock, Picture};
use ledstat_core::RendererMetadata;
use ledstat_renderers::{BatteryBar, ClockFace, CpuBar, BATTERY_METADATA, CLOCK_METADATA, CPU_METADATA};

use crate::canvas::PictureSet;

/// Clock, battery and CPU pictures, addressed as "time", "battery" and "cpu"
pub struct Indicators<C, B, U> {
    pub clock: ClockFace<C>,
    pub battery: BatteryBar<B>,
    pub cpu: CpuBar<U>,
}

impl<C: EpochClock, B: BatteryGauge, U: CpuLoad> Indicators<C, B, U> {
    pub fn new(clock: C, battery: B, cpu: U) -> Self {
        Self {
            clock: ClockFace::new(clock),
            battery: BatteryBar::new(battery),
            cpu: CpuBar::new(cpu),
        }
    }
}

impl<C: EpochClock, B: BatteryGauge, U: CpuLoad> PictureSet for Indicators<C, B, U> {
    fn metadata(&self, name: &str) -> Option<RendererMetadata> {
        [CLOCK_METADATA, BATTERY_METADATA, CPU_METADATA]
            .into_iter()
            .find(|m| m.name == name)
    }

    fn picture_mut(&mut self, name: &str) -> Option<&mut dyn Picture> {
        match name {
            "time" => Some(&mut self.clock),
            "battery" => Some(&mut self.battery),
            "cpu" => Some(&mut self.cpu),
            _ => None,
        }
    }
}
