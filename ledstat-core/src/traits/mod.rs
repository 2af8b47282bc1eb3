//! Abstraction traits
//!
//! These traits define the interface between the renderers and the host
//! that samples system metrics and places pictures on the matrix.

pub mod metric;
pub mod picture;

pub use metric::{BatteryGauge, CpuLoad, EpochClock, FillLevel};
pub use picture::{pixels_from, Picture, Pixels, MAX_PICTURE_LEN};
