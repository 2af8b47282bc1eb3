//! Indicator picture renderers
//!
//! This crate provides concrete implementations of the `Picture` trait
//! defined in ledstat-core:
//!
//! - Binary-coded-decimal clock (hours, minutes, seconds on a 4x8 grid)
//! - Battery charge bar (5x10)
//! - CPU load bar (2x10)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bar;
pub mod clock;

pub use bar::{fill_bar, BatteryBar, CpuBar, BATTERY_METADATA, CPU_METADATA};
pub use clock::{render_time, ClockFace, ClockFrame, ClockTime, CLOCK_METADATA};
