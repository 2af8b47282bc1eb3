//! Metric source traits
//!
//! The host owns the actual system queries (battery driver, CPU statistics,
//! wall clock). Renderers only see these traits. Each query is expected to
//! be cheap and non-blocking.
//!
//! The two percentage-style inputs arrive in different units: battery
//! charge is a fraction in `[0, 1]` while CPU usage is a percentage in
//! `[0, 100]`. Both are converted to a [`FillLevel`] before rendering, so
//! the units only matter at this boundary.

/// Wall clock
pub trait EpochClock {
    /// Seconds since the Unix epoch, UTC
    fn epoch_secs(&mut self) -> u64;
}

/// Battery state of charge
pub trait BatteryGauge {
    /// Charge as a fraction, `0.0` empty to `1.0` full
    fn state_of_charge(&mut self) -> f32;
}

/// Global processor load
pub trait CpuLoad {
    /// Usage across all cores as a percentage, `0.0` to `100.0`
    fn global_cpu_usage(&mut self) -> f32;
}

impl<F: FnMut() -> u64> EpochClock for F {
    fn epoch_secs(&mut self) -> u64 {
        self()
    }
}

impl<F: FnMut() -> f32> BatteryGauge for F {
    fn state_of_charge(&mut self) -> f32 {
        self()
    }
}

impl<F: FnMut() -> f32> CpuLoad for F {
    fn global_cpu_usage(&mut self) -> f32 {
        self()
    }
}

/// Normalized bar fill, in tenths (`0..=10`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FillLevel(u8);

impl FillLevel {
    /// Number of steps in a full bar
    pub const STEPS: u8 = 10;

    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(Self::STEPS);

    /// Level from a fraction in `[0, 1]`, rounded down
    ///
    /// Values outside the range saturate, NaN counts as empty.
    pub fn from_fraction(fraction: f32) -> Self {
        Self::from_tenths(fraction * Self::STEPS as f32)
    }

    /// Level from a percentage in `[0, 100]`, rounded down
    pub fn from_percent(percent: f32) -> Self {
        Self::from_tenths(percent / Self::STEPS as f32)
    }

    fn from_tenths(tenths: f32) -> Self {
        // Float-to-int casts truncate toward zero and saturate, NaN becomes 0,
        // so for non-negative input this is floor()
        Self((tenths as u8).min(Self::STEPS))
    }

    /// Level in tenths
    pub const fn tenths(self) -> u8 {
        self.0
    }
}
