//! Run configuration for the day-range driver.

use panjika_time::DateSpec;

/// First day of the default run.
pub const DEFAULT_START: DateSpec = DateSpec::new(2025, 1, 1);

/// Number of consecutive days in the default run.
pub const DEFAULT_DAYS: usize = 10;

/// Bengaluru. Recorded and logged, never used in the computation.
pub const DEFAULT_LOCATION: Location = Location::new(12.9716, 77.5946);

/// Observer's geographic position in degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl Location {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        DEFAULT_LOCATION
    }
}

/// Which days to compute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    pub start: DateSpec,
    pub days: usize,
    pub location: Location,
}

impl RunConfig {
    /// The dates of the run, in order, each one day after the previous.
    pub fn dates(&self) -> impl Iterator<Item = DateSpec> + '_ {
        (0..self.days).map(|i| self.start.add_days(i as i64))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            days: DEFAULT_DAYS,
            location: DEFAULT_LOCATION,
        }
    }
}
