//! Time handling for the panjika workspace.
//!
//! This crate provides:
//! - Julian Date <-> calendar conversions
//! - `DateSpec`, a civil date at 00:00 used by the day-range driver
//! - Delta T (TT - UT) for feeding ephemeris theories
//! - An `AstroTime` type carrying a UT Julian Day

pub mod date;
pub mod delta_t;
pub mod error;
pub mod julian;

pub use date::{DateSpec, days_in_month, is_leap_year};
pub use delta_t::{decimal_year, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries,
};

/// An instant expressed as a Julian Day on the UT scale.
///
/// This is the time argument of every position query. Terrestrial Time is
/// derived on demand by adding Delta T.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AstroTime {
    jd_ut: f64,
}

impl AstroTime {
    /// Wrap a UT Julian Day.
    pub const fn from_jd_ut(jd_ut: f64) -> Self {
        Self { jd_ut }
    }

    /// Midnight of `date`, reading its wall clock as UT.
    pub fn from_date(date: &DateSpec) -> Self {
        Self::from_jd_ut(date.to_julian_day())
    }

    /// Julian Day on the UT scale.
    pub const fn jd_ut(self) -> f64 {
        self.jd_ut
    }

    /// Delta T at this instant, in days.
    pub fn delta_t_days(self) -> f64 {
        delta_t_seconds(decimal_year(self.jd_ut)) / SECONDS_PER_DAY
    }

    /// Julian Ephemeris Day (TT).
    pub fn jd_tt(self) -> f64 {
        self.jd_ut + self.delta_t_days()
    }

    /// Julian centuries of TT since J2000.0.
    pub fn centuries_tt(self) -> f64 {
        jd_to_centuries(self.jd_tt())
    }

    /// The instant shifted by `days` (may be fractional or negative).
    pub fn offset_days(self, days: f64) -> Self {
        Self::from_jd_ut(self.jd_ut + days)
    }
}
