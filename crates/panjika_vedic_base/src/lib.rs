//! Sidereal calendar arithmetic built on ecliptic longitudes.
//!
//! This crate provides:
//! - Ayanamsha computation for the supported sidereal systems
//! - Tithi and paksha classification from the Moon-Sun elongation
//! - Nakshatra and pada lookup from the Moon's sidereal longitude
//! - The calendar index calculator used by the day-range driver
//!
//! Everything here is pure arithmetic; positions come from `panjika_core`.

pub mod ayanamsha;
pub mod indices;
pub mod nakshatra;
pub mod tithi;
pub mod util;

pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg, ayanamsha_mean_deg};
pub use indices::{CalendarIndices, calendar_indices, elongation_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use tithi::{
    ALL_TITHIS, Paksha, TITHI_COUNT, TITHI_SEGMENT_DEG, Tithi, TithiPosition,
    tithi_from_elongation,
};
pub use util::normalize_360;
