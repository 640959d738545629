//! Calendar index calculator: (Sun, Moon) sidereal longitudes to the
//! 1-based tithi index and the 0-based nakshatra index.

use crate::nakshatra::{NAKSHATRA_SPAN_27, Nakshatra};
use crate::tithi::{TITHI_COUNT, TITHI_SEGMENT_DEG, Tithi};
use crate::util::normalize_360;

/// Tithi and nakshatra indices for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarIndices {
    /// 1-based tithi index, 1..=30.
    pub tithi_index: u8,
    /// 0-based nakshatra index, 0..=26.
    pub nakshatra_index: u8,
}

impl CalendarIndices {
    pub const fn tithi(self) -> Tithi {
        Tithi::all()[(self.tithi_index - 1) as usize]
    }

    pub const fn nakshatra(self) -> Nakshatra {
        Nakshatra::all()[self.nakshatra_index as usize]
    }
}

/// Moon-minus-Sun elongation folded into [0, 360).
pub fn elongation_deg(sun_lon_deg: f64, moon_lon_deg: f64) -> f64 {
    let mut diff = normalize_360(moon_lon_deg) - normalize_360(sun_lon_deg);
    if diff < 0.0 {
        diff += 360.0;
    }
    diff
}

/// Compute the tithi and nakshatra indices from sidereal longitudes.
///
/// Tithi = floor(elongation / 12) + 1; nakshatra = floor(moon / (360/27)).
/// Values exactly on a boundary fall into the higher index. Rounding that
/// lands on 360.0 is clamped so the results stay within 1..=30 and 0..=26.
pub fn calendar_indices(sun_lon_deg: f64, moon_lon_deg: f64) -> CalendarIndices {
    let diff = elongation_deg(sun_lon_deg, moon_lon_deg);
    let tithi_zero = ((diff / TITHI_SEGMENT_DEG).floor() as u8).min(TITHI_COUNT - 1);
    let moon = normalize_360(moon_lon_deg);
    let nakshatra_index = ((moon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    CalendarIndices {
        tithi_index: tithi_zero + 1,
        nakshatra_index,
    }
}
