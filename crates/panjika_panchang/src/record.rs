use panjika_time::DateSpec;
use panjika_vedic_base::CalendarIndices;
use serde::Serialize;

/// One output row. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    /// `YYYY-MM-DDT00:00:00`.
    pub date: String,
    /// Julian Day (UT) of the instant.
    pub jd: f64,
    /// Sidereal longitudes in degrees, `[0, 360)`.
    pub sun_lon: f64,
    pub moon_lon: f64,
    /// 1..=30.
    pub tithi_index: u8,
    /// 0..=26.
    pub nakshatra_index: u8,
}

impl ResultRecord {
    pub fn new(date: &DateSpec, jd: f64, sun_lon: f64, moon_lon: f64, idx: CalendarIndices) -> Self {
        Self {
            date: date.iso_timestamp(),
            jd,
            sun_lon,
            moon_lon,
            tithi_index: idx.tithi_index,
            nakshatra_index: idx.nakshatra_index,
        }
    }
}
