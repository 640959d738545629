//! Built-in analytic ephemeris.

use panjika_frames::nutation_longitude_arcsec;
use panjika_time::AstroTime;
use panjika_vedic_base::{ayanamsha_deg, normalize_360};
use tracing::{debug, trace};

use crate::config::EphemerisConfig;
use crate::moon::moon_longitude_deg;
use crate::sun::sun_longitude_deg;
use crate::{Body, BodyPosition, EngineError, Frame, PositionProvider};

/// Half-width of the central difference used for speeds, in days.
pub const SPEED_STEP_DAYS: f64 = 0.01;

/// Earliest supported instant: -2999-01-01 00:00 UT.
pub const MIN_JD_UT: f64 = 625_697.5;

/// Latest supported instant: 3000-01-01 00:00 UT.
pub const MAX_JD_UT: f64 = 2_816_787.5;

/// Sun and Moon from the Meeus analytic theories.
///
/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct AnalyticEphemeris {
    config: EphemerisConfig,
}

impl AnalyticEphemeris {
    pub fn new(config: EphemerisConfig) -> Self {
        debug!(
            ayanamsha = config.sidereal.system.name(),
            nutation = config.sidereal.applies_nutation(),
            "analytic ephemeris ready"
        );
        Self { config }
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    fn validate(time: AstroTime) -> Result<(), EngineError> {
        let jd_ut = time.jd_ut();
        if !jd_ut.is_finite() {
            return Err(EngineError::InvalidQuery("time must be finite"));
        }
        if !(MIN_JD_UT..=MAX_JD_UT).contains(&jd_ut) {
            return Err(EngineError::EpochOutOfRange { jd_ut });
        }
        Ok(())
    }

    /// Longitude in degrees, not normalized.
    fn raw_longitude(&self, time: AstroTime, body: Body, frame: Frame) -> f64 {
        let t = time.centuries_tt();
        let mode = self.config.sidereal;

        let mut lon = match body {
            Body::Sun => sun_longitude_deg(t),
            Body::Moon => moon_longitude_deg(t),
        };
        if mode.applies_nutation() {
            lon += nutation_longitude_arcsec(t) / 3600.0;
        }
        if frame == Frame::Sidereal {
            lon -= ayanamsha_deg(mode.system, t, mode.use_nutation);
        }
        lon
    }
}

impl PositionProvider for AnalyticEphemeris {
    fn position(
        &self,
        time: AstroTime,
        body: Body,
        frame: Frame,
    ) -> Result<BodyPosition, EngineError> {
        Self::validate(time)?;

        let lon = self.raw_longitude(time, body, frame);
        let ahead = self.raw_longitude(time.offset_days(SPEED_STEP_DAYS), body, frame);
        let behind = self.raw_longitude(time.offset_days(-SPEED_STEP_DAYS), body, frame);
        // Unwrap to [-180, 180) before dividing.
        let delta = normalize_360(ahead - behind + 180.0) - 180.0;
        let position = BodyPosition {
            longitude_deg: normalize_360(lon),
            speed_deg_per_day: delta / (2.0 * SPEED_STEP_DAYS),
        };

        trace!(
            jd_ut = time.jd_ut(),
            body = body.name(),
            ?frame,
            longitude = position.longitude_deg,
            "position"
        );
        Ok(position)
    }
}
