//! Position provider contract and the built-in analytic ephemeris.
//!
//! This crate defines the [`PositionProvider`] seam through which the
//! day-range driver asks for Sun and Moon longitudes, plus
//! [`AnalyticEphemeris`], the default provider built on the low-precision
//! solar and lunar theories of Meeus.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod config;
pub mod engine;
pub mod moon;
pub mod sun;

pub use config::{EphemerisConfig, SiderealMode};
pub use engine::{AnalyticEphemeris, MAX_JD_UT, MIN_JD_UT, SPEED_STEP_DAYS};
pub use panjika_time::AstroTime;

/// Bodies the provider can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Zodiac in which longitudes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Measured from the equinox of date.
    Tropical,
    /// Tropical less the configured ayanamsha.
    Sidereal,
}

/// Ecliptic longitude and its rate for one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Longitude in degrees, `[0, 360)`.
    pub longitude_deg: f64,
    pub speed_deg_per_day: f64,
}

/// Errors from position queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidQuery(&'static str),
    EpochOutOfRange { jd_ut: f64 },
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery(msg) => write!(f, "invalid query: {msg}"),
            Self::EpochOutOfRange { jd_ut } => {
                write!(f, "epoch out of range: JD {jd_ut} (UT)")
            }
        }
    }
}

impl Error for EngineError {}

/// Source of ecliptic longitudes.
///
/// The sidereal mode is part of the provider's own configuration, so two
/// providers with different modes can coexist in one process.
pub trait PositionProvider {
    fn position(
        &self,
        time: AstroTime,
        body: Body,
        frame: Frame,
    ) -> Result<BodyPosition, EngineError>;
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn position(
        &self,
        time: AstroTime,
        body: Body,
        frame: Frame,
    ) -> Result<BodyPosition, EngineError> {
        (**self).position(time, body, frame)
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for Box<P> {
    fn position(
        &self,
        time: AstroTime,
        body: Body,
        frame: Frame,
    ) -> Result<BodyPosition, EngineError> {
        (**self).position(time, body, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl PositionProvider for Fixed {
        fn position(&self, _: AstroTime, _: Body, _: Frame) -> Result<BodyPosition, EngineError> {
            Ok(BodyPosition {
                longitude_deg: self.0,
                speed_deg_per_day: 0.0,
            })
        }
    }

    fn sun_of<P: PositionProvider>(p: P) -> f64 {
        p.position(AstroTime::from_jd_ut(2_451_545.0), Body::Sun, Frame::Sidereal)
            .map(|pos| pos.longitude_deg)
            .unwrap_or(f64::NAN)
    }

    #[test]
    fn provider_through_reference_and_box() {
        let p = Fixed(42.0);
        assert_eq!(sun_of(&p), 42.0);
        let boxed: Box<dyn PositionProvider> = Box::new(Fixed(7.0));
        assert_eq!(sun_of(boxed), 7.0);
    }

    #[test]
    fn error_display() {
        let e = EngineError::EpochOutOfRange { jd_ut: 1.5 };
        assert_eq!(e.to_string(), "epoch out of range: JD 1.5 (UT)");
        assert_eq!(
            EngineError::InvalidQuery("time must be finite").to_string(),
            "invalid query: time must be finite"
        );
    }
}
