//! Day-range driver: one provider round trip per day, all or nothing.

use panjika_core::{AstroTime, Body, Frame, PositionProvider};
use panjika_time::DateSpec;
use panjika_vedic_base::calendar_indices;
use tracing::{debug, error, info};

use crate::config::RunConfig;
use crate::error::PanchangError;
use crate::record::ResultRecord;

/// Compute the record for 00:00 UT on `date`.
pub fn compute_day<P: PositionProvider>(
    provider: &P,
    date: &DateSpec,
) -> Result<ResultRecord, PanchangError> {
    let time = AstroTime::from_date(date);
    let sun = provider.position(time, Body::Sun, Frame::Sidereal)?;
    let moon = provider.position(time, Body::Moon, Frame::Sidereal)?;
    let idx = calendar_indices(sun.longitude_deg, moon.longitude_deg);

    debug!(
        %date,
        jd = time.jd_ut(),
        sun = sun.longitude_deg,
        moon = moon.longitude_deg,
        tithi = idx.tithi().name(),
        nakshatra = idx.nakshatra().name(),
        "computed day"
    );
    Ok(ResultRecord::new(
        date,
        time.jd_ut(),
        sun.longitude_deg,
        moon.longitude_deg,
        idx,
    ))
}

/// Compute every day of the run in order. The first provider failure
/// aborts the run and no records are returned.
pub fn run_days<P: PositionProvider>(
    provider: &P,
    config: &RunConfig,
) -> Result<Vec<ResultRecord>, PanchangError> {
    info!(
        start = %config.start,
        days = config.days,
        lat = config.location.latitude_deg,
        lon = config.location.longitude_deg,
        "starting run"
    );

    // `days` is unbounded; the provider ends overlong runs.
    let mut records = Vec::new();
    for date in config.dates() {
        match compute_day(provider, &date) {
            Ok(record) => records.push(record),
            Err(e) => {
                error!(%date, error = %e, "run aborted");
                return Err(e);
            }
        }
    }
    Ok(records)
}
