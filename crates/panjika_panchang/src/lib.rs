//! Daily tithi and nakshatra indices over a range of days.
//!
//! [`run_days`] walks the configured dates, asks a
//! [`PositionProvider`](panjika_core::PositionProvider) for sidereal Sun and
//! Moon longitudes at 00:00 UT of each, and turns them into
//! [`ResultRecord`]s. [`write_report`] serializes the records as JSON.

pub mod config;
pub mod driver;
pub mod error;
pub mod record;
pub mod report;

pub use config::{DEFAULT_DAYS, DEFAULT_LOCATION, DEFAULT_START, Location, RunConfig};
pub use driver::{compute_day, run_days};
pub use error::PanchangError;
pub use record::ResultRecord;
pub use report::{render_report, write_report};
