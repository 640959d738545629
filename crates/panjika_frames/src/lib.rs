//! Ecliptic frame helpers.
//!
//! Provides the IAU 2006 general precession in longitude (the quantity
//! that drives every ayanamsha) and the IAU 2000B nutation in
//! longitude for true-equinox work.

pub mod nutation;
pub mod precession;

pub use nutation::{fundamental_arguments, nutation_longitude_arcsec};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
