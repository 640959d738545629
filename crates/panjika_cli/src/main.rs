use std::io;

use clap::Parser;
use panjika_core::{AnalyticEphemeris, EphemerisConfig, SiderealMode};
use panjika_panchang::{
    DEFAULT_DAYS, DEFAULT_LOCATION, DEFAULT_START, Location, RunConfig, run_days, write_report,
};
use panjika_time::DateSpec;
use panjika_vedic_base::AyanamshaSystem;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "panjika",
    about = "Daily sidereal Sun/Moon longitudes with tithi and nakshatra indices, as JSON"
)]
struct Cli {
    /// First day (YYYY-MM-DD), computed at 00:00 UT
    #[arg(long, default_value_t = DEFAULT_START)]
    start: DateSpec,
    /// Number of consecutive days
    #[arg(long, default_value_t = DEFAULT_DAYS)]
    days: usize,
    /// Observer latitude in degrees (recorded only)
    #[arg(long, default_value_t = DEFAULT_LOCATION.latitude_deg, allow_negative_numbers = true)]
    lat: f64,
    /// Observer longitude in degrees (recorded only)
    #[arg(long, default_value_t = DEFAULT_LOCATION.longitude_deg, allow_negative_numbers = true)]
    lon: f64,
    /// Ayanamsha system code (0 Lahiri, 1 True Lahiri, 2 KP, 3 Raman, 4 Fagan-Bradley)
    #[arg(long, default_value_t = 0)]
    ayanamsha: i32,
    /// Refer longitudes and ayanamsha to the true equinox
    #[arg(long)]
    nutation: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            start: self.start,
            days: self.days,
            location: Location::new(self.lat, self.lon),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let Some(system) = AyanamshaSystem::from_code(cli.ayanamsha) else {
        eprintln!("error: invalid ayanamsha code: {} (0-4)", cli.ayanamsha);
        std::process::exit(1);
    };
    let mode = SiderealMode::new(system, cli.nutation);
    let eph = AnalyticEphemeris::new(EphemerisConfig::with_sidereal(mode));
    info!(ayanamsha = system.name(), "using analytic ephemeris");

    let records = match run_days(&eph, &cli.run_config()) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = write_report(&records, io::stdout().lock()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_reproduces_default_run() {
        let cli = Cli::try_parse_from(["panjika"]).unwrap();
        assert_eq!(cli.run_config(), RunConfig::default());
        assert_eq!(cli.ayanamsha, 0);
        assert!(!cli.nutation);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "panjika",
            "--start",
            "2024-02-28",
            "--days",
            "3",
            "--lat",
            "-33.87",
            "--lon",
            "151.21",
            "--ayanamsha",
            "4",
            "--nutation",
        ])
        .unwrap();
        let cfg = cli.run_config();
        assert_eq!(cfg.start, DateSpec::new(2024, 2, 28));
        assert_eq!(cfg.days, 3);
        assert_eq!(cfg.location, Location::new(-33.87, 151.21));
        assert_eq!(
            AyanamshaSystem::from_code(cli.ayanamsha),
            Some(AyanamshaSystem::FaganBradley)
        );
        assert!(cli.nutation);
    }

    #[test]
    fn rejects_malformed_start() {
        assert!(Cli::try_parse_from(["panjika", "--start", "2025-13-01"]).is_err());
        assert!(Cli::try_parse_from(["panjika", "--start", "2025-01-01T06:00:00"]).is_err());
    }
}
