//! Provider configuration.

use panjika_vedic_base::AyanamshaSystem;

/// How sidereal longitudes are derived from tropical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiderealMode {
    pub system: AyanamshaSystem,
    /// Refer both the longitudes and the ayanamsha to the true equinox.
    pub use_nutation: bool,
}

impl SiderealMode {
    pub const fn new(system: AyanamshaSystem, use_nutation: bool) -> Self {
        Self {
            system,
            use_nutation,
        }
    }

    /// Whether nutation in longitude enters the computation at all.
    pub const fn applies_nutation(self) -> bool {
        self.use_nutation || self.system.uses_true_equinox()
    }
}

impl Default for SiderealMode {
    fn default() -> Self {
        Self::new(AyanamshaSystem::Lahiri, false)
    }
}

/// Settings fixed at provider construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EphemerisConfig {
    pub sidereal: SiderealMode,
}

impl EphemerisConfig {
    pub const fn with_sidereal(sidereal: SiderealMode) -> Self {
        Self { sidereal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lahiri_mean_equinox() {
        let cfg = EphemerisConfig::default();
        assert_eq!(cfg.sidereal.system, AyanamshaSystem::Lahiri);
        assert!(!cfg.sidereal.applies_nutation());
    }

    #[test]
    fn true_lahiri_implies_nutation() {
        let mode = SiderealMode::new(AyanamshaSystem::TrueLahiri, false);
        assert!(mode.applies_nutation());
    }
}
