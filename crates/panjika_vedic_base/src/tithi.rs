//! Tithi (lunar day) classification from the Moon-Sun elongation.
//!
//! The synodic cycle is cut into 30 tithis of 12 degrees each. Tithis
//! 1-15 form the Shukla (waxing) paksha ending at Purnima; 16-30 form the
//! Krishna (waning) paksha ending at Amavasya.

use crate::util::normalize_360;

/// Span of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Number of tithis in a synodic month.
pub const TITHI_COUNT: u8 = 30;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, new moon to full moon.
    Shukla,
    /// Waning half, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis in order from Shukla Pratipada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis, indexed 0 (Shukla Pratipada) to 29 (Amavasya).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Day names within a paksha; the 15th differs between the halves.
const PAKSHA_DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

impl Tithi {
    /// 0-based index (Shukla Pratipada = 0, Amavasya = 29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Tithi for a 0-based index; `None` past 29.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < TITHI_COUNT {
            Some(ALL_TITHIS[index as usize])
        } else {
            None
        }
    }

    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based day within the paksha (1-15).
    pub const fn day_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    /// Day name without the paksha prefix, e.g. "Ashtami".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            _ => PAKSHA_DAY_NAMES[(self.index() % 15) as usize],
        }
    }

    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

/// Tithi position for a given elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based index (0..=29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based day within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees of elongation already elapsed in this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify a Moon-minus-Sun elongation into a tithi.
///
/// The elongation is normalized to [0, 360) first. Exact boundaries belong
/// to the later tithi.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let idx = ((elong / TITHI_SEGMENT_DEG).floor() as u8).min(TITHI_COUNT - 1);
    let tithi = ALL_TITHIS[idx as usize];
    TithiPosition {
        tithi,
        tithi_index: idx,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.day_in_paksha(),
        degrees_in_tithi: elong - idx as f64 * TITHI_SEGMENT_DEG,
    }
}
