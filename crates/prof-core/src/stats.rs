//! The three classroom stats shown as bars.
//!
//! Values are stored exactly as the narrative service sent them. The service
//! is asked to keep them within 0-100 but nothing enforces it, so every
//! display path goes through [`clamp_stat`].

use serde::{Deserialize, Serialize};

/// Lowest displayable stat value.
pub const STAT_MIN: i64 = 0;
/// Highest displayable stat value.
pub const STAT_MAX: i64 = 100;

/// Clamp a raw stat value into the displayable 0-100 range.
pub fn clamp_stat(value: i64) -> u8 {
    // STAT_MAX fits in a u8, so the cast cannot truncate.
    value.clamp(STAT_MIN, STAT_MAX) as u8
}

/// Student motivation, professor authority and professor energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameStats {
    /// How engaged the students are.
    pub motivation: i64,
    /// How much control the professor has over the class.
    pub authority: i64,
    /// How much energy (caffeine) the professor has left.
    pub energy: i64,
}

impl GameStats {
    /// The starting values the game master is told to use.
    pub const INITIAL: GameStats = GameStats {
        motivation: 50,
        authority: 80,
        energy: 100,
    };

    /// Create a stat block from raw values.
    pub fn new(motivation: i64, authority: i64, energy: i64) -> Self {
        Self {
            motivation,
            authority,
            energy,
        }
    }

    /// A copy with every value clamped to 0-100.
    pub fn clamped(&self) -> Self {
        Self {
            motivation: clamp_stat(self.motivation).into(),
            authority: clamp_stat(self.authority).into(),
            energy: clamp_stat(self.energy).into(),
        }
    }

    /// The raw value of one stat.
    pub fn get(&self, kind: StatKind) -> i64 {
        match kind {
            StatKind::Motivation => self.motivation,
            StatKind::Authority => self.authority,
            StatKind::Energy => self.energy,
        }
    }

    /// Display meters in bar order.
    pub fn meters(&self) -> [StatMeter; 3] {
        StatKind::ALL.map(|kind| StatMeter {
            kind,
            percent: clamp_stat(self.get(kind)),
        })
    }
}

impl std::fmt::Display for GameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [m, a, e] = self.meters();
        write!(f, "{m} | {a} | {e}")
    }
}

/// Identifies one of the three stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Student motivation.
    Motivation,
    /// Professor authority.
    Authority,
    /// Professor energy.
    Energy,
}

impl StatKind {
    /// All stats in display order.
    pub const ALL: [StatKind; 3] = [StatKind::Motivation, StatKind::Authority, StatKind::Energy];

    /// Human-readable bar label.
    pub fn label(self) -> &'static str {
        match self {
            StatKind::Motivation => "Student Motivation",
            StatKind::Authority => "Professor Authority",
            StatKind::Energy => "Energy (Caffeine)",
        }
    }
}

/// A single clamped stat ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatMeter {
    /// Which stat this is.
    pub kind: StatKind,
    /// Clamped value, 0-100.
    pub percent: u8,
}

impl StatMeter {
    /// Filled fraction of the bar (0.0 to 1.0).
    pub fn fraction(&self) -> f64 {
        f64::from(self.percent) / STAT_MAX as f64
    }
}

impl std::fmt::Display for StatMeter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}%", self.kind.label(), self.percent)
    }
}
