//! Combat classes and the advantage cycle.
//!
//! The three classes form a fixed cycle: Lutador beats Armamentista,
//! Armamentista beats Arcano, Arcano beats Lutador. For any ordered pair of
//! distinct classes exactly one direction of [CombatClass::has_advantage]
//! holds, so a damage roll can never receive both the bonus and the penalty.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Damage multiplier when the attacker holds the class advantage.
pub const ADVANTAGE_MODIFIER: f64 = 1.10;
/// Damage multiplier when the defender holds the class advantage.
pub const DISADVANTAGE_MODIFIER: f64 = 0.90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatClass {
    Lutador,
    Armamentista,
    Arcano,
}

impl CombatClass {
    /// The class this one beats in the cycle.
    pub const fn beats(self) -> CombatClass {
        match self {
            Self::Lutador => Self::Armamentista,
            Self::Armamentista => Self::Arcano,
            Self::Arcano => Self::Lutador,
        }
    }

    pub fn has_advantage(self, other: CombatClass) -> bool {
        self.beats() == other
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lutador => "Lutador",
            Self::Armamentista => "Armamentista",
            Self::Arcano => "Arcano",
        }
    }
}

impl fmt::Display for CombatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClassError {
    pub raw: String,
}

impl fmt::Display for ParseClassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown combat class '{}' (expected Lutador, Armamentista or Arcano)",
            self.raw
        )
    }
}

impl std::error::Error for ParseClassError {}

impl FromStr for CombatClass {
    type Err = ParseClassError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "lutador" => Ok(Self::Lutador),
            "armamentista" => Ok(Self::Armamentista),
            "arcano" => Ok(Self::Arcano),
            _ => Err(ParseClassError {
                raw: raw.to_string(),
            }),
        }
    }
}

/// Modifier for an attacker/defender pair: [ADVANTAGE_MODIFIER] when the
/// attacker holds the advantage, [DISADVANTAGE_MODIFIER] when the defender
/// does, `1.0` otherwise (same class).
pub fn class_modifier(attacker: CombatClass, defender: CombatClass) -> f64 {
    if attacker.has_advantage(defender) {
        ADVANTAGE_MODIFIER
    } else if defender.has_advantage(attacker) {
        DISADVANTAGE_MODIFIER
    } else {
        1.0
    }
}
