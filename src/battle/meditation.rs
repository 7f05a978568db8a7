//! Meditation recovery.

use serde::Serialize;

use crate::battle::combatant::Combatant;
use crate::battle::combo::boost_by_percent;
use crate::battle::damage::round_half_up;

/// Fraction of max HP recovered per meditation.
pub const HP_RECOVERY_RATE: f64 = 0.50;
/// Fraction of max anima recovered per meditation.
pub const ANIMA_RECOVERY_RATE: f64 = 0.10;

/// Recovery computed for one meditation. The recovered amounts are the
/// rounded fractions of the maxima; the new totals are clamped so neither
/// pool exceeds its maximum. The caller applies the totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeditationOutcome {
    pub hp_recovered: u32,
    pub anima_recovered: u32,
    pub new_hp: f64,
    pub new_anima: f64,
}

pub fn meditate(combatant: &Combatant) -> MeditationOutcome {
    meditate_with_bonus(combatant, 0)
}

/// `bonus_percent` (Adaptive Arsenal carry-over) multiplies the recovered
/// amounts before the clamp, so a buffed recovery still cannot overfill a
/// pool.
pub fn meditate_with_bonus(combatant: &Combatant, bonus_percent: u32) -> MeditationOutcome {
    let hp_recovered = boost_by_percent(
        round_half_up(combatant.max_hp * HP_RECOVERY_RATE),
        bonus_percent,
    );
    let anima_recovered = boost_by_percent(
        round_half_up(combatant.max_anima * ANIMA_RECOVERY_RATE),
        bonus_percent,
    );
    MeditationOutcome {
        hp_recovered,
        anima_recovered,
        new_hp: (combatant.hp + f64::from(hp_recovered)).min(combatant.max_hp),
        new_anima: (combatant.anima + f64::from(anima_recovered)).min(combatant.max_anima),
    }
}
