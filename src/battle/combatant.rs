//! Engine-facing combatant snapshot.

use serde::{Deserialize, Serialize};

use crate::battle::class::CombatClass;

fn default_crit_multiplier() -> f64 {
    1.0
}

/// Read-only stat snapshot for one side of a resolution. The engine never
/// mutates it; the caller applies returned damage, costs and recovery to its
/// own character state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub class: CombatClass,
    pub attack: f64,
    pub defense: f64,
    /// Critical damage multiplier, applied to every hit (1.0 = neutral).
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    pub hp: f64,
    pub max_hp: f64,
    pub anima: f64,
    pub max_anima: f64,
}

impl Combatant {
    pub fn is_down(&self) -> bool {
        self.hp <= 0.0
    }
}
