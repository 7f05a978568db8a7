//! Declared actions and the records a resolved turn hands back to the
//! caller. Every outcome pairs the numeric results with a human-readable
//! `message` for the battle log.

use serde::{Deserialize, Serialize};

use crate::battle::combo::{ArsenalOutcome, ConvergenceOutcome, DragonCadenceOutcome};
use crate::battle::meditation::MeditationOutcome;

/// One declared action for a combatant's turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionDeclaration {
    Attack,
    Defend,
    Meditate,
    Skill {
        /// Declared skill power (the skill's damage value).
        power: f64,
        #[serde(default)]
        anima_cost: u32,
        /// Support skills heal or buff instead of dealing damage.
        #[serde(default)]
        support: bool,
    },
    /// Arm the Dragon's Cadence (the Lutador activation skill).
    ActivateCadence,
}

impl ActionDeclaration {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defend => "defend",
            Self::Meditate => "meditate",
            Self::Skill { .. } => "skill",
            Self::ActivateCadence => "activate_cadence",
        }
    }
}

/// Result of one composed turn resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnOutcome {
    pub actor: String,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub critical: bool,
    /// Damage after buffs, before the defender's guard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_before_defense: Option<u32>,
    /// Damage actually dealt, after the guard gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_dealt: Option<u32>,
    /// Effect magnitude of a support skill, after buffs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_effect: Option<u32>,
    /// Anima actually paid for a skill cast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_anima_cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meditation: Option<MeditationOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragon: Option<DragonCadenceOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arsenal: Option<ArsenalOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convergence: Option<ConvergenceOutcome>,
    pub message: String,
}

impl TurnOutcome {
    /// Bare outcome with everything numeric unset; resolution fills in what
    /// the action actually produced.
    pub(crate) fn new(actor: &str, action: &'static str) -> Self {
        Self {
            actor: actor.to_string(),
            action,
            target: None,
            critical: false,
            damage_before_defense: None,
            damage_dealt: None,
            support_effect: None,
            effective_anima_cost: None,
            meditation: None,
            dragon: None,
            arsenal: None,
            convergence: None,
            message: String::new(),
        }
    }
}
