//! Scripted duels: a fixed action sequence replayed through a fresh
//! [BattleSession]. One session per replay, which is also the documented
//! answer to cross-battle id collisions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::battle::{ActionDeclaration, BattleSession, Combatant, CritPolicy, TurnOutcome};
use crate::data::combatant::CombatantRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub actor: Side,
    pub action: ActionDeclaration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelScript {
    pub left: CombatantRecord,
    pub right: CombatantRecord,
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DuelReport {
    pub steps_executed: u32,
    pub turns: Vec<TurnOutcome>,
    pub left_hp_remaining: f64,
    pub right_hp_remaining: f64,
    /// KO decides; otherwise the higher remaining HP. `None` on a tie.
    pub winner: Option<Side>,
}

/// Load a duel script from JSON.
pub fn load_script(path: impl AsRef<Path>) -> Result<DuelScript, String> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("unable to read '{}': {err}", path.display()))?;
    serde_json::from_str(&raw).map_err(|err| format!("unable to parse '{}': {err}", path.display()))
}

/// Replay the script through a fresh session. Scripts are trusted input:
/// anima costs are deducted with a floor at zero and no step is rejected.
/// The replay stops early when a side is knocked out.
pub fn run_script(script: &DuelScript, crit: Box<dyn CritPolicy>) -> Result<DuelReport, String> {
    let mut left = script
        .left
        .to_combatant()
        .map_err(|err| format!("left combatant: {err}"))?;
    let mut right = script
        .right
        .to_combatant()
        .map_err(|err| format!("right combatant: {err}"))?;

    let mut session = BattleSession::with_crit_policy(crit);
    let mut turns = Vec::with_capacity(script.steps.len());
    let mut steps_executed = 0u32;

    for step in &script.steps {
        let (actor_id, defender_id) = match step.actor {
            Side::Left => (script.left.id.as_str(), script.right.id.as_str()),
            Side::Right => (script.right.id.as_str(), script.left.id.as_str()),
        };
        // A guard raised on a previous turn expires when its owner acts again.
        session.reset_turn(actor_id);
        let (actor, defender) = match step.actor {
            Side::Left => (&left, &right),
            Side::Right => (&right, &left),
        };
        let outcome = session.perform_action(actor_id, actor, defender_id, defender, step.action);
        apply_outcome(&outcome, step.actor, &mut left, &mut right);
        turns.push(outcome);
        steps_executed += 1;
        if left.is_down() || right.is_down() {
            break;
        }
    }

    let winner = if left.is_down() && right.is_down() {
        None
    } else if right.is_down() {
        Some(Side::Left)
    } else if left.is_down() {
        Some(Side::Right)
    } else if left.hp > right.hp {
        Some(Side::Left)
    } else if right.hp > left.hp {
        Some(Side::Right)
    } else {
        None
    };

    Ok(DuelReport {
        steps_executed,
        turns,
        left_hp_remaining: left.hp,
        right_hp_remaining: right.hp,
        winner,
    })
}

fn apply_outcome(outcome: &TurnOutcome, actor: Side, left: &mut Combatant, right: &mut Combatant) {
    let (actor_state, defender_state) = match actor {
        Side::Left => (left, right),
        Side::Right => (right, left),
    };
    if let Some(dealt) = outcome.damage_dealt {
        defender_state.hp = (defender_state.hp - f64::from(dealt)).max(0.0);
    }
    if let Some(cost) = outcome.effective_anima_cost {
        actor_state.anima = (actor_state.anima - f64::from(cost)).max(0.0);
    }
    if let Some(recovery) = outcome.meditation {
        actor_state.hp = recovery.new_hp;
        actor_state.anima = recovery.new_anima;
    }
}

/// Bundled demo duel: a Lutador cycling the Dragon's Cadence against an
/// Armamentista alternating actions.
pub fn demo_script() -> DuelScript {
    let left = CombatantRecord {
        id: "kael".to_string(),
        name: Some("Kael".to_string()),
        class: "Lutador".to_string(),
        attack: 100.0,
        defense: 45.0,
        crit_multiplier: 1.0,
        hp: 220.0,
        max_hp: 220.0,
        anima: 40.0,
        max_anima: 60.0,
    };
    let right = CombatantRecord {
        id: "bren".to_string(),
        name: Some("Bren".to_string()),
        class: "Armamentista".to_string(),
        attack: 90.0,
        defense: 60.0,
        crit_multiplier: 1.0,
        hp: 240.0,
        max_hp: 240.0,
        anima: 50.0,
        max_anima: 80.0,
    };
    let steps = vec![
        ScriptStep {
            actor: Side::Left,
            action: ActionDeclaration::ActivateCadence,
        },
        ScriptStep {
            actor: Side::Right,
            action: ActionDeclaration::Attack,
        },
        ScriptStep {
            actor: Side::Left,
            action: ActionDeclaration::Attack,
        },
        ScriptStep {
            actor: Side::Right,
            action: ActionDeclaration::Defend,
        },
        ScriptStep {
            actor: Side::Left,
            action: ActionDeclaration::Attack,
        },
        ScriptStep {
            actor: Side::Right,
            action: ActionDeclaration::Meditate,
        },
        ScriptStep {
            actor: Side::Left,
            action: ActionDeclaration::Skill {
                power: 12.0,
                anima_cost: 10,
                support: false,
            },
        },
        ScriptStep {
            actor: Side::Right,
            action: ActionDeclaration::Attack,
        },
        ScriptStep {
            actor: Side::Left,
            action: ActionDeclaration::Attack,
        },
        ScriptStep {
            actor: Side::Right,
            action: ActionDeclaration::Skill {
                power: 30.0,
                anima_cost: 15,
                support: false,
            },
        },
    ];
    DuelScript { left, right, steps }
}
