//! Dragon's Cadence: the Lutador combo.
//!
//! Armed by its activation skill; every consecutive basic attack afterwards
//! adds 10% to the damage buff. Using a skill, defending or meditating
//! breaks the streak but leaves the mechanic armed, so the next basic attack
//! starts a fresh streak at 10% rather than continuing the old one.

use serde::Serialize;

use crate::battle::combo::registry::ComboRegistry;
use crate::battle::combo::boost_by_percent;

/// Buff percent gained per consecutive basic attack.
pub const BUFF_PER_ATTACK: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragonCadenceOutcome {
    pub armed: bool,
    pub consecutive_basic_attacks: u32,
    pub buff_percent: u32,
    pub message: String,
}

/// Arm the cadence and zero the streak.
pub fn activate(registry: &mut ComboRegistry, id: &str) -> DragonCadenceOutcome {
    let dragon = &mut registry.state_mut(id).dragon;
    dragon.armed = true;
    dragon.consecutive_basic_attacks = 0;
    dragon.buff_percent = 0;
    DragonCadenceOutcome {
        armed: true,
        consecutive_basic_attacks: 0,
        buff_percent: 0,
        message: format!("{id} channels the Dragon's Cadence; consecutive basic attacks will build power."),
    }
}

/// Count one basic attack towards the streak. If the cadence was never
/// armed, nothing changes and the outcome says so.
pub fn process_basic_attack(registry: &mut ComboRegistry, id: &str) -> DragonCadenceOutcome {
    let armed = registry
        .state_for(id)
        .map(|state| state.dragon.armed)
        .unwrap_or(false);
    if !armed {
        return DragonCadenceOutcome {
            armed: false,
            consecutive_basic_attacks: 0,
            buff_percent: 0,
            message: format!("{id} attacks without the Dragon's Cadence; no buff builds."),
        };
    }
    let dragon = &mut registry.state_mut(id).dragon;
    dragon.consecutive_basic_attacks += 1;
    dragon.buff_percent = dragon.consecutive_basic_attacks * BUFF_PER_ATTACK;
    DragonCadenceOutcome {
        armed: true,
        consecutive_basic_attacks: dragon.consecutive_basic_attacks,
        buff_percent: dragon.buff_percent,
        message: format!(
            "Dragon's Cadence: {} consecutive basic attack(s), +{}% damage.",
            dragon.consecutive_basic_attacks, dragon.buff_percent
        ),
    }
}

/// Zero the streak; the armed flag is untouched. Triggered by skills,
/// defending and meditating.
pub fn break_streak(registry: &mut ComboRegistry, id: &str) {
    if let Some(state) = registry.existing_state_mut(id) {
        state.dragon.consecutive_basic_attacks = 0;
        state.dragon.buff_percent = 0;
    }
}

/// Full reset: re-arms unconditionally and zeroes the streak, even for a
/// character that never activated the cadence. Source behavior, kept as-is.
pub fn reset(registry: &mut ComboRegistry, id: &str) {
    let dragon = &mut registry.state_mut(id).dragon;
    dragon.armed = true;
    dragon.consecutive_basic_attacks = 0;
    dragon.buff_percent = 0;
}

/// Multiply `base_damage` by the current buff when armed and charged;
/// otherwise return it unchanged.
pub fn apply_buff(registry: &ComboRegistry, base_damage: u32, id: &str) -> u32 {
    match registry.state_for(id) {
        Some(state) if state.dragon.armed && state.dragon.buff_percent > 0 => {
            boost_by_percent(base_damage, state.dragon.buff_percent)
        }
        _ => base_damage,
    }
}
