//! Damage formulas.
//!
//! Both formulas clamp the raw stat difference to zero *before* the class
//! modifier is applied, and round exactly once, after all multiplications.

use crate::battle::class::class_modifier;
use crate::battle::combatant::Combatant;

/// Fraction of the defender's defense subtracted from a basic attack.
pub const BASIC_DEFENSE_FACTOR: f64 = 0.7;
/// Fraction of the defender's defense subtracted from a skill attack.
pub const SKILL_DEFENSE_FACTOR: f64 = 0.5;
/// Declared skill power is divided by this before scaling the attack stat.
pub const SKILL_POWER_SCALE: f64 = 10.0;

/// Round half up. Inputs here are always non-negative, so rounding half away
/// from zero is the same thing.
pub fn round_half_up(value: f64) -> u32 {
    value.round() as u32
}

/// Basic attack: `round(clamp((attack - defense * 0.7) * crit) * class_mod)`.
pub fn basic_attack_damage(attacker: &Combatant, defender: &Combatant) -> u32 {
    let raw = (attacker.attack - defender.defense * BASIC_DEFENSE_FACTOR)
        * attacker.crit_multiplier;
    round_half_up(raw.max(0.0) * class_modifier(attacker.class, defender.class))
}

/// Skill attack: `round(clamp((attack * power/10 - defense * 0.5) * crit) * class_mod)`.
pub fn skill_attack_damage(attacker: &Combatant, defender: &Combatant, skill_power: f64) -> u32 {
    let raw = (attacker.attack * (skill_power / SKILL_POWER_SCALE)
        - defender.defense * SKILL_DEFENSE_FACTOR)
        * attacker.crit_multiplier;
    round_half_up(raw.max(0.0) * class_modifier(attacker.class, defender.class))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::class::CombatClass;

    fn combatant(class: CombatClass, attack: f64, defense: f64, crit: f64) -> Combatant {
        Combatant {
            class,
            attack,
            defense,
            crit_multiplier: crit,
            hp: 100.0,
            max_hp: 100.0,
            anima: 50.0,
            max_anima: 50.0,
        }
    }

    #[test]
    fn basic_attack_clamps_before_class_modifier() {
        // 10 - 100 * 0.7 is negative; the penalty modifier must not turn it
        // into a different negative value before the clamp.
        let weak = combatant(CombatClass::Armamentista, 10.0, 0.0, 1.0);
        let tank = combatant(CombatClass::Lutador, 0.0, 100.0, 1.0);
        assert_eq!(basic_attack_damage(&weak, &tank), 0);
    }

    #[test]
    fn skill_attack_scales_power_by_tenths() {
        // 100 * (30/10) - 50 * 0.5 = 275, crit 1.0, same class: 275.
        let a = combatant(CombatClass::Arcano, 100.0, 0.0, 1.0);
        let d = combatant(CombatClass::Arcano, 0.0, 50.0, 1.0);
        assert_eq!(skill_attack_damage(&a, &d, 30.0), 275);
    }

    #[test]
    fn rounding_happens_once_after_all_multiplications() {
        // 275 * 1.5 = 412.5 rounds up to 413.
        let a = combatant(CombatClass::Arcano, 100.0, 0.0, 1.5);
        let d = combatant(CombatClass::Arcano, 0.0, 50.0, 1.0);
        assert_eq!(skill_attack_damage(&a, &d, 30.0), 413);
    }
}
