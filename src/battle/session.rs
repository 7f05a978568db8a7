//! Per-battle facade owning all mechanic state.
//!
//! One [BattleSession] per battle. The original rules kept global
//! per-character tables, so two battles sharing a character id corrupted
//! each other's combo state; owning the tables here removes that failure
//! mode. Calls are strictly sequential within a session, one turn at a time.

use std::fmt;

use serde::Serialize;

use crate::battle::class::CombatClass;
use crate::battle::combatant::Combatant;
use crate::battle::combo::{
    self, adaptive_arsenal, anima_convergence, dragon_cadence, ActionKind, ComboRegistry,
    DragonCadenceOutcome,
};
use crate::battle::crit::{CritPolicy, NeverCrit};
use crate::battle::damage;
use crate::battle::defense::DefenseTable;
use crate::battle::meditation;
use crate::battle::outcome::{ActionDeclaration, TurnOutcome};

/// Informational counters for observability. No side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub defending_characters: usize,
    pub active_combo_characters: usize,
    pub tracked_characters: usize,
}

pub struct BattleSession {
    defense: DefenseTable,
    combos: ComboRegistry,
    crit: Box<dyn CritPolicy>,
}

impl Default for BattleSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BattleSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleSession")
            .field("defense", &self.defense)
            .field("combos", &self.combos)
            .finish_non_exhaustive()
    }
}

impl BattleSession {
    /// Session with the game default: no hit is ever critical.
    pub fn new() -> Self {
        Self::with_crit_policy(Box::new(NeverCrit))
    }

    pub fn with_crit_policy(crit: Box<dyn CritPolicy>) -> Self {
        Self {
            defense: DefenseTable::new(),
            combos: ComboRegistry::new(),
            crit,
        }
    }

    /// Resolve one declared action. `defender` is the opposing side of the
    /// duel; defend/meditate/activation ignore it.
    pub fn perform_action(
        &mut self,
        attacker_id: &str,
        attacker: &Combatant,
        defender_id: &str,
        defender: &Combatant,
        action: ActionDeclaration,
    ) -> TurnOutcome {
        match action {
            ActionDeclaration::Attack => {
                self.resolve_attack(attacker_id, attacker, defender_id, defender)
            }
            ActionDeclaration::Defend => self.resolve_defend(attacker_id, attacker),
            ActionDeclaration::Meditate => self.resolve_meditate(attacker_id, attacker),
            ActionDeclaration::Skill {
                power,
                anima_cost,
                support,
            } => self.resolve_skill(
                attacker_id,
                attacker,
                defender_id,
                defender,
                power,
                anima_cost,
                support,
            ),
            ActionDeclaration::ActivateCadence => self.resolve_activate(attacker_id, attacker),
        }
    }

    fn resolve_attack(
        &mut self,
        attacker_id: &str,
        attacker: &Combatant,
        defender_id: &str,
        defender: &Combatant,
    ) -> TurnOutcome {
        let mut outcome = TurnOutcome::new(attacker_id, "attack");
        outcome.target = Some(defender_id.to_string());

        let mut dealt = damage::basic_attack_damage(attacker, defender);
        match attacker.class {
            CombatClass::Lutador => {
                let dragon = dragon_cadence::process_basic_attack(&mut self.combos, attacker_id);
                dealt = dragon_cadence::apply_buff(&self.combos, dealt, attacker_id);
                outcome.dragon = Some(dragon);
            }
            CombatClass::Armamentista => {
                let arsenal = adaptive_arsenal::record_action(
                    &mut self.combos,
                    attacker_id,
                    ActionKind::Attack,
                );
                dealt = combo::boost_by_percent(dealt, arsenal.applied_percent);
                outcome.arsenal = Some(arsenal);
            }
            CombatClass::Arcano => {
                anima_convergence::break_chain(&mut self.combos, attacker_id);
            }
        }

        let critical = self.crit.roll();
        let guarded = self.defense.is_defending(defender_id) && !critical;
        let after_guard = self.defense.apply_defense(dealt, defender_id, critical);
        outcome.critical = critical;
        outcome.damage_before_defense = Some(dealt);
        outcome.damage_dealt = Some(after_guard);
        outcome.message = hit_message(attacker_id, defender_id, after_guard, guarded, critical);
        outcome
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve_skill(
        &mut self,
        attacker_id: &str,
        attacker: &Combatant,
        defender_id: &str,
        defender: &Combatant,
        power: f64,
        anima_cost: u32,
        support: bool,
    ) -> TurnOutcome {
        let mut outcome = TurnOutcome::new(attacker_id, "skill");
        let kind = if support {
            ActionKind::Support
        } else {
            ActionKind::Attack
        };

        let mut carried_percent = 0;
        match attacker.class {
            CombatClass::Lutador => {
                dragon_cadence::break_streak(&mut self.combos, attacker_id);
            }
            CombatClass::Armamentista => {
                let arsenal = adaptive_arsenal::record_action(&mut self.combos, attacker_id, kind);
                carried_percent = arsenal.applied_percent;
                outcome.arsenal = Some(arsenal);
            }
            CombatClass::Arcano => {}
        }

        let effective_cost = if attacker.class == CombatClass::Arcano {
            let convergence =
                anima_convergence::process_cast(&mut self.combos, attacker_id, anima_cost);
            let cost = convergence.effective_cost;
            outcome.convergence = Some(convergence);
            cost
        } else {
            anima_cost
        };
        outcome.effective_anima_cost = Some(effective_cost);

        if support {
            let effect =
                combo::boost_by_percent(damage::round_half_up(power.max(0.0)), carried_percent);
            outcome.support_effect = Some(effect);
            outcome.message = format!(
                "{attacker_id} casts a support skill (effect {effect}, {effective_cost} anima)."
            );
        } else {
            outcome.target = Some(defender_id.to_string());
            let buffed = combo::boost_by_percent(
                damage::skill_attack_damage(attacker, defender, power),
                carried_percent,
            );
            let critical = self.crit.roll();
            let guarded = self.defense.is_defending(defender_id) && !critical;
            let after_guard = self.defense.apply_defense(buffed, defender_id, critical);
            outcome.critical = critical;
            outcome.damage_before_defense = Some(buffed);
            outcome.damage_dealt = Some(after_guard);
            outcome.message = format!(
                "{} ({} anima paid)",
                hit_message(attacker_id, defender_id, after_guard, guarded, critical)
                    .trim_end_matches('.'),
                effective_cost
            );
        }
        outcome
    }

    fn resolve_defend(&mut self, actor_id: &str, actor: &Combatant) -> TurnOutcome {
        let mut outcome = TurnOutcome::new(actor_id, "defend");
        self.defense.set_defending(actor_id, true);
        match actor.class {
            CombatClass::Lutador => dragon_cadence::break_streak(&mut self.combos, actor_id),
            CombatClass::Armamentista => {
                outcome.arsenal = Some(adaptive_arsenal::record_action(
                    &mut self.combos,
                    actor_id,
                    ActionKind::Defense,
                ));
            }
            CombatClass::Arcano => anima_convergence::break_chain(&mut self.combos, actor_id),
        }
        outcome.message =
            format!("{actor_id} raises a guard; the next non-critical hit is absorbed.");
        outcome
    }

    fn resolve_meditate(&mut self, actor_id: &str, actor: &Combatant) -> TurnOutcome {
        let mut outcome = TurnOutcome::new(actor_id, "meditate");
        let mut bonus_percent = 0;
        match actor.class {
            CombatClass::Lutador => dragon_cadence::break_streak(&mut self.combos, actor_id),
            CombatClass::Armamentista => {
                let arsenal = adaptive_arsenal::record_action(
                    &mut self.combos,
                    actor_id,
                    ActionKind::Meditation,
                );
                bonus_percent = arsenal.applied_percent;
                outcome.arsenal = Some(arsenal);
            }
            CombatClass::Arcano => anima_convergence::break_chain(&mut self.combos, actor_id),
        }
        let recovery = meditation::meditate_with_bonus(actor, bonus_percent);
        outcome.message = format!(
            "{actor_id} meditates, recovering {} HP and {} anima.",
            recovery.hp_recovered, recovery.anima_recovered
        );
        outcome.meditation = Some(recovery);
        outcome
    }

    fn resolve_activate(&mut self, actor_id: &str, actor: &Combatant) -> TurnOutcome {
        let mut outcome = TurnOutcome::new(actor_id, "activate_cadence");
        if actor.class != CombatClass::Lutador {
            outcome.message = format!(
                "{actor_id} cannot channel the Dragon's Cadence ({} is not a Lutador).",
                actor.class
            );
            return outcome;
        }
        let dragon = dragon_cadence::activate(&mut self.combos, actor_id);
        outcome.message = dragon.message.clone();
        outcome.dragon = Some(dragon);
        outcome
    }

    // --- granular surface -------------------------------------------------

    pub fn set_defending(&mut self, id: &str, defending: bool) {
        self.defense.set_defending(id, defending);
    }

    pub fn is_defending(&self, id: &str) -> bool {
        self.defense.is_defending(id)
    }

    /// Roll the installed crit policy and gate `damage` through `id`'s
    /// guard. Returns the damage that goes through and the crit verdict.
    pub fn apply_defense(&mut self, damage: u32, defender_id: &str) -> (u32, bool) {
        let critical = self.crit.roll();
        (
            self.defense.apply_defense(damage, defender_id, critical),
            critical,
        )
    }

    pub fn activate_dragon_cadence(&mut self, id: &str) -> DragonCadenceOutcome {
        dragon_cadence::activate(&mut self.combos, id)
    }

    pub fn combos(&self) -> &ComboRegistry {
        &self.combos
    }

    pub fn combos_mut(&mut self) -> &mut ComboRegistry {
        &mut self.combos
    }

    pub fn defense(&self) -> &DefenseTable {
        &self.defense
    }

    pub fn defense_mut(&mut self) -> &mut DefenseTable {
        &mut self.defense
    }

    // --- turn boundaries and lifecycle ------------------------------------

    /// Zero one character's defending flag. Combo buffs survive turn
    /// boundaries.
    pub fn reset_turn(&mut self, id: &str) {
        self.defense.reset(id);
    }

    /// Zero every defending flag.
    pub fn reset_turn_all(&mut self) {
        self.defense.reset_all();
    }

    pub fn clear_character(&mut self, id: &str) {
        self.defense.remove(id);
        self.combos.clear_character(id);
    }

    pub fn clear_all(&mut self) {
        self.defense.clear();
        self.combos.clear();
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            defending_characters: self.defense.defending_count(),
            active_combo_characters: self.combos.active_count(),
            tracked_characters: self.combos.tracked_count(),
        }
    }
}

fn hit_message(
    attacker_id: &str,
    defender_id: &str,
    dealt: u32,
    guarded: bool,
    critical: bool,
) -> String {
    if guarded {
        format!("{attacker_id} strikes, but {defender_id}'s guard absorbs the blow.")
    } else if critical {
        format!("{attacker_id} lands a critical hit on {defender_id} for {dealt} damage.")
    } else {
        format!("{attacker_id} hits {defender_id} for {dealt} damage.")
    }
}
