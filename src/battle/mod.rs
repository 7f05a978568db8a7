pub mod class;
pub mod combatant;
pub mod combo;
pub mod crit;
pub mod damage;
pub mod defense;
pub mod meditation;
pub mod outcome;
pub mod session;

pub use class::{
    class_modifier, CombatClass, ParseClassError, ADVANTAGE_MODIFIER, DISADVANTAGE_MODIFIER,
};
pub use combatant::Combatant;
pub use combo::{
    boost_by_percent, ActionKind, ArsenalOutcome, ComboRegistry, ComboState, ConvergenceOutcome,
    DragonCadenceOutcome, ParseActionKindError,
};
pub use crit::{CritPolicy, NeverCrit, SeededCrit};
pub use damage::{basic_attack_damage, round_half_up, skill_attack_damage};
pub use defense::DefenseTable;
pub use meditation::{meditate, meditate_with_bonus, MeditationOutcome};
pub use outcome::{ActionDeclaration, TurnOutcome};
pub use session::{BattleSession, SessionSummary};
