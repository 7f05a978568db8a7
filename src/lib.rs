//! Battle mechanics engine: class-advantage damage resolution, defend and
//! meditate mitigation, and the three sequence-driven combo mechanics
//! (Dragon's Cadence, Adaptive Arsenal, Anima Convergence).
//!
//! The engine is fully synchronous and keeps all state inside a
//! [battle::BattleSession]; callers own one session per battle and feed it
//! combatant snapshots plus declared actions, one turn at a time.

pub mod battle;
pub mod cli;
pub mod data;
pub mod sim;
