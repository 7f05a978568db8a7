//! Per-character combo state store.
//!
//! One entry per character id, holding the three independent mechanic
//! slices. Entries are created lazily on first write; reads for unknown ids
//! see defaults. Clearing is per character or global; turn boundaries never
//! touch combo state.

use std::collections::HashMap;

use crate::battle::combo::adaptive_arsenal::ActionKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragonCadenceState {
    /// Set once the cadence skill is activated; survives streak breaks.
    pub armed: bool,
    pub consecutive_basic_attacks: u32,
    pub buff_percent: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdaptiveArsenalState {
    pub last_action: Option<ActionKind>,
    pub consecutive_alternations: u32,
    pub buff_percent: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimaConvergenceState {
    pub consecutive_casts: u32,
    pub reduction_percent: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComboState {
    pub dragon: DragonCadenceState,
    pub arsenal: AdaptiveArsenalState,
    pub convergence: AnimaConvergenceState,
}

#[derive(Debug, Clone, Default)]
pub struct ComboRegistry {
    states: HashMap<String, ComboState>,
}

impl ComboRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view; `None` for ids never written.
    pub fn state_for(&self, id: &str) -> Option<&ComboState> {
        self.states.get(id)
    }

    /// Mutable slot, created on first use.
    pub fn state_mut(&mut self, id: &str) -> &mut ComboState {
        self.states.entry(id.to_string()).or_default()
    }

    /// Mutable slot only if it already exists. Used by break operations so a
    /// no-op break does not allocate state.
    pub fn existing_state_mut(&mut self, id: &str) -> Option<&mut ComboState> {
        self.states.get_mut(id)
    }

    pub fn clear_character(&mut self, id: &str) {
        self.states.remove(id);
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn tracked_count(&self) -> usize {
        self.states.len()
    }

    /// Characters whose combo state differs from the defaults.
    pub fn active_count(&self) -> usize {
        self.states
            .values()
            .filter(|state| **state != ComboState::default())
            .count()
    }
}
