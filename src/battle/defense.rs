//! Defending flags and the incoming-damage gate.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefenseState {
    pub defending: bool,
}

/// Per-character defending flags, keyed by character id. State is created on
/// first write; reads for unknown ids default to not defending.
#[derive(Debug, Clone, Default)]
pub struct DefenseTable {
    states: HashMap<String, DefenseState>,
}

impl DefenseTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_defending(&mut self, id: &str, defending: bool) {
        self.states.entry(id.to_string()).or_default().defending = defending;
    }

    pub fn is_defending(&self, id: &str) -> bool {
        self.states.get(id).map(|s| s.defending).unwrap_or(false)
    }

    /// A defending character takes zero damage from a non-critical hit;
    /// a critical hit goes through the guard untouched.
    pub fn apply_defense(&self, damage: u32, id: &str, critical: bool) -> u32 {
        if self.is_defending(id) && !critical {
            0
        } else {
            damage
        }
    }

    /// Zero one character's flag at a turn boundary. Combo state is not
    /// touched here.
    pub fn reset(&mut self, id: &str) {
        if let Some(state) = self.states.get_mut(id) {
            state.defending = false;
        }
    }

    /// Zero every flag at a turn boundary.
    pub fn reset_all(&mut self) {
        for state in self.states.values_mut() {
            state.defending = false;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.states.remove(id);
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn defending_count(&self) -> usize {
        self.states.values().filter(|s| s.defending).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_defaults_to_not_defending() {
        let table = DefenseTable::new();
        assert!(!table.is_defending("ghost"));
        assert_eq!(table.apply_defense(40, "ghost", false), 40);
    }

    #[test]
    fn guard_blocks_only_non_critical_hits() {
        let mut table = DefenseTable::new();
        table.set_defending("tank", true);
        assert_eq!(table.apply_defense(40, "tank", false), 0);
        assert_eq!(table.apply_defense(40, "tank", true), 40);
    }

    #[test]
    fn reset_clears_flags_without_removing_state() {
        let mut table = DefenseTable::new();
        table.set_defending("a", true);
        table.set_defending("b", true);
        table.reset("a");
        assert!(!table.is_defending("a"));
        assert!(table.is_defending("b"));
        table.reset_all();
        assert_eq!(table.defending_count(), 0);
    }
}
