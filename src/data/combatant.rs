//! Combatant snapshot records at the engine boundary.
//!
//! Raw records are what callers (or the original game's JSON exports) hand
//! in; they are validated once here and converted into the engine-facing
//! [Combatant]. Portuguese export field names are accepted as aliases so
//! existing rosters load unchanged.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::battle::{Combatant, ParseClassError};

pub const DEFAULT_ROSTER_PATH: &str = "data/roster.json";

fn default_crit() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantRecord {
    pub id: String,
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(alias = "classe")]
    pub class: String,
    #[serde(alias = "ataque")]
    pub attack: f64,
    #[serde(alias = "defesa")]
    pub defense: f64,
    #[serde(default = "default_crit", alias = "critico")]
    pub crit_multiplier: f64,
    #[serde(alias = "vida")]
    pub hp: f64,
    #[serde(alias = "maxHP", alias = "vidaMaxima")]
    pub max_hp: f64,
    pub anima: f64,
    #[serde(alias = "maxAnima", alias = "animaMaxima")]
    pub max_anima: f64,
}

impl CombatantRecord {
    /// Convert into the engine snapshot. The only hard failure is an unknown
    /// class name; range problems are reported by the validator instead.
    pub fn to_combatant(&self) -> Result<Combatant, ParseClassError> {
        Ok(Combatant {
            class: self.class.parse()?,
            attack: self.attack,
            defense: self.defense,
            crit_multiplier: self.crit_multiplier,
            hp: self.hp,
            max_hp: self.max_hp,
            anima: self.anima,
            max_anima: self.max_anima,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(alias = "personagens")]
    combatants: Vec<CombatantRecord>,
}

/// Load a roster file (`{"combatants": [...]}`).
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<CombatantRecord>, std::io::Error> {
    let raw = fs::read_to_string(path)?;
    let parsed: RosterFile = serde_json::from_str(&raw).map_err(std::io::Error::other)?;
    Ok(parsed.combatants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::CombatClass;

    #[test]
    fn portuguese_aliases_deserialize() {
        let raw = r#"{
            "id": "liu",
            "nome": "Liu",
            "classe": "Lutador",
            "ataque": 100,
            "defesa": 40,
            "critico": 1.2,
            "vida": 90,
            "vidaMaxima": 120,
            "anima": 30,
            "animaMaxima": 60
        }"#;
        let record: CombatantRecord = serde_json::from_str(raw).expect("record parses");
        let combatant = record.to_combatant().expect("class parses");
        assert_eq!(combatant.class, CombatClass::Lutador);
        assert_eq!(combatant.attack, 100.0);
        assert_eq!(combatant.max_hp, 120.0);
        assert_eq!(combatant.crit_multiplier, 1.2);
    }

    #[test]
    fn crit_multiplier_defaults_to_one() {
        let raw = r#"{
            "id": "mira",
            "class": "Arcano",
            "attack": 80,
            "defense": 30,
            "hp": 100,
            "max_hp": 100,
            "anima": 50,
            "max_anima": 50
        }"#;
        let record: CombatantRecord = serde_json::from_str(raw).expect("record parses");
        assert_eq!(record.crit_multiplier, 1.0);
    }

    #[test]
    fn roster_file_loads_by_either_key() {
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("animus-roster-{stamp}.json"));
        fs::write(
            &path,
            r#"{"personagens":[{"id":"liu","classe":"Lutador","ataque":100,"defesa":40,"vida":90,"vidaMaxima":120,"anima":30,"animaMaxima":60}]}"#,
        )
        .expect("fixture should be written");

        let roster = load_roster(&path).expect("roster loads");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "liu");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn unknown_class_is_a_hard_error() {
        let record = CombatantRecord {
            id: "x".to_string(),
            name: None,
            class: "Bardo".to_string(),
            attack: 1.0,
            defense: 1.0,
            crit_multiplier: 1.0,
            hp: 1.0,
            max_hp: 1.0,
            anima: 1.0,
            max_anima: 1.0,
        };
        assert!(record.to_combatant().is_err());
    }
}
