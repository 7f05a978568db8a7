pub mod combatant;
pub mod validate;

pub use combatant::{load_roster, CombatantRecord, DEFAULT_ROSTER_PATH};
pub use validate::{
    validate_record, validate_roster, ValidationDiagnostic, ValidationReport, ValidationSeverity,
};
