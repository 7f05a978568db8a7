//! Roster validation at the engine boundary.
//!
//! The formulas themselves clamp but never reject, so malformed stats are
//! caught once here before records reach a session.

use std::collections::HashSet;
use std::fmt;
use std::fs;

use crate::battle::CombatClass;
use crate::data::combatant::CombatantRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Validate a roster file. I/O and JSON shape problems come back as `Err`;
/// content problems land in the report.
pub fn validate_roster(path: &str) -> Result<ValidationReport, String> {
    let raw = fs::read_to_string(path).map_err(|err| format!("unable to read '{path}': {err}"))?;
    let records: Vec<CombatantRecord> = match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(serde_json::Value::Object(map)) => {
            let list = map
                .get("combatants")
                .or_else(|| map.get("personagens"))
                .cloned()
                .ok_or_else(|| format!("'{path}' has no combatants array"))?;
            serde_json::from_value(list)
                .map_err(|err| format!("unable to parse combatants in '{path}': {err}"))?
        }
        Ok(other) => serde_json::from_value(other)
            .map_err(|err| format!("unable to parse combatants in '{path}': {err}"))?,
        Err(err) => return Err(format!("unable to parse json '{path}': {err}")),
    };

    let mut report = ValidationReport::default();
    let mut seen_ids = HashSet::new();
    for record in &records {
        if !seen_ids.insert(record.id.clone()) {
            report.push(
                ValidationSeverity::Error,
                record.id.clone(),
                "duplicate combatant id",
            );
        }
        validate_record(record, &mut report);
    }
    Ok(report)
}

pub fn validate_record(record: &CombatantRecord, report: &mut ValidationReport) {
    let ctx = if record.id.is_empty() {
        report.push(ValidationSeverity::Error, "<missing id>", "empty id");
        "<missing id>".to_string()
    } else {
        record.id.clone()
    };

    if record.class.parse::<CombatClass>().is_err() {
        report.push(
            ValidationSeverity::Error,
            ctx.clone(),
            format!("unknown class '{}'", record.class),
        );
    }

    let stats = [
        ("attack", record.attack),
        ("defense", record.defense),
        ("crit_multiplier", record.crit_multiplier),
        ("hp", record.hp),
        ("max_hp", record.max_hp),
        ("anima", record.anima),
        ("max_anima", record.max_anima),
    ];
    for (field, value) in stats {
        if !value.is_finite() {
            report.push(
                ValidationSeverity::Error,
                ctx.clone(),
                format!("{field} is not a finite number"),
            );
        } else if value < 0.0 {
            report.push(
                ValidationSeverity::Error,
                ctx.clone(),
                format!("{field} is negative ({value})"),
            );
        }
    }

    if record.crit_multiplier == 0.0 {
        report.push(
            ValidationSeverity::Error,
            ctx.clone(),
            "crit_multiplier of zero nullifies all damage",
        );
    }
    if record.max_hp == 0.0 {
        report.push(ValidationSeverity::Error, ctx.clone(), "max_hp is zero");
    }
    if record.hp > record.max_hp {
        report.push(
            ValidationSeverity::Warning,
            ctx.clone(),
            format!("hp {} exceeds max_hp {}", record.hp, record.max_hp),
        );
    }
    if record.anima > record.max_anima {
        report.push(
            ValidationSeverity::Warning,
            ctx.clone(),
            format!("anima {} exceeds max_anima {}", record.anima, record.max_anima),
        );
    }
    if record.attack == 0.0 {
        report.push(ValidationSeverity::Info, ctx, "attack is zero");
    }
}
