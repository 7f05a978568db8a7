//! Adaptive Arsenal: the Armamentista combo.
//!
//! Alternating action kinds grow the buff; repeating a kind resets it. The
//! buff earned by an alternation is applied to the *next* alternating
//! action, never the one that earned it, and defense actions never receive
//! the bonus even when a buff is carried.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::battle::combo::registry::ComboRegistry;
use crate::battle::combo::boost_by_percent;

/// Buff percent gained per consecutive alternation.
pub const BUFF_PER_ALTERNATION: u32 = 3;

/// The action domain the arsenal distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Attack,
    Support,
    Defense,
    Meditation,
}

impl ActionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Support => "support",
            Self::Defense => "defense",
            Self::Meditation => "meditation",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseActionKindError {
    pub raw: String,
}

impl fmt::Display for ParseActionKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown action kind '{}' (expected attack, support, defense or meditation)",
            self.raw
        )
    }
}

impl std::error::Error for ParseActionKindError {}

impl FromStr for ActionKind {
    type Err = ParseActionKindError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "attack" => Ok(Self::Attack),
            "support" => Ok(Self::Support),
            "defense" => Ok(Self::Defense),
            "meditation" => Ok(Self::Meditation),
            _ => Err(ParseActionKindError {
                raw: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArsenalOutcome {
    pub action: ActionKind,
    pub alternated: bool,
    pub consecutive_alternations: u32,
    /// Percent applied to this action: the buff carried from the previous
    /// alternation (always 0 for defense actions and for the first action).
    pub applied_percent: u32,
    /// Percent stored for the next alternating action.
    pub stored_percent: u32,
    pub message: String,
}

/// Record one action and advance the alternation state. The returned
/// `applied_percent` is what the current action's effectiveness should be
/// multiplied with.
pub fn record_action(registry: &mut ComboRegistry, id: &str, action: ActionKind) -> ArsenalOutcome {
    let arsenal = &mut registry.state_mut(id).arsenal;
    match arsenal.last_action {
        None => {
            arsenal.last_action = Some(action);
            ArsenalOutcome {
                action,
                alternated: false,
                consecutive_alternations: 0,
                applied_percent: 0,
                stored_percent: 0,
                message: format!("Adaptive Arsenal watches {id}'s first action ({action})."),
            }
        }
        Some(last) if last != action => {
            arsenal.consecutive_alternations += 1;
            let applied = if action == ActionKind::Defense {
                0
            } else {
                arsenal.buff_percent
            };
            arsenal.buff_percent = arsenal.consecutive_alternations * BUFF_PER_ALTERNATION;
            arsenal.last_action = Some(action);
            ArsenalOutcome {
                action,
                alternated: true,
                consecutive_alternations: arsenal.consecutive_alternations,
                applied_percent: applied,
                stored_percent: arsenal.buff_percent,
                message: format!(
                    "Adaptive Arsenal: alternation {} ({last} -> {action}), +{}% applied, +{}% ready.",
                    arsenal.consecutive_alternations, applied, arsenal.buff_percent
                ),
            }
        }
        Some(_) => {
            arsenal.consecutive_alternations = 0;
            arsenal.buff_percent = 0;
            arsenal.last_action = Some(action);
            ArsenalOutcome {
                action,
                alternated: false,
                consecutive_alternations: 0,
                applied_percent: 0,
                stored_percent: 0,
                message: format!("Adaptive Arsenal: {id} repeated {action}; the buff resets."),
            }
        }
    }
}

/// Multiply `value` by the currently stored buff. Defense actions are never
/// buffed. Note this reads the *stored* percent; within a composed turn the
/// carried value comes from [record_action]'s `applied_percent` instead.
pub fn apply_buff(registry: &ComboRegistry, value: u32, id: &str, action: ActionKind) -> u32 {
    if action == ActionKind::Defense {
        return value;
    }
    let percent = registry
        .state_for(id)
        .map(|state| state.arsenal.buff_percent)
        .unwrap_or(0);
    boost_by_percent(value, percent)
}
