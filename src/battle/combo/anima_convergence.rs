//! Anima Convergence: the Arcano combo.
//!
//! Consecutive anima-costing casts earn a growing cost discount with a
//! one-cast lag: the reduction applied to cast `n` is the level reached
//! after cast `n - 1`, so the first cast always pays full price. Breaking
//! the chain zeroes the counter but the stored percent survives and is
//! consumed by the next costing cast, after which the track restarts at 2%.
//! Both quirks are deliberate source behavior; do not "fix" them.

use serde::Serialize;

use crate::battle::combo::registry::ComboRegistry;
use crate::battle::damage::round_half_up;

/// Reduction percent gained per consecutive costing cast.
pub const REDUCTION_PER_CAST: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceOutcome {
    pub anima_cost: u32,
    pub effective_cost: u32,
    /// Percent applied to this cast (the level reached before it).
    pub applied_percent: u32,
    /// Percent stored for the next costing cast.
    pub stored_percent: u32,
    pub consecutive_casts: u32,
    pub message: String,
}

/// Discount and count one cast. Zero-cost casts are transparent: no
/// increment, no discount consumed.
pub fn process_cast(registry: &mut ComboRegistry, id: &str, anima_cost: u32) -> ConvergenceOutcome {
    if anima_cost == 0 {
        let (consecutive, stored) = registry
            .state_for(id)
            .map(|state| {
                (
                    state.convergence.consecutive_casts,
                    state.convergence.reduction_percent,
                )
            })
            .unwrap_or((0, 0));
        return ConvergenceOutcome {
            anima_cost: 0,
            effective_cost: 0,
            applied_percent: 0,
            stored_percent: stored,
            consecutive_casts: consecutive,
            message: format!("{id}'s cast costs no anima; the Convergence is unchanged."),
        };
    }

    let convergence = &mut registry.state_mut(id).convergence;
    let applied = convergence.reduction_percent;
    let effective = round_half_up(f64::from(anima_cost) * (1.0 - f64::from(applied) / 100.0));
    convergence.consecutive_casts += 1;
    convergence.reduction_percent = convergence.consecutive_casts * REDUCTION_PER_CAST;
    ConvergenceOutcome {
        anima_cost,
        effective_cost: effective,
        applied_percent: applied,
        stored_percent: convergence.reduction_percent,
        consecutive_casts: convergence.consecutive_casts,
        message: format!(
            "Anima Convergence: cast {} pays {} anima ({}% off), next discount {}%.",
            convergence.consecutive_casts, effective, applied, convergence.reduction_percent
        ),
    }
}

/// Zero the cast counter. The stored percent deliberately survives until the
/// next costing cast consumes it.
pub fn break_chain(registry: &mut ComboRegistry, id: &str) {
    if let Some(state) = registry.existing_state_mut(id) {
        state.convergence.consecutive_casts = 0;
    }
}
