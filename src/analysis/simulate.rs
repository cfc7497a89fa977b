// src/analysis/simulate.rs

use tracing::debug;

use crate::analysis::validator::validate;
use crate::catalog::{Catalog, canonical_code};
use crate::errors::Result;
use crate::plan::{Plan, SemesterSlot, StudentState};

/// Verdict on a hypothetical addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// The score does not drop.
    Good,
    Caution,
}

/// Effect of adding one course to one semester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    pub course: String,
    pub slot: SemesterSlot,
    pub score_before: u8,
    pub score_after: u8,
    pub delta: i32,
    /// Issues present after the addition but not before.
    pub new_issues: Vec<String>,
    pub new_suggestions: Vec<String>,
    pub recommendation: Recommendation,
}

/// Validate `plan` with and without `code` in `slot`. The caller's plan is
/// left untouched. Fails when the slot is out of range or the course is
/// already placed.
pub fn simulate_addition(
    code: &str,
    slot: usize,
    plan: &Plan,
    catalog: &Catalog,
    student: &StudentState,
) -> Result<Simulation> {
    let mut trial = plan.clone();
    trial.place(code, slot)?;

    let before = validate(plan, catalog, student);
    let after = validate(&trial, catalog, student);

    let new_issues: Vec<String> = after
        .issues
        .iter()
        .filter(|i| !before.issues.contains(i))
        .cloned()
        .collect();
    let new_suggestions: Vec<String> = after
        .suggestions
        .iter()
        .filter(|s| !before.suggestions.contains(s))
        .cloned()
        .collect();

    let delta = i32::from(after.overall_score) - i32::from(before.overall_score);
    let recommendation = if delta >= 0 {
        Recommendation::Good
    } else {
        Recommendation::Caution
    };

    let slot = SemesterSlot::new(slot);
    debug!(course = %code, semester = %slot, delta, "simulated course addition");

    Ok(Simulation {
        course: canonical_code(code),
        slot,
        score_before: before.overall_score,
        score_after: after.overall_score,
        delta,
        new_issues,
        new_suggestions,
        recommendation,
    })
}
