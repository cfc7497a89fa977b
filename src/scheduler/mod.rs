// src/scheduler/mod.rs

//! Automatic plan generation.
//!
//! - [`candidates`] decides which courses get placed automatically.
//! - [`worklist`] is the candidate arena the passes sweep.
//! - [`planner`] contains the pass-by-pass placement state machine.
//! - [`options`] holds caps and their mode-dependent defaults.
//! - [`outcome`] defines the step and final result types.

pub mod candidates;
pub mod options;
pub mod outcome;
pub mod planner;
pub mod worklist;

use crate::catalog::Catalog;
use crate::errors::Result;
use crate::plan::StudentState;
use crate::progress::RequirementCategory;

pub use candidates::{CandidateSet, select_candidates};
pub use options::{
    BALANCED_CREDIT_CAP, DEFAULT_MAX_HARD_PER_SEMESTER, DEFAULT_SEMESTER_COUNT, MAX_PASSES,
    PlanOptions, STANDARD_CREDIT_CAP,
};
pub use outcome::{PassStep, Placement, PlanMetadata, PlanOutcome};
pub use planner::Scheduler;

/// Generate a plan in one call. Errors only on malformed options.
pub fn generate_plan(
    catalog: &Catalog,
    requirements: &[RequirementCategory],
    student: &StudentState,
    options: PlanOptions,
) -> Result<PlanOutcome> {
    Ok(Scheduler::new(catalog, requirements, student, options)?.run())
}
