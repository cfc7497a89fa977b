// src/scheduler/outcome.rs

//! Result types of the scheduler: per-pass steps and the final outcome.

use crate::plan::{Plan, SemesterSlot};

/// A course placed during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub code: String,
    pub slot: SemesterSlot,
}

/// Structured result of a single placement pass.
///
/// Useful for callers that want to step the scheduler manually, e.g. to stop
/// at a pass boundary when an external time budget runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassStep {
    /// 1-based number of the pass that produced this step.
    pub pass: usize,
    /// Courses placed in this pass, in placement order.
    pub placed: Vec<Placement>,
    /// Whether the scheduler has reached its fixed point (or the pass cap)
    /// and further passes would do nothing.
    pub settled: bool,
}

/// Summary figures of a generated plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanMetadata {
    pub courses_placed: usize,
    pub credits_planned: u32,
    /// Credits of completed and in-progress courses.
    pub existing_credits: u32,
    pub semesters_used: usize,
    /// Credits still missing to graduate after this plan, clamped at zero.
    pub credit_shortfall: u32,
}

/// Final result of plan generation. Always a best-effort plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutcome {
    pub plan: Plan,
    /// One entry per unplaced course, in catalog order.
    pub warnings: Vec<String>,
    pub unplaced: Vec<String>,
    pub passes: usize,
    pub metadata: PlanMetadata,
}
