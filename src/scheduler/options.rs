// src/scheduler/options.rs

use crate::errors::{PlanError, Result};
use crate::plan::MAX_SEMESTER_COUNT;

/// Upper bound on placement passes.
pub const MAX_PASSES: usize = 20;

pub const DEFAULT_SEMESTER_COUNT: usize = 8;

/// Per-semester credit cap in balanced mode.
pub const BALANCED_CREDIT_CAP: u32 = 15;

/// Per-semester credit cap otherwise.
pub const STANDARD_CREDIT_CAP: u32 = 18;

/// Hard (difficulty >= 4) courses allowed per semester in balanced mode.
pub const DEFAULT_MAX_HARD_PER_SEMESTER: u32 = 2;

/// Knobs of automatic plan generation.
///
/// Caps left as `None` fall back to the mode defaults. The hard-course cap
/// only applies in balanced mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    pub balanced: bool,
    pub max_credits_per_semester: Option<u32>,
    pub max_hard_per_semester: Option<u32>,
    pub semester_count: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            balanced: false,
            max_credits_per_semester: None,
            max_hard_per_semester: None,
            semester_count: DEFAULT_SEMESTER_COUNT,
        }
    }
}

impl PlanOptions {
    /// Defaults with balanced mode on.
    pub fn balanced() -> Self {
        Self {
            balanced: true,
            ..Self::default()
        }
    }

    pub fn with_semesters(mut self, semester_count: usize) -> Self {
        self.semester_count = semester_count;
        self
    }

    pub fn with_credit_cap(mut self, cap: u32) -> Self {
        self.max_credits_per_semester = Some(cap);
        self
    }

    pub fn with_hard_cap(mut self, cap: u32) -> Self {
        self.max_hard_per_semester = Some(cap);
        self
    }

    /// Effective per-semester credit cap.
    pub fn credit_cap(&self) -> u32 {
        self.max_credits_per_semester.unwrap_or(if self.balanced {
            BALANCED_CREDIT_CAP
        } else {
            STANDARD_CREDIT_CAP
        })
    }

    /// Effective hard-course cap; `None` outside balanced mode.
    pub fn hard_cap(&self) -> Option<u32> {
        self.balanced
            .then(|| self.max_hard_per_semester.unwrap_or(DEFAULT_MAX_HARD_PER_SEMESTER))
    }

    pub fn validate(&self) -> Result<()> {
        if self.semester_count == 0 {
            return Err(PlanError::invalid(
                "semester_count must be >= 1 (got 0)",
            ));
        }
        if self.semester_count > MAX_SEMESTER_COUNT {
            return Err(PlanError::invalid(format!(
                "semester_count must be at most {MAX_SEMESTER_COUNT} (got {})",
                self.semester_count
            )));
        }
        if self.credit_cap() == 0 {
            return Err(PlanError::invalid(
                "max_credits_per_semester must be >= 1 (got 0)",
            ));
        }
        Ok(())
    }
}
