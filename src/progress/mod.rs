// src/progress/mod.rs

//! Degree progress: requirement categories and the aggregator that measures
//! a student's completed and planned courses against them.

pub mod aggregator;
pub mod requirement;

pub use aggregator::{
    CategoryProgress, DEFAULT_GRADUATION_CREDITS, ProgressReport, ProgressUnit, compute_progress,
    compute_progress_toward,
};
pub use requirement::{CreditFilter, RequirementCategory, RequirementRule, validate_requirements};
