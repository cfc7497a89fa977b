// src/analysis/mod.rs

//! Plan quality checks.
//!
//! - [`validator`] scores a plan on load, difficulty and prerequisites.
//! - [`degree`] adds degree-progress findings on top.
//! - [`simulate`] compares a plan with and without one extra course.
//! - [`suggest`] ranks courses that would close open requirements.

pub mod degree;
pub mod simulate;
pub mod suggest;
pub mod validator;

pub use degree::{DegreeAnalysis, analyze_plan};
pub use simulate::{Recommendation, Simulation, simulate_addition};
pub use suggest::{CourseSuggestion, MAX_COURSE_SUGGESTIONS, Priority, suggest_courses};
pub use validator::{
    Analysis, BALANCED_SEMESTER_CREDITS, HARD_COURSE_CLUSTER, HEAVY_SEMESTER_CREDITS,
    HIGH_INSTRUCTOR_RATING, MAX_SEMESTER_CREDITS, score, validate,
};
