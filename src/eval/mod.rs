// src/eval/mod.rs

//! Prerequisite evaluation.
//!
//! - [`evaluator`] answers "are this course's prerequisites met as of this
//!   slot?" over AND/OR trees, fail-closed.
//! - [`diagnostic`] describes the fail-closed conditions it can hit.
//! - [`roadmap`] lists which courses a taken-set unlocks.

pub mod diagnostic;
pub mod evaluator;
pub mod roadmap;

pub use diagnostic::Diagnostic;
pub use evaluator::{Evaluation, Evaluator, TakenSet};
pub use roadmap::{AvailableCourse, LockedCourse, Roadmap, roadmap};
