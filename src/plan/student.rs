// src/plan/student.rs

use std::collections::BTreeSet;

use crate::catalog::canonical_code;
use crate::errors::{PlanError, Result};

/// Courses the student has finished or is currently enrolled in.
///
/// Both sets are canonicalized and must be disjoint. They are fixed for the
/// duration of a planning session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentState {
    completed: BTreeSet<String>,
    in_progress: BTreeSet<String>,
}

impl StudentState {
    pub fn new<I, J, S, T>(completed: I, in_progress: J) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let completed: BTreeSet<String> = completed
            .into_iter()
            .map(|c| canonical_code(c.as_ref()))
            .collect();
        let in_progress: BTreeSet<String> = in_progress
            .into_iter()
            .map(|c| canonical_code(c.as_ref()))
            .collect();

        let overlap: Vec<&str> = completed
            .intersection(&in_progress)
            .map(String::as_str)
            .collect();
        if !overlap.is_empty() {
            return Err(PlanError::invalid(format!(
                "courses cannot be both completed and in progress: {}",
                overlap.join(", ")
            )));
        }

        Ok(Self {
            completed,
            in_progress,
        })
    }

    pub fn completed(&self) -> &BTreeSet<String> {
        &self.completed
    }

    pub fn in_progress(&self) -> &BTreeSet<String> {
        &self.in_progress
    }

    pub fn is_completed(&self, code: &str) -> bool {
        self.completed.contains(code)
    }

    pub fn is_in_progress(&self, code: &str) -> bool {
        self.in_progress.contains(code)
    }

    /// Completed or in progress.
    pub fn has_taken(&self, code: &str) -> bool {
        self.is_completed(code) || self.is_in_progress(code)
    }

    /// Completed and in-progress codes.
    pub fn taken(&self) -> impl Iterator<Item = &str> {
        self.completed
            .iter()
            .chain(self.in_progress.iter())
            .map(String::as_str)
    }
}
