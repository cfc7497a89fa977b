// src/plan/mod.rs

//! Semester grid and student state.
//!
//! The [`Plan`] is the only mutable entity of a planning session. It is
//! built either by the scheduler or from a manually edited assignment, and
//! always keeps the "one slot per course" invariant.

pub mod slot;
pub mod student;

use std::collections::BTreeSet;

use crate::catalog::canonical_code;
use crate::errors::{PlanError, Result};

pub use slot::SemesterSlot;
pub use student::StudentState;

/// Largest plan accepted: twelve academic years of Fall and Spring terms.
pub const MAX_SEMESTER_COUNT: usize = 24;

/// Assignment of course codes to ordered semester slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    semesters: Vec<BTreeSet<String>>,
}

impl Plan {
    /// An empty plan with `semester_count` slots, at most
    /// [`MAX_SEMESTER_COUNT`].
    pub fn new(semester_count: usize) -> Result<Self> {
        if semester_count == 0 {
            return Err(PlanError::invalid(
                "a plan needs at least one semester slot",
            ));
        }
        if semester_count > MAX_SEMESTER_COUNT {
            return Err(PlanError::invalid(format!(
                "a plan has at most {MAX_SEMESTER_COUNT} semester slots (got {semester_count})"
            )));
        }
        Ok(Self {
            semesters: vec![BTreeSet::new(); semester_count],
        })
    }

    /// Build a plan from `(slot index, codes)` pairs, rejecting slots out of
    /// range and courses assigned more than once.
    pub fn from_assignments<I, C, S>(semester_count: usize, assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, C)>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut plan = Plan::new(semester_count)?;
        for (slot, codes) in assignments {
            for code in codes {
                plan.place(code.as_ref(), slot)?;
            }
        }
        Ok(plan)
    }

    pub fn semester_count(&self) -> usize {
        self.semesters.len()
    }

    /// Place a course into a slot.
    pub fn place(&mut self, code: &str, slot: usize) -> Result<()> {
        let code = canonical_code(code);
        if slot >= self.semesters.len() {
            return Err(PlanError::invalid(format!(
                "cannot place '{code}' in slot {slot}: plan has {} semesters",
                self.semesters.len()
            )));
        }
        if let Some(existing) = self.slot_of(&code) {
            return Err(PlanError::invalid(format!(
                "course '{code}' is already placed in {}",
                SemesterSlot::new(existing).label()
            )));
        }
        self.semesters[slot].insert(code);
        Ok(())
    }

    /// Insert an already canonical code known not to be in the plan.
    pub(crate) fn assign(&mut self, code: &str, slot: usize) {
        self.semesters[slot].insert(code.to_string());
    }

    /// Remove a course, returning the slot it occupied.
    pub fn remove(&mut self, code: &str) -> Option<usize> {
        let code = canonical_code(code);
        let slot = self.slot_of(&code)?;
        self.semesters[slot].remove(&code);
        Some(slot)
    }

    /// Slot index holding `code`, if placed.
    pub fn slot_of(&self, code: &str) -> Option<usize> {
        self.semesters.iter().position(|s| s.contains(code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.slot_of(code).is_some()
    }

    /// Courses in one slot.
    pub fn semester(&self, slot: usize) -> Option<&BTreeSet<String>> {
        self.semesters.get(slot)
    }

    /// Slots in order with their courses.
    pub fn semesters(&self) -> impl Iterator<Item = (SemesterSlot, &BTreeSet<String>)> {
        self.semesters
            .iter()
            .enumerate()
            .map(|(idx, courses)| (SemesterSlot::new(idx), courses))
    }

    /// Courses placed strictly before `slot`.
    pub fn courses_before(&self, slot: usize) -> impl Iterator<Item = &str> {
        self.semesters
            .iter()
            .take(slot)
            .flat_map(|s| s.iter().map(String::as_str))
    }

    /// Every placed course.
    pub fn all_courses(&self) -> BTreeSet<String> {
        self.semesters.iter().flatten().cloned().collect()
    }

    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.course_count() == 0
    }

    /// Response shape: slot id and its courses, in slot order.
    pub fn as_table(&self) -> Vec<(String, Vec<String>)> {
        self.semesters()
            .map(|(slot, courses)| (slot.id(), courses.iter().cloned().collect()))
            .collect()
    }
}
