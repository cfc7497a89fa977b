// src/catalog/course.rs

use crate::catalog::prereq::Prereq;
use crate::types::{Category, Term};

/// Difficulty at or above which a course counts as "hard".
pub const HARD_DIFFICULTY: u8 = 4;

/// Largest credit count a single course may carry.
pub const MAX_COURSE_CREDITS: u32 = 30;

/// A single catalog record. Read-only once the catalog is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Canonical code, e.g. `CS 3114`.
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub category: Category,
    /// 1 (easy) to 5 (hard).
    pub difficulty: u8,
    /// 1 (light) to 5 (heavy).
    pub workload: u8,
    pub prereqs: Prereq,
    /// Mandatory for the declared major.
    pub required: bool,
    pub instructor: Option<String>,
    /// Instructor rating on a 0.0 - 5.0 scale.
    pub instructor_rating: Option<f32>,
    /// Terms the course is offered in; empty means every term.
    pub offered: Vec<Term>,
}

impl Course {
    /// A 3-credit, difficulty-3 course with no prerequisites.
    pub fn new(code: &str, name: &str, category: Category) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            credits: 3,
            category,
            difficulty: 3,
            workload: 3,
            prereqs: Prereq::none(),
            required: false,
            instructor: None,
            instructor_rating: None,
            offered: Vec::new(),
        }
    }

    pub fn is_hard(&self) -> bool {
        self.difficulty >= HARD_DIFFICULTY
    }

    pub fn is_offered_in(&self, term: Term) -> bool {
        self.offered.is_empty() || self.offered.contains(&term)
    }

    /// Whether the scheduler places this course without being told to.
    pub fn is_auto_scheduled(&self) -> bool {
        self.required || self.category.is_mandatory()
    }
}
