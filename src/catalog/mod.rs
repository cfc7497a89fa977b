// src/catalog/mod.rs

//! Course catalog: the read-only input every planning component consumes.
//!
//! - [`code`] canonicalizes course codes and parses level filters.
//! - [`prereq`] holds the AND/OR prerequisite tree.
//! - [`course`] is the per-course record.
//! - [`graph`] indexes prerequisite edges and detects cycles.
//!
//! A [`Catalog`] is built once per process and shared by reference (or in an
//! `Arc`) across planning sessions; nothing in the crate mutates it.

pub mod code;
pub mod course;
pub mod graph;
pub mod prereq;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::errors::{PlanError, Result};

pub use code::{CodeFilter, canonical_code, split_code};
pub use course::{Course, HARD_DIFFICULTY, MAX_COURSE_CREDITS};
pub use graph::PrereqGraph;
pub use prereq::{Prereq, PrereqContext};

/// Immutable course lookup in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
    graph: PrereqGraph,
}

impl Catalog {
    /// Build a catalog, canonicalizing codes and rejecting malformed records.
    ///
    /// Rejected: an empty catalog, duplicate codes, credits outside
    /// `1..=MAX_COURSE_CREDITS`, difficulty
    /// or workload outside 1..=5, instructor ratings outside 0.0..=5.0 and
    /// `Or` nodes without children. Prerequisite cycles and references to
    /// unknown codes are accepted and only logged; they are reported again as
    /// diagnostics when plans are evaluated.
    pub fn new(mut courses: Vec<Course>) -> Result<Self> {
        if courses.is_empty() {
            return Err(PlanError::invalid(
                "catalog must contain at least one course",
            ));
        }

        let mut index = HashMap::with_capacity(courses.len());
        for (pos, course) in courses.iter_mut().enumerate() {
            course.code = canonical_code(&course.code);
            course.prereqs.canonicalize();
            validate_course(course)?;

            if index.insert(course.code.clone(), pos).is_some() {
                return Err(PlanError::invalid(format!(
                    "duplicate course code '{}' in catalog",
                    course.code
                )));
            }
        }

        let graph = PrereqGraph::from_courses(&courses);

        for course in &courses {
            for prereq in course.prereqs.course_codes() {
                if !index.contains_key(prereq) {
                    warn!(
                        course = %course.code,
                        prereq = %prereq,
                        "prerequisite is not in the catalog; it can never be satisfied"
                    );
                }
            }
        }
        for cycle in graph.cycles() {
            warn!(courses = ?cycle, "prerequisite cycle in catalog");
        }

        debug!(courses = courses.len(), "catalog built");

        Ok(Self {
            courses,
            index,
            graph,
        })
    }

    /// Look up a course. Accepts non-canonical spellings of the code.
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.position(code).map(|pos| &self.courses[pos])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    /// Position of a course in catalog order.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.index
            .get(code)
            .or_else(|| self.index.get(&canonical_code(code)))
            .copied()
    }

    /// Course at a catalog position.
    pub fn course_at(&self, pos: usize) -> Option<&Course> {
        self.courses.get(pos)
    }

    /// Courses in catalog order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Credits of a course, 0 when it is not in the catalog.
    pub fn credits_of(&self, code: &str) -> u32 {
        self.get(code).map(|c| c.credits).unwrap_or(0)
    }

    /// Summed credits of the catalog courses among `codes` that match
    /// `filter`. Codes outside the catalog add nothing.
    pub fn credits_matching<'c, I>(&self, codes: I, filter: &CodeFilter) -> u32
    where
        I: IntoIterator<Item = &'c str>,
    {
        codes
            .into_iter()
            .filter(|code| filter.matches(code))
            .map(|code| self.credits_of(code))
            .fold(0, u32::saturating_add)
    }

    pub fn graph(&self) -> &PrereqGraph {
        &self.graph
    }
}

fn validate_course(course: &Course) -> Result<()> {
    if course.code.is_empty() {
        return Err(PlanError::invalid("course code must not be empty"));
    }
    if course.credits == 0 {
        return Err(PlanError::invalid(format!(
            "course '{}' must have a positive credit count",
            course.code
        )));
    }
    if course.credits > MAX_COURSE_CREDITS {
        return Err(PlanError::invalid(format!(
            "course '{}' has {} credits (at most {MAX_COURSE_CREDITS} allowed)",
            course.code, course.credits
        )));
    }
    if !(1..=5).contains(&course.difficulty) {
        return Err(PlanError::invalid(format!(
            "course '{}' has difficulty {} (expected 1-5)",
            course.code, course.difficulty
        )));
    }
    if !(1..=5).contains(&course.workload) {
        return Err(PlanError::invalid(format!(
            "course '{}' has workload {} (expected 1-5)",
            course.code, course.workload
        )));
    }
    if let Some(rating) = course.instructor_rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(PlanError::invalid(format!(
                "course '{}' has instructor rating {rating} (expected 0.0-5.0)",
                course.code
            )));
        }
    }
    if course.prereqs.has_empty_or() {
        return Err(PlanError::invalid(format!(
            "course '{}' has an OR prerequisite group with no options",
            course.code
        )));
    }
    Ok(())
}
