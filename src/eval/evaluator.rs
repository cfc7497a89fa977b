// src/eval/evaluator.rs

use std::collections::HashSet;

use tracing::trace;

use crate::catalog::{Catalog, CodeFilter, Course, PrereqContext};
use crate::eval::diagnostic::Diagnostic;
use crate::plan::{Plan, StudentState};

/// Courses considered satisfied as of some semester slot.
#[derive(Debug, Clone, Default)]
pub struct TakenSet<'a> {
    codes: HashSet<&'a str>,
}

impl<'a> TakenSet<'a> {
    /// Completed, in-progress, and everything placed before `slot`.
    pub fn for_slot(student: &'a StudentState, plan: &'a Plan, slot: usize) -> Self {
        let codes = student.taken().chain(plan.courses_before(slot)).collect();
        Self { codes }
    }

    /// A taken-set made of explicit codes (assumed canonical).
    pub fn from_codes<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.codes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Result of evaluating one course's prerequisites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub satisfied: bool,
    /// Human-readable missing prerequisites (`CS 2114`, `one of: A, B`).
    pub missing: Vec<String>,
    /// Fail-closed conditions met while evaluating. Only filled when the
    /// course is unsatisfied.
    pub diagnostics: Vec<Diagnostic>,
}

impl Evaluation {
    fn satisfied() -> Self {
        Self {
            satisfied: true,
            missing: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

/// Stateless prerequisite evaluator over a shared catalog.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Evaluator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Whether `code` can be taken in `slot` of `plan`.
    pub fn prereqs_met(
        &self,
        code: &str,
        slot: usize,
        plan: &Plan,
        student: &StudentState,
    ) -> bool {
        self.evaluate_in_plan(code, slot, plan, student).satisfied
    }

    /// Full evaluation of `code` in `slot` of `plan`.
    pub fn evaluate_in_plan(
        &self,
        code: &str,
        slot: usize,
        plan: &Plan,
        student: &StudentState,
    ) -> Evaluation {
        let taken = TakenSet::for_slot(student, plan, slot);
        self.evaluate(code, &taken)
    }

    /// Evaluate `code` against an explicit taken-set.
    ///
    /// A course outside the catalog is unsatisfied. Leaves are unsatisfied
    /// when they name a code outside the catalog, the evaluated course
    /// itself, or a course that is not taken; the latter two are reported
    /// as cycles when applicable.
    pub fn evaluate(&self, code: &str, taken: &TakenSet<'_>) -> Evaluation {
        let Some(course) = self.catalog.get(code) else {
            return Evaluation {
                satisfied: false,
                missing: Vec::new(),
                diagnostics: vec![Diagnostic::UnknownCourse {
                    course: code.to_string(),
                }],
            };
        };

        let ctx = CourseContext {
            catalog: self.catalog,
            course,
            taken,
        };
        if course.prereqs.is_satisfied_by(&ctx) {
            trace!(course = %course.code, "prerequisites satisfied");
            return Evaluation::satisfied();
        }

        let missing = course.prereqs.missing_by(&ctx);
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        for prereq in course.prereqs.course_codes() {
            if let Some(diag) = self.diagnose_leaf(course, prereq, taken) {
                if !diagnostics.contains(&diag) {
                    diagnostics.push(diag);
                }
            }
        }

        Evaluation {
            satisfied: false,
            missing,
            diagnostics,
        }
    }

    fn diagnose_leaf(
        &self,
        course: &Course,
        prereq: &str,
        taken: &TakenSet<'_>,
    ) -> Option<Diagnostic> {
        if prereq == course.code {
            return Some(Diagnostic::CyclicPrerequisite {
                course: course.code.clone(),
                cycle: vec![course.code.clone()],
            });
        }
        if !self.catalog.contains(prereq) {
            return Some(Diagnostic::MissingCourse {
                course: course.code.clone(),
                prereq: prereq.to_string(),
            });
        }
        if !taken.contains(prereq) && self.catalog.graph().in_same_cycle(&course.code, prereq) {
            let cycle = self
                .catalog
                .graph()
                .cycle_containing(&course.code)
                .map(<[String]>::to_vec)
                .unwrap_or_default();
            return Some(Diagnostic::CyclicPrerequisite {
                course: course.code.clone(),
                cycle,
            });
        }
        None
    }
}

/// One course's prerequisites against a taken-set. The course itself never
/// counts, neither as a leaf nor toward a credit threshold.
struct CourseContext<'e, 't> {
    catalog: &'e Catalog,
    course: &'e Course,
    taken: &'e TakenSet<'t>,
}

impl PrereqContext for CourseContext<'_, '_> {
    fn has_course(&self, code: &str) -> bool {
        code != self.course.code && self.catalog.contains(code) && self.taken.contains(code)
    }

    fn credits_in(&self, filter: &CodeFilter) -> u32 {
        let owner = self.course.code.as_str();
        self.catalog
            .credits_matching(self.taken.codes().filter(|c| *c != owner), filter)
    }
}
