// src/analysis/validator.rs

use std::ops::RangeInclusive;

use tracing::debug;

use crate::catalog::Catalog;
use crate::eval::Evaluator;
use crate::plan::{Plan, StudentState};

/// Semester credits above this are an issue.
pub const MAX_SEMESTER_CREDITS: u32 = 18;

/// Semester credits above this (up to the maximum) are a heavy load.
pub const HEAVY_SEMESTER_CREDITS: u32 = 16;

/// Semester credits in this range count as well balanced.
pub const BALANCED_SEMESTER_CREDITS: RangeInclusive<u32> = 15..=16;

/// This many hard courses in one semester is an issue; one fewer is a
/// suggestion.
pub const HARD_COURSE_CLUSTER: usize = 3;

/// Instructor rating at or above which a course earns a positive.
pub const HIGH_INSTRUCTOR_RATING: f32 = 4.5;

const ISSUE_PENALTY: i64 = 12;
const POSITIVE_BONUS: i64 = 5;

/// Categorized findings about a plan and its 0-100 score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub positives: Vec<String>,
    pub overall_score: u8,
}

impl Analysis {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Recompute `overall_score` from the current findings.
    pub(crate) fn rescore(&mut self) {
        self.overall_score = score(self.issues.len(), self.positives.len());
    }
}

/// `clamp(0, 100, 100 - 12 * issues + 5 * positives)`.
pub fn score(issues: usize, positives: usize) -> u8 {
    let raw = 100 - ISSUE_PENALTY * issues as i64 + POSITIVE_BONUS * positives as i64;
    raw.clamp(0, 100) as u8
}

/// Check a plan semester by semester.
///
/// Issues: semester overload, hard-course clusters, prerequisite violations
/// (with evaluator diagnostics) and unknown codes. Suggestions: heavy
/// semesters, pairs of hard courses, courses the student has already taken.
/// Positives: balanced semesters, highly rated instructors and a plan free
/// of prerequisite violations and unknown codes.
pub fn validate(plan: &Plan, catalog: &Catalog, student: &StudentState) -> Analysis {
    let evaluator = Evaluator::new(catalog);
    let mut out = Analysis::default();
    let mut violations = 0usize;

    for (slot, codes) in plan.semesters() {
        if codes.is_empty() {
            continue;
        }
        let label = slot.label();
        let mut credits: u32 = 0;
        let mut hard = Vec::new();

        for code in codes {
            let Some(course) = catalog.get(code) else {
                violations += 1;
                out.issues.push(format!("{label}: {code} is not in the catalog"));
                continue;
            };
            credits = credits.saturating_add(course.credits);
            if course.is_hard() {
                hard.push(code.as_str());
            }

            if student.has_taken(code) {
                out.suggestions.push(format!(
                    "{label}: {code} is already completed or in progress"
                ));
            }

            let eval = evaluator.evaluate_in_plan(code, slot.index(), plan, student);
            if !eval.satisfied {
                violations += 1;
                out.issues.push(format!(
                    "{label}: {code} missing prerequisites: {}",
                    eval.missing.join(", ")
                ));
                for diag in &eval.diagnostics {
                    out.issues.push(format!("{label}: {diag}"));
                }
            }

            if let Some(rating) = course.instructor_rating {
                if rating >= HIGH_INSTRUCTOR_RATING {
                    let who = course.instructor.as_deref().unwrap_or("instructor");
                    out.positives.push(format!(
                        "{code} is taught by a highly rated instructor ({who}, {rating:.1})"
                    ));
                }
            }
        }

        if credits > MAX_SEMESTER_CREDITS {
            out.issues.push(format!(
                "{label}: {credits} credits exceeds maximum {MAX_SEMESTER_CREDITS}"
            ));
        } else if credits > HEAVY_SEMESTER_CREDITS {
            out.suggestions
                .push(format!("{label}: heavy load ({credits} credits)"));
        } else if BALANCED_SEMESTER_CREDITS.contains(&credits) {
            out.positives
                .push(format!("{label}: well balanced load ({credits} credits)"));
        }

        if hard.len() >= HARD_COURSE_CLUSTER {
            out.issues.push(format!(
                "{label}: too many hard courses: {}",
                hard.join(", ")
            ));
        } else if hard.len() == HARD_COURSE_CLUSTER - 1 {
            out.suggestions.push(format!(
                "{label}: two challenging courses together: {}",
                hard.join(", ")
            ));
        }
    }

    if !plan.is_empty() && violations == 0 {
        out.positives
            .push("No prerequisite violations detected".to_string());
    }

    out.rescore();
    debug!(
        issues = out.issues.len(),
        suggestions = out.suggestions.len(),
        positives = out.positives.len(),
        score = out.overall_score,
        "plan validated"
    );
    out
}
