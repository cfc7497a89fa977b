// src/analysis/suggest.rs

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::catalog::Catalog;
use crate::eval::{Evaluator, TakenSet};
use crate::plan::{Plan, StudentState};
use crate::progress::{ProgressReport, RequirementCategory, RequirementRule};

/// How many ranked suggestions [`crate::analysis::analyze_plan`] keeps.
pub const MAX_COURSE_SUGGESTIONS: usize = 10;

/// Suggestion rank. Orders from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// A course an `all` category still lists.
    High,
    /// An option of an open `choose` category.
    Medium,
    /// A course counting toward an open `credits` category.
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course that would close an open requirement category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSuggestion {
    pub course: String,
    pub priority: Priority,
    pub reason: String,
    /// Whether completed and in-progress courses already satisfy the
    /// course's prerequisites.
    pub prereqs_met: bool,
    pub missing_prereqs: Vec<String>,
}

/// Rank catalog courses that would close the categories `progress` leaves
/// open.
///
/// Courses already taken or placed in `plan` are never suggested, and codes
/// outside the catalog are skipped. Each course appears once, under its most
/// urgent category. The result is ordered by priority, then courses the
/// student can take right away, then requirement and catalog order.
pub fn suggest_courses(
    catalog: &Catalog,
    requirements: &[RequirementCategory],
    progress: &ProgressReport,
    plan: &Plan,
    student: &StudentState,
) -> Vec<CourseSuggestion> {
    let evaluator = Evaluator::new(catalog);
    let taken = TakenSet::from_codes(student.taken());
    let open =
        |code: &str| catalog.contains(code) && !student.has_taken(code) && !plan.contains(code);

    let mut picks: Vec<(Priority, &str, String)> = Vec::new();
    for (req, cat) in requirements.iter().zip(&progress.categories) {
        if cat.remaining_units() == 0 {
            continue;
        }
        match &req.rule {
            RequirementRule::All { .. } => {
                for code in cat.remaining.iter().map(String::as_str).filter(|c| open(*c)) {
                    picks.push((Priority::High, code, format!("required for {}", req.name)));
                }
            }
            RequirementRule::Choose { .. } => {
                for code in cat.remaining.iter().map(String::as_str).filter(|c| open(*c)) {
                    let name = catalog.get(code).map_or(code, |c| c.name.as_str());
                    picks.push((Priority::Medium, code, format!("{} option: {name}", req.name)));
                }
            }
            RequirementRule::Credits { filter, .. } => {
                let matching = catalog
                    .courses()
                    .filter(|c| filter.matches(c) && open(c.code.as_str()));
                for course in matching {
                    picks.push((
                        Priority::Low,
                        course.code.as_str(),
                        format!(
                            "counts toward {} ({} more credits needed)",
                            req.name,
                            cat.remaining_units()
                        ),
                    ));
                }
            }
        }
    }

    let mut suggestions: Vec<CourseSuggestion> = picks
        .into_iter()
        .map(|(priority, code, reason)| {
            let eval = evaluator.evaluate(code, &taken);
            CourseSuggestion {
                course: code.to_string(),
                priority,
                reason,
                prereqs_met: eval.satisfied,
                missing_prereqs: eval.missing,
            }
        })
        .collect();

    suggestions.sort_by_key(|s| (s.priority, !s.prereqs_met));
    let mut seen = HashSet::new();
    suggestions.retain(|s| seen.insert(s.course.clone()));

    debug!(suggestions = suggestions.len(), "course suggestions ranked");
    suggestions
}
