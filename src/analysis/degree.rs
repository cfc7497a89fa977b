// src/analysis/degree.rs

use std::collections::BTreeSet;

use crate::analysis::suggest::{CourseSuggestion, MAX_COURSE_SUGGESTIONS, suggest_courses};
use crate::analysis::validator::{Analysis, validate};
use crate::catalog::Catalog;
use crate::plan::{Plan, StudentState};
use crate::progress::{
    ProgressReport, RequirementCategory, RequirementRule, compute_progress_toward,
};

/// Plan validation enriched with degree progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeAnalysis {
    pub analysis: Analysis,
    pub progress: ProgressReport,
    /// Top-ranked courses for the categories still open.
    pub course_suggestions: Vec<CourseSuggestion>,
}

/// Validate `plan` and measure it against the degree requirements.
///
/// In-progress and planned courses both count as planned. Categories left
/// open after the plan add an issue (`all` lists) or a suggestion (`choose`
/// and `credits`); categories it closes add a positive. The score is
/// recomputed over the combined findings. The report also carries up to
/// [`MAX_COURSE_SUGGESTIONS`] ranked course suggestions.
pub fn analyze_plan(
    plan: &Plan,
    catalog: &Catalog,
    requirements: &[RequirementCategory],
    student: &StudentState,
    graduation_credits: u32,
) -> DegreeAnalysis {
    let mut analysis = validate(plan, catalog, student);

    let mut planned: BTreeSet<String> = plan.all_courses();
    planned.extend(student.in_progress().iter().cloned());
    let progress = compute_progress_toward(
        catalog,
        requirements,
        student.completed(),
        &planned,
        graduation_credits,
    );

    for (req, cat) in requirements.iter().zip(&progress.categories) {
        if cat.remaining_units() == 0 {
            analysis.positives.push(format!(
                "{}: requirement covered by completed and planned courses",
                cat.name
            ));
            continue;
        }
        match &req.rule {
            RequirementRule::All { .. } => analysis.issues.push(format!(
                "{}: required courses not planned: {}",
                cat.name,
                cat.remaining.join(", ")
            )),
            RequirementRule::Choose { .. } => analysis.suggestions.push(format!(
                "{}: plan {} more from {}",
                cat.name,
                cat.remaining_units(),
                cat.remaining.join(", ")
            )),
            RequirementRule::Credits { filter, .. } => analysis.suggestions.push(format!(
                "{}: {} more credits needed from {filter}",
                cat.name,
                cat.remaining_units()
            )),
        }
    }

    if progress.credits_remaining > 0 {
        analysis.suggestions.push(format!(
            "plan reaches {} of {} credits needed to graduate",
            progress.credits_completed.saturating_add(progress.credits_planned),
            graduation_credits
        ));
    }

    analysis.rescore();

    let mut course_suggestions = suggest_courses(catalog, requirements, &progress, plan, student);
    course_suggestions.truncate(MAX_COURSE_SUGGESTIONS);

    DegreeAnalysis {
        analysis,
        progress,
        course_suggestions,
    }
}
