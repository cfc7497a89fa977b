// src/progress/aggregator.rs

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::progress::requirement::{RequirementCategory, RequirementRule};

/// Credits needed to graduate when the program does not say otherwise.
pub const DEFAULT_GRADUATION_CREDITS: u32 = 120;

/// What a category's counts are measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressUnit {
    Courses,
    Credits,
}

/// Progress of one requirement category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProgress {
    pub name: String,
    pub unit: ProgressUnit,
    pub completed: Vec<String>,
    /// Planned (or in progress) but not completed.
    pub planned: Vec<String>,
    /// Courses still to pick or take. Empty for credit categories.
    pub remaining: Vec<String>,
    /// Completed units, capped at `required_units`.
    pub completed_units: u32,
    /// Planned units, capped at what completion leaves open.
    pub planned_units: u32,
    pub required_units: u32,
    pub percent: u8,
}

impl CategoryProgress {
    /// Units still open after counting completed and planned work.
    pub fn remaining_units(&self) -> u32 {
        self.required_units
            .saturating_sub(self.completed_units.saturating_add(self.planned_units))
    }

    pub fn is_complete(&self) -> bool {
        self.completed_units >= self.required_units
    }
}

/// Degree progress across every category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    pub categories: Vec<CategoryProgress>,
    /// Σ completed units / Σ required units, so large categories weigh more.
    pub overall_percent: u8,
    pub credits_completed: u32,
    pub credits_planned: u32,
    pub credits_remaining: u32,
}

impl ProgressReport {
    pub fn category(&self, name: &str) -> Option<&CategoryProgress> {
        self.categories.iter().find(|c| c.name == name)
    }
}

/// Progress toward the default 120-credit graduation threshold.
pub fn compute_progress(
    catalog: &Catalog,
    requirements: &[RequirementCategory],
    completed: &BTreeSet<String>,
    planned: &BTreeSet<String>,
) -> ProgressReport {
    compute_progress_toward(
        catalog,
        requirements,
        completed,
        planned,
        DEFAULT_GRADUATION_CREDITS,
    )
}

/// Progress toward an explicit graduation threshold.
///
/// `planned` may overlap `completed`; overlapping courses count as
/// completed only.
pub fn compute_progress_toward(
    catalog: &Catalog,
    requirements: &[RequirementCategory],
    completed: &BTreeSet<String>,
    planned: &BTreeSet<String>,
    graduation_credits: u32,
) -> ProgressReport {
    let planned: BTreeSet<&String> = planned.difference(completed).collect();

    let categories: Vec<CategoryProgress> = requirements
        .iter()
        .map(|req| category_progress(catalog, req, completed, &planned))
        .collect();

    let done = sum(categories.iter().map(|c| c.completed_units));
    let total = sum(categories.iter().map(|c| c.required_units));

    let credits_completed = sum(completed.iter().map(|c| catalog.credits_of(c)));
    let credits_planned = sum(planned.iter().map(|c| catalog.credits_of(c)));
    let credits_remaining =
        graduation_credits.saturating_sub(credits_completed.saturating_add(credits_planned));

    debug!(
        categories = categories.len(),
        done, total, credits_completed, credits_planned, "degree progress computed"
    );

    ProgressReport {
        categories,
        overall_percent: percent(done, total),
        credits_completed,
        credits_planned,
        credits_remaining,
    }
}

fn category_progress(
    catalog: &Catalog,
    req: &RequirementCategory,
    completed: &BTreeSet<String>,
    planned: &BTreeSet<&String>,
) -> CategoryProgress {
    match &req.rule {
        RequirementRule::All { courses } => {
            let (done, plan, rest) = partition(courses, completed, planned);
            let required = courses.len() as u32;
            let done_units = done.len() as u32;
            CategoryProgress {
                name: req.name.clone(),
                unit: ProgressUnit::Courses,
                completed_units: done_units,
                planned_units: plan.len() as u32,
                required_units: required,
                percent: percent(done_units, required),
                completed: done,
                planned: plan,
                remaining: rest,
            }
        }
        RequirementRule::Choose { pick, from } => {
            let (done, plan, rest) = partition(from, completed, planned);
            let required = *pick as u32;
            let done_units = (done.len() as u32).min(required);
            let planned_units = (plan.len() as u32).min(required - done_units);
            let remaining = if done_units + planned_units >= required {
                Vec::new()
            } else {
                rest
            };
            CategoryProgress {
                name: req.name.clone(),
                unit: ProgressUnit::Courses,
                completed_units: done_units,
                planned_units,
                required_units: required,
                percent: percent(done_units, required),
                completed: done,
                planned: plan,
                remaining,
            }
        }
        RequirementRule::Credits {
            min_credits,
            filter,
        } => {
            let matching = |code: &str| catalog.get(code).filter(|c| filter.matches(c));

            let mut done = Vec::new();
            let mut done_credits: u32 = 0;
            for code in completed {
                if let Some(course) = matching(code.as_str()) {
                    done.push(code.clone());
                    done_credits = done_credits.saturating_add(course.credits);
                }
            }
            let mut plan = Vec::new();
            let mut plan_credits: u32 = 0;
            for code in planned {
                if let Some(course) = matching(code.as_str()) {
                    plan.push((*code).clone());
                    plan_credits = plan_credits.saturating_add(course.credits);
                }
            }

            let done_units = done_credits.min(*min_credits);
            CategoryProgress {
                name: req.name.clone(),
                unit: ProgressUnit::Credits,
                completed_units: done_units,
                planned_units: plan_credits.min(min_credits - done_units),
                required_units: *min_credits,
                percent: percent(done_units, *min_credits),
                completed: done,
                planned: plan,
                remaining: Vec::new(),
            }
        }
    }
}

/// Split `courses` into completed / planned / remaining, keeping list order.
fn partition(
    courses: &[String],
    completed: &BTreeSet<String>,
    planned: &BTreeSet<&String>,
) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut done = Vec::new();
    let mut plan = Vec::new();
    let mut rest = Vec::new();
    for code in courses {
        if completed.contains(code) {
            done.push(code.clone());
        } else if planned.contains(code) {
            plan.push(code.clone());
        } else {
            rest.push(code.clone());
        }
    }
    (done, plan, rest)
}

fn sum(values: impl Iterator<Item = u32>) -> u32 {
    values.fold(0, u32::saturating_add)
}

/// Rounded percentage saturated to 0..=100. An empty total counts as done.
fn percent(done: u32, total: u32) -> u8 {
    if total == 0 {
        return 100;
    }
    let pct = (u64::from(done) * 100 + u64::from(total) / 2) / u64::from(total);
    pct.min(100) as u8
}
