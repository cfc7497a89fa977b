// src/scheduler/candidates.rs

//! Which courses the scheduler should place, and which of those can ever be
//! placed at all.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::catalog::{Catalog, CodeFilter, Course, PrereqContext};
use crate::plan::StudentState;
use crate::progress::{RequirementCategory, RequirementRule};

/// Candidate selection result.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    /// Catalog positions to schedule, in catalog order.
    pub schedulable: Vec<usize>,
    /// Candidates dropped because a prerequisite can never be met, with the
    /// reason, in catalog order.
    pub blocked: Vec<(String, String)>,
}

/// Select candidates: untaken courses that are flagged required, belong to a
/// mandatory category, or are listed by an `all` requirement.
///
/// A candidate whose prerequisites cannot be met even if every other
/// candidate were placed is moved to `blocked`. This is repeated until no
/// more candidates drop out, so dependents of blocked courses are blocked
/// too.
pub fn select_candidates(
    catalog: &Catalog,
    requirements: &[RequirementCategory],
    student: &StudentState,
) -> CandidateSet {
    let listed: HashSet<&str> = requirements
        .iter()
        .filter(|r| matches!(r.rule, RequirementRule::All { .. }))
        .flat_map(|r| r.listed_courses().iter().map(String::as_str))
        .collect();

    let mut alive: Vec<(usize, bool)> = catalog
        .courses()
        .enumerate()
        .filter(|(_, c)| !student.has_taken(&c.code))
        .filter(|(_, c)| c.is_auto_scheduled() || listed.contains(c.code.as_str()))
        .map(|(pos, _)| (pos, true))
        .collect();

    let mut blocked = Vec::new();
    loop {
        let reachable: HashSet<&str> = alive
            .iter()
            .filter(|(_, ok)| *ok)
            .filter_map(|(pos, _)| catalog.course_at(*pos))
            .map(|c| c.code.as_str())
            .collect();

        let mut dropped = false;
        for (pos, ok) in alive.iter_mut().filter(|(_, ok)| *ok) {
            let Some(course) = catalog.course_at(*pos) else {
                continue;
            };
            let ctx = Reachable {
                catalog,
                course,
                student,
                reachable: &reachable,
            };
            if !course.prereqs.is_satisfied_by(&ctx) {
                let self_reference =
                    course.prereqs.course_codes().contains(&course.code.as_str());
                let reason = if self_reference {
                    format!("{} lists itself as a prerequisite", course.code)
                } else {
                    format!(
                        "prerequisite {} is not completed, in progress, or scheduled automatically",
                        course.prereqs.missing_by(&ctx).join("; ")
                    )
                };
                warn!(course = %course.code, %reason, "candidate can never be scheduled");
                blocked.push((course.code.clone(), reason));
                *ok = false;
                dropped = true;
            }
        }

        if !dropped {
            break;
        }
    }

    let schedulable: Vec<usize> = alive
        .into_iter()
        .filter(|(_, ok)| *ok)
        .map(|(pos, _)| pos)
        .collect();

    // Report blocked courses in catalog order regardless of discovery round.
    blocked.sort_by_key(|(code, _)| catalog.position(code));

    debug!(
        schedulable = schedulable.len(),
        blocked = blocked.len(),
        "candidate selection complete"
    );

    CandidateSet {
        schedulable,
        blocked,
    }
}

/// Prerequisites checked against what is taken or could still be placed.
struct Reachable<'c> {
    catalog: &'c Catalog,
    course: &'c Course,
    student: &'c StudentState,
    reachable: &'c HashSet<&'c str>,
}

impl PrereqContext for Reachable<'_> {
    fn has_course(&self, code: &str) -> bool {
        code != self.course.code
            && self.catalog.contains(code)
            && (self.student.has_taken(code) || self.reachable.contains(code))
    }

    fn credits_in(&self, filter: &CodeFilter) -> u32 {
        let owner = self.course.code.as_str();
        let codes = self
            .student
            .taken()
            .chain(self.reachable.iter().copied())
            .filter(|c| *c != owner);
        self.catalog.credits_matching(codes, filter)
    }
}
