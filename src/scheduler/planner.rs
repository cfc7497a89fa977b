// src/scheduler/planner.rs

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CodeFilter, Course, Prereq, PrereqContext};
use crate::errors::Result;
use crate::plan::{Plan, SemesterSlot, StudentState};
use crate::progress::{DEFAULT_GRADUATION_CREDITS, RequirementCategory};
use crate::scheduler::candidates::select_candidates;
use crate::scheduler::options::{MAX_PASSES, PlanOptions};
use crate::scheduler::outcome::{PassStep, Placement, PlanMetadata, PlanOutcome};
use crate::scheduler::worklist::Worklist;

/// Running totals of one semester.
#[derive(Debug, Clone, Copy, Default)]
struct SemesterLoad {
    credits: u32,
    hard: u32,
}

/// Greedy multi-pass placement over an immutable catalog.
///
/// The scheduler owns the plan being built plus per-semester loads and the
/// candidate worklist. Each [`Scheduler::step_pass`] sweeps the pending
/// candidates once in reverse catalog order; a course lands in the earliest
/// semester at or after its prerequisites that offers the course, still has
/// credit room and, in balanced mode, room for another hard course. Passes repeat until one
/// places nothing or [`MAX_PASSES`] is reached.
#[derive(Debug)]
pub struct Scheduler<'a> {
    catalog: &'a Catalog,
    student: &'a StudentState,
    options: PlanOptions,
    plan: Plan,
    loads: Vec<SemesterLoad>,
    worklist: Worklist,
    /// Candidates that can never be placed, with the reason.
    blocked: Vec<(String, String)>,
    passes: usize,
    settled: bool,
    graduation_credits: u32,
}

impl<'a> Scheduler<'a> {
    /// Validate options and select candidates. Fails only on malformed
    /// options; everything else degrades to warnings.
    pub fn new(
        catalog: &'a Catalog,
        requirements: &[RequirementCategory],
        student: &'a StudentState,
        options: PlanOptions,
    ) -> Result<Self> {
        options.validate()?;
        let plan = Plan::new(options.semester_count)?;
        let candidates = select_candidates(catalog, requirements, student);
        let worklist = Worklist::new(candidates.schedulable);

        info!(
            candidates = worklist.len(),
            blocked = candidates.blocked.len(),
            semesters = options.semester_count,
            credit_cap = options.credit_cap(),
            hard_cap = ?options.hard_cap(),
            "scheduler initialised"
        );

        Ok(Self {
            catalog,
            student,
            options,
            loads: vec![SemesterLoad::default(); options.semester_count],
            plan,
            settled: worklist.is_empty(),
            worklist,
            blocked: candidates.blocked,
            passes: 0,
            graduation_credits: DEFAULT_GRADUATION_CREDITS,
        })
    }

    /// Threshold used for [`PlanMetadata::credit_shortfall`].
    pub fn with_graduation_credits(mut self, credits: u32) -> Self {
        self.graduation_credits = credits;
        self
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn pending_count(&self) -> usize {
        self.worklist.pending_count()
    }

    /// Run one placement pass.
    pub fn step_pass(&mut self) -> PassStep {
        if self.settled {
            return PassStep {
                pass: self.passes,
                placed: Vec::new(),
                settled: true,
            };
        }

        self.passes += 1;
        let pass = self.passes;
        let catalog = self.catalog;
        let semester_count = self.plan.semester_count();
        let mut placed = Vec::new();

        for entry in self.worklist.pending_reversed() {
            let Some(course) = catalog.course_at(self.worklist.catalog_pos(entry)) else {
                continue;
            };

            let Some(earliest) = self.earliest_slot(course) else {
                debug!(pass, course = %course.code, "prerequisites not placed yet; retrying next pass");
                continue;
            };

            let Some(slot) = (earliest..semester_count).find(|&slot| self.admits(slot, course))
            else {
                debug!(
                    pass,
                    course = %course.code,
                    earliest,
                    "no semester has room; retrying next pass"
                );
                continue;
            };

            self.plan.assign(&course.code, slot);
            let load = &mut self.loads[slot];
            load.credits = load.credits.saturating_add(course.credits);
            if course.is_hard() {
                load.hard += 1;
            }
            self.worklist.mark_placed(entry);

            debug!(
                pass,
                course = %course.code,
                semester = %SemesterSlot::new(slot),
                credits = load.credits,
                "course placed"
            );
            placed.push(Placement {
                code: course.code.clone(),
                slot: SemesterSlot::new(slot),
            });
        }

        let pending = self.worklist.pending_count();
        if placed.is_empty() || pending == 0 || self.passes >= MAX_PASSES {
            self.settled = true;
        }

        info!(
            pass,
            placed = placed.len(),
            pending,
            settled = self.settled,
            "placement pass complete"
        );

        PassStep {
            pass,
            placed,
            settled: self.settled,
        }
    }

    /// Run passes until settled and return the outcome.
    pub fn run(mut self) -> PlanOutcome {
        while !self.settled {
            self.step_pass();
        }
        self.finish()
    }

    /// Stop here and report. Courses still pending become warnings, so this
    /// is safe to call at any pass boundary.
    pub fn finish(self) -> PlanOutcome {
        let catalog = self.catalog;
        let cap = self.options.credit_cap();

        let mut unplaced: Vec<(Option<usize>, String, String)> = self
            .blocked
            .iter()
            .map(|(code, reason)| {
                (
                    catalog.position(code),
                    code.clone(),
                    format!("could not schedule {code}: {reason}"),
                )
            })
            .collect();

        for pos in self.worklist.pending_positions() {
            let Some(course) = catalog.course_at(pos) else {
                continue;
            };
            let warning = self.unplaced_warning(course, cap);
            warn!(course = %course.code, "course left unplaced");
            unplaced.push((Some(pos), course.code.clone(), warning));
        }
        unplaced.sort_by_key(|(pos, _, _)| *pos);

        let credits_planned = self
            .plan
            .all_courses()
            .iter()
            .map(|c| catalog.credits_of(c))
            .fold(0, u32::saturating_add);
        let existing_credits = self
            .student
            .taken()
            .map(|c| catalog.credits_of(c))
            .fold(0, u32::saturating_add);
        let metadata = PlanMetadata {
            courses_placed: self.plan.course_count(),
            credits_planned,
            existing_credits,
            semesters_used: self.plan.semesters().filter(|(_, c)| !c.is_empty()).count(),
            credit_shortfall: self
                .graduation_credits
                .saturating_sub(credits_planned.saturating_add(existing_credits)),
        };

        info!(
            passes = self.passes,
            placed = metadata.courses_placed,
            unplaced = unplaced.len(),
            "plan generation finished"
        );

        let (unplaced, warnings): (Vec<String>, Vec<String>) = unplaced
            .into_iter()
            .map(|(_, code, warning)| (code, warning))
            .unzip();

        PlanOutcome {
            plan: self.plan,
            warnings,
            unplaced,
            passes: self.passes,
            metadata,
        }
    }

    fn unplaced_warning(&self, course: &Course, cap: u32) -> String {
        let code = &course.code;
        let Some(earliest) = self.earliest_slot(course) else {
            if let Some(cycle) = self.catalog.graph().cycle_containing(code) {
                return format!(
                    "could not schedule {code}: prerequisite cycle ({})",
                    cycle.join(" -> ")
                );
            }
            let ctx = Placed {
                scheduler: self,
                owner: code,
            };
            return format!(
                "could not schedule {code}: prerequisite {} was never placed",
                course.prereqs.missing_by(&ctx).join("; ")
            );
        };
        if course.credits > cap {
            return format!(
                "could not schedule {code}: {} credits exceeds the per-semester cap of {cap}",
                course.credits
            );
        }
        let semester_count = self.plan.semester_count();
        let offered_later = (earliest..semester_count)
            .any(|slot| course.is_offered_in(SemesterSlot::new(slot).term()));
        if earliest < semester_count && !offered_later {
            let terms: Vec<&str> = course.offered.iter().map(|t| t.as_str()).collect();
            return format!(
                "could not schedule {code}: offered only in {} and no such semester remains",
                terms.join(" and ")
            );
        }
        format!("could not schedule {code}: insufficient remaining semesters or credit capacity")
    }

    /// Earliest slot in which `course` could be taken given current
    /// placements; `None` while some required prerequisite is neither taken
    /// nor placed. May equal the semester count (no room left).
    fn earliest_slot(&self, course: &Course) -> Option<usize> {
        self.earliest_for(&course.prereqs, &course.code)
    }

    fn earliest_for(&self, node: &Prereq, owner: &str) -> Option<usize> {
        match node {
            Prereq::Course(code) => {
                if code == owner || !self.catalog.contains(code) {
                    return None;
                }
                if self.student.has_taken(code) {
                    return Some(0);
                }
                self.plan.slot_of(code).map(|slot| slot + 1)
            }
            Prereq::And(children) => children.iter().try_fold(0, |acc, child| {
                Some(acc.max(self.earliest_for(child, owner)?))
            }),
            Prereq::Or(children) => children
                .iter()
                .filter_map(|child| self.earliest_for(child, owner))
                .min(),
            Prereq::Credits {
                min_credits,
                filter,
            } => self.earliest_for_credits(*min_credits, filter, owner),
        }
    }

    /// First slot by which taken and placed courses matching `filter` add up
    /// to `min_credits`.
    fn earliest_for_credits(
        &self,
        min_credits: u32,
        filter: &CodeFilter,
        owner: &str,
    ) -> Option<usize> {
        let mut earned = self
            .catalog
            .credits_matching(self.student.taken().filter(|c| *c != owner), filter);
        if earned >= min_credits {
            return Some(0);
        }
        for (slot, courses) in self.plan.semesters() {
            let codes = courses.iter().map(String::as_str).filter(|c| *c != owner);
            earned = earned.saturating_add(self.catalog.credits_matching(codes, filter));
            if earned >= min_credits {
                return Some(slot.index() + 1);
            }
        }
        None
    }

    fn admits(&self, slot: usize, course: &Course) -> bool {
        if !course.is_offered_in(SemesterSlot::new(slot).term()) {
            return false;
        }
        let load = self.loads[slot];
        if load.credits.saturating_add(course.credits) > self.options.credit_cap() {
            return false;
        }
        match self.options.hard_cap() {
            Some(cap) if course.is_hard() => load.hard < cap,
            _ => true,
        }
    }
}

/// Prerequisites checked against taken courses and everything placed so far.
struct Placed<'s, 'a> {
    scheduler: &'s Scheduler<'a>,
    owner: &'s str,
}

impl PrereqContext for Placed<'_, '_> {
    fn has_course(&self, code: &str) -> bool {
        self.scheduler.student.has_taken(code) || self.scheduler.plan.contains(code)
    }

    fn credits_in(&self, filter: &CodeFilter) -> u32 {
        let placed = self.scheduler.plan.all_courses();
        let codes = self
            .scheduler
            .student
            .taken()
            .chain(placed.iter().map(String::as_str))
            .filter(|c| *c != self.owner);
        self.scheduler.catalog.credits_matching(codes, filter)
    }
}
