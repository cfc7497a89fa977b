// src/config/validate.rs

use tracing::warn;

use crate::catalog::{Catalog, CodeFilter, Course, Prereq};
use crate::config::model::{CourseConfig, PrereqNode, ProgramFile, RequestFile, RequirementConfig};
use crate::errors::{PlanError, Result};
use crate::plan::{Plan, SemesterSlot, StudentState};
use crate::progress::{CreditFilter, RequirementCategory, validate_requirements};
use crate::scheduler::PlanOptions;
use crate::types::{Category, Term};

/// A validated degree program: catalog, requirements and settings.
#[derive(Debug, Clone)]
pub struct Program {
    pub graduation_credits: u32,
    pub catalog: Catalog,
    pub requirements: Vec<RequirementCategory>,
}

/// A validated planning request.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub student: StudentState,
    pub options: PlanOptions,
    /// Manual plan to validate instead of generating one.
    pub plan: Option<Plan>,
}

impl TryFrom<ProgramFile> for Program {
    type Error = PlanError;

    /// Checks, beyond what [`Catalog::new`] and [`validate_requirements`]
    /// enforce:
    /// - a positive `graduation_credits`,
    /// - every numeric course field fits its range,
    /// - at most one of `prereqs` / `prereqs_structured` per course,
    /// - credit requirements name exactly one filter.
    ///
    /// Requirement entries listing codes outside the catalog only warn.
    fn try_from(file: ProgramFile) -> Result<Self> {
        let graduation_credits = positive_u32(
            file.settings.graduation_credits,
            "[settings].graduation_credits",
        )?;

        let courses = file
            .courses
            .into_iter()
            .map(Course::try_from)
            .collect::<Result<Vec<_>>>()?;
        let catalog = Catalog::new(courses)?;

        let requirements = file
            .requirements
            .into_iter()
            .map(RequirementCategory::try_from)
            .collect::<Result<Vec<_>>>()?;
        validate_requirements(&requirements)?;

        for req in &requirements {
            for code in req.listed_courses() {
                if !catalog.contains(code) {
                    warn!(
                        requirement = %req.name,
                        course = %code,
                        "requirement lists a course that is not in the catalog"
                    );
                }
            }
        }

        Ok(Self {
            graduation_credits,
            catalog,
            requirements,
        })
    }
}

impl TryFrom<CourseConfig> for Course {
    type Error = PlanError;

    fn try_from(cfg: CourseConfig) -> Result<Self> {
        let code = cfg.code.trim().to_string();
        let what = |field: &str| format!("course '{code}' {field}");

        let category: Category = cfg
            .category
            .parse()
            .map_err(|e: String| PlanError::invalid(format!("course '{code}': {e}")))?;

        let prereqs = match (cfg.prereqs, cfg.prereqs_structured) {
            (Some(_), Some(_)) => {
                return Err(PlanError::invalid(format!(
                    "course '{code}' sets both `prereqs` and `prereqs_structured`"
                )));
            }
            (Some(flat), None) => Prereq::all_of(flat),
            (None, Some(tree)) => lower_tree(tree, &code)?,
            (None, None) => Prereq::none(),
        };

        let instructor_rating = cfg.instructor_rating.map(|r| r as f32);

        let offered = cfg
            .offered
            .iter()
            .map(|t| t.parse::<Term>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlanError::invalid(format!("course '{code}' offered: {e}")))?;

        Ok(Course {
            credits: positive_u32(cfg.credits, &what("credits"))?,
            difficulty: scale(cfg.difficulty, &what("difficulty"))?,
            workload: scale(cfg.workload, &what("workload"))?,
            name: if cfg.name.trim().is_empty() {
                code.clone()
            } else {
                cfg.name
            },
            code,
            category,
            prereqs,
            required: cfg.required,
            instructor: cfg.instructor,
            instructor_rating,
            offered,
        })
    }
}

fn lower_tree(node: PrereqNode, owner: &str) -> Result<Prereq> {
    let lower_all = |requirements: Vec<PrereqNode>| {
        requirements
            .into_iter()
            .map(|child| lower_tree(child, owner))
            .collect::<Result<Vec<_>>>()
    };
    Ok(match node {
        PrereqNode::Course { code } => Prereq::course(&code),
        PrereqNode::And { requirements } => Prereq::And(lower_all(requirements)?),
        PrereqNode::Or { requirements } => Prereq::Or(lower_all(requirements)?),
        PrereqNode::Credits {
            min_credits,
            department,
            min_level,
        } => {
            let min_credits = positive_u32(
                min_credits,
                &format!("course '{owner}' CREDITS prerequisite min_credits"),
            )?;
            let min_level = u32::try_from(min_level).map_err(|_| {
                PlanError::invalid(format!(
                    "course '{owner}' CREDITS prerequisite min_level must be >= 0 (got {min_level})"
                ))
            })?;
            if department.trim().is_empty() {
                return Err(PlanError::invalid(format!(
                    "course '{owner}' CREDITS prerequisite needs a department"
                )));
            }
            Prereq::credits(min_credits, CodeFilter::new(&department, min_level))
        }
    })
}

impl TryFrom<RequirementConfig> for RequirementCategory {
    type Error = PlanError;

    fn try_from(cfg: RequirementConfig) -> Result<Self> {
        match cfg {
            RequirementConfig::All { name, courses } => {
                Ok(RequirementCategory::all(&name, courses))
            }
            RequirementConfig::Choose { name, pick, from } => {
                let pick = usize::try_from(pick).map_err(|_| {
                    PlanError::invalid(format!("requirement '{name}' has negative pick {pick}"))
                })?;
                Ok(RequirementCategory::choose(&name, pick, from))
            }
            RequirementConfig::Credits {
                name,
                min_credits,
                category,
                codes,
            } => {
                let min_credits =
                    positive_u32(min_credits, &format!("requirement '{name}' min_credits"))?;
                let filter = match (category, codes) {
                    (Some(cat), None) => CreditFilter::Category(cat.parse().map_err(
                        |e: String| PlanError::invalid(format!("requirement '{name}': {e}")),
                    )?),
                    (None, Some(codes)) => {
                        CreditFilter::Code(codes.parse::<CodeFilter>().map_err(|e| {
                            PlanError::invalid(format!("requirement '{name}': {e}"))
                        })?)
                    }
                    _ => {
                        return Err(PlanError::invalid(format!(
                            "credit requirement '{name}' needs exactly one of `category` or `codes`"
                        )));
                    }
                };
                Ok(RequirementCategory::credits(&name, min_credits, filter))
            }
        }
    }
}

impl TryFrom<RequestFile> for PlanRequest {
    type Error = PlanError;

    fn try_from(file: RequestFile) -> Result<Self> {
        let student = StudentState::new(&file.completed, &file.in_progress)?;

        let mut options = if file.balanced {
            PlanOptions::balanced()
        } else {
            PlanOptions::default()
        };
        if let Some(count) = file.semester_count {
            options = options.with_semesters(positive_u32(count, "semester_count")? as usize);
        }
        if let Some(cap) = file.max_credits_per_semester {
            options = options.with_credit_cap(positive_u32(cap, "max_credits_per_semester")?);
        }
        if let Some(cap) = file.max_hard_per_semester {
            let cap = u32::try_from(cap).map_err(|_| {
                PlanError::invalid(format!("max_hard_per_semester must be >= 0 (got {cap})"))
            })?;
            options = options.with_hard_cap(cap);
        }
        options.validate()?;

        let plan = match file.plan {
            None => None,
            Some(table) => {
                let mut assignments = Vec::with_capacity(table.len());
                for (id, codes) in table {
                    let slot = SemesterSlot::from_id(&id).ok_or_else(|| {
                        PlanError::invalid(format!(
                            "unknown semester id '{id}' in [plan] (expected e.g. fall1, spring2)"
                        ))
                    })?;
                    assignments.push((slot.index(), codes));
                }
                Some(Plan::from_assignments(options.semester_count, assignments)?)
            }
        };

        Ok(Self {
            student,
            options,
            plan,
        })
    }
}

fn positive_u32(value: i64, what: &str) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| PlanError::invalid(format!("{what} must be positive (got {value})")))
}

/// 1-5 scale used by difficulty and workload.
fn scale(value: i64, what: &str) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| (1..=5).contains(v))
        .ok_or_else(|| PlanError::invalid(format!("{what} must be between 1 and 5 (got {value})")))
}
