// src/progress/requirement.rs

use std::collections::HashSet;
use std::fmt;

use crate::catalog::{CodeFilter, Course, canonical_code};
use crate::errors::{PlanError, Result};
use crate::types::Category;

/// Which courses count toward a `credits` requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreditFilter {
    Category(Category),
    Code(CodeFilter),
}

impl CreditFilter {
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            CreditFilter::Category(cat) => &course.category == cat,
            CreditFilter::Code(filter) => filter.matches(&course.code),
        }
    }
}

impl fmt::Display for CreditFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditFilter::Category(cat) => write!(f, "category {cat}"),
            CreditFilter::Code(filter) => write!(f, "{filter}"),
        }
    }
}

/// How a requirement category is satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementRule {
    /// Every listed course.
    All { courses: Vec<String> },
    /// `pick` courses out of `from`.
    Choose { pick: usize, from: Vec<String> },
    /// At least `min_credits` credits of matching courses.
    Credits { min_credits: u32, filter: CreditFilter },
}

/// A named bucket of a degree program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementCategory {
    pub name: String,
    pub rule: RequirementRule,
}

impl RequirementCategory {
    pub fn all<I, S>(name: &str, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.to_string(),
            rule: RequirementRule::All {
                courses: canonical_list(courses),
            },
        }
    }

    pub fn choose<I, S>(name: &str, pick: usize, from: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.to_string(),
            rule: RequirementRule::Choose {
                pick,
                from: canonical_list(from),
            },
        }
    }

    pub fn credits(name: &str, min_credits: u32, filter: CreditFilter) -> Self {
        Self {
            name: name.to_string(),
            rule: RequirementRule::Credits {
                min_credits,
                filter,
            },
        }
    }

    /// Course codes explicitly listed by this category.
    pub fn listed_courses(&self) -> &[String] {
        match &self.rule {
            RequirementRule::All { courses } => courses,
            RequirementRule::Choose { from, .. } => from,
            RequirementRule::Credits { .. } => &[],
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlanError::invalid("requirement name must not be empty"));
        }
        match &self.rule {
            RequirementRule::All { courses } if courses.is_empty() => {
                Err(PlanError::invalid(format!(
                    "requirement '{}' lists no courses",
                    self.name
                )))
            }
            RequirementRule::Choose { pick, from } if *pick == 0 || *pick > from.len() => {
                Err(PlanError::invalid(format!(
                    "requirement '{}' picks {} from a pool of {} courses",
                    self.name,
                    pick,
                    from.len()
                )))
            }
            RequirementRule::Credits { min_credits: 0, .. } => Err(PlanError::invalid(format!(
                "requirement '{}' needs a positive credit threshold",
                self.name
            ))),
            _ => Ok(()),
        }
    }
}

/// Validate a requirement set: unique names, well-formed rules.
pub fn validate_requirements(requirements: &[RequirementCategory]) -> Result<()> {
    let mut seen = HashSet::new();
    for req in requirements {
        req.validate()?;
        if !seen.insert(req.name.as_str()) {
            return Err(PlanError::invalid(format!(
                "duplicate requirement name '{}'",
                req.name
            )));
        }
    }
    Ok(())
}

fn canonical_list<I, S>(codes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for code in codes {
        let code = canonical_code(code.as_ref());
        if !out.contains(&code) {
            out.push(code);
        }
    }
    out
}
