// src/catalog/prereq.rs

use std::fmt;

use crate::catalog::code::{CodeFilter, canonical_code};

/// Prerequisite requirement tree.
///
/// Flat prerequisite lists are lowered to `And` over `Course` leaves when a
/// catalog is loaded, so the rest of the crate only ever sees this shape.
/// `And(vec![])` is the "no prerequisites" tree and is always satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prereq {
    Course(String),
    And(Vec<Prereq>),
    Or(Vec<Prereq>),
    /// At least `min_credits` credits of courses matching `filter`, e.g.
    /// 12 credits of `CS 3000+`.
    Credits { min_credits: u32, filter: CodeFilter },
}

/// What a prerequisite tree is checked against: which course leaves count
/// as taken, and how many credits the taken courses add up to.
pub trait PrereqContext {
    fn has_course(&self, code: &str) -> bool;

    /// Credits of taken courses matching `filter`.
    fn credits_in(&self, filter: &CodeFilter) -> u32;
}

impl Default for Prereq {
    fn default() -> Self {
        Prereq::none()
    }
}

impl Prereq {
    pub fn none() -> Self {
        Prereq::And(Vec::new())
    }

    pub fn course(code: &str) -> Self {
        Prereq::Course(canonical_code(code))
    }

    /// Lower a flat list of codes (implicit AND).
    pub fn all_of<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Prereq::And(
            codes
                .into_iter()
                .map(|c| Prereq::course(c.as_ref()))
                .collect(),
        )
    }

    pub fn credits(min_credits: u32, filter: CodeFilter) -> Self {
        Prereq::Credits {
            min_credits,
            filter,
        }
    }

    pub fn any_of<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Prereq::Or(
            codes
                .into_iter()
                .map(|c| Prereq::course(c.as_ref()))
                .collect(),
        )
    }

    /// True for the empty `And`, i.e. a course without prerequisites.
    pub fn is_empty(&self) -> bool {
        matches!(self, Prereq::And(children) if children.is_empty())
    }

    /// Canonicalize every leaf code in place.
    pub fn canonicalize(&mut self) {
        match self {
            Prereq::Course(code) => *code = canonical_code(code),
            Prereq::And(children) | Prereq::Or(children) => {
                children.iter_mut().for_each(Prereq::canonicalize)
            }
            Prereq::Credits { .. } => {}
        }
    }

    /// All leaf codes, deduplicated, in first-appearance order.
    pub fn course_codes(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_codes(&mut out);
        out
    }

    fn collect_codes<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Prereq::Course(code) => {
                if !out.contains(&code.as_str()) {
                    out.push(code);
                }
            }
            Prereq::And(children) | Prereq::Or(children) => {
                for child in children {
                    child.collect_codes(out);
                }
            }
            Prereq::Credits { .. } => {}
        }
    }

    /// Leaf codes and credit thresholds in first-appearance order, used to
    /// describe an unsatisfied `Or`.
    fn option_labels(&self, out: &mut Vec<String>) {
        match self {
            Prereq::Course(code) => {
                if !out.contains(code) {
                    out.push(code.clone());
                }
            }
            Prereq::Credits { .. } => out.push(self.to_string()),
            Prereq::And(children) | Prereq::Or(children) => {
                for child in children {
                    child.option_labels(out);
                }
            }
        }
    }

    /// Whether any `Or` node in the tree has no children.
    pub fn has_empty_or(&self) -> bool {
        match self {
            Prereq::Course(_) | Prereq::Credits { .. } => false,
            Prereq::Or(children) if children.is_empty() => true,
            Prereq::And(children) | Prereq::Or(children) => {
                children.iter().any(Prereq::has_empty_or)
            }
        }
    }

    /// Evaluate the tree against `ctx`.
    pub fn is_satisfied_by<C>(&self, ctx: &C) -> bool
    where
        C: PrereqContext + ?Sized,
    {
        match self {
            Prereq::Course(code) => ctx.has_course(code),
            Prereq::And(children) => children.iter().all(|c| c.is_satisfied_by(ctx)),
            Prereq::Or(children) => children.iter().any(|c| c.is_satisfied_by(ctx)),
            Prereq::Credits {
                min_credits,
                filter,
            } => ctx.credits_in(filter) >= *min_credits,
        }
    }

    /// Human-readable descriptions of what is missing under `ctx`.
    ///
    /// A missing leaf is reported as its code, a credit threshold as
    /// `12 credits of CS 3000+`, and an unsatisfied `Or` once as
    /// `one of: A, B, C`.
    pub fn missing_by<C>(&self, ctx: &C) -> Vec<String>
    where
        C: PrereqContext + ?Sized,
    {
        match self {
            Prereq::Course(code) => {
                if ctx.has_course(code) {
                    Vec::new()
                } else {
                    vec![code.clone()]
                }
            }
            Prereq::Credits { .. } => {
                if self.is_satisfied_by(ctx) {
                    Vec::new()
                } else {
                    vec![self.to_string()]
                }
            }
            Prereq::And(children) => children.iter().flat_map(|c| c.missing_by(ctx)).collect(),
            Prereq::Or(children) => {
                if children.iter().any(|c| c.is_satisfied_by(ctx)) {
                    return Vec::new();
                }
                let mut options = Vec::new();
                self.option_labels(&mut options);
                if options.is_empty() {
                    Vec::new()
                } else {
                    vec![format!("one of: {}", options.join(", "))]
                }
            }
        }
    }
}

impl fmt::Display for Prereq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prereq::Course(code) => f.write_str(code),
            Prereq::Credits {
                min_credits,
                filter,
            } => write!(f, "{min_credits} credits of {filter}"),
            Prereq::And(children) if children.is_empty() => f.write_str("(none)"),
            Prereq::And(children) | Prereq::Or(children) => {
                let joiner = if matches!(self, Prereq::And(_)) {
                    " AND "
                } else {
                    " OR "
                };
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(joiner)?;
                    }
                    match child {
                        Prereq::Course(_) | Prereq::Credits { .. } => write!(f, "{child}")?,
                        _ => write!(f, "({child})")?,
                    }
                }
                Ok(())
            }
        }
    }
}
