// src/eval/diagnostic.rs

use std::fmt;

/// Non-fatal condition found while evaluating prerequisites.
///
/// Every variant is fail-closed: the prerequisite involved counts as unmet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `prereq` is referenced by `course` but does not exist in the catalog.
    MissingCourse { course: String, prereq: String },
    /// The evaluated course itself is not in the catalog.
    UnknownCourse { course: String },
    /// `course` depends on itself, directly or through `cycle`.
    CyclicPrerequisite { course: String, cycle: Vec<String> },
}

impl Diagnostic {
    pub fn course(&self) -> &str {
        match self {
            Diagnostic::MissingCourse { course, .. }
            | Diagnostic::UnknownCourse { course }
            | Diagnostic::CyclicPrerequisite { course, .. } => course,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingCourse { course, prereq } => {
                write!(f, "{course} requires {prereq}, which is not in the catalog")
            }
            Diagnostic::UnknownCourse { course } => {
                write!(f, "{course} is not in the catalog")
            }
            Diagnostic::CyclicPrerequisite { course, cycle } => {
                if cycle.len() <= 1 {
                    write!(f, "{course} lists itself as a prerequisite")
                } else {
                    write!(
                        f,
                        "{course} is part of a prerequisite cycle ({})",
                        cycle.join(" -> ")
                    )
                }
            }
        }
    }
}
