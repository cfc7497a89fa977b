// src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Catalog category tag of a course.
///
/// The first five variants are the mandatory categories: courses tagged with
/// them are placed by the scheduler even when they are not flagged
/// `required`. Electives and pathway courses are left to the student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    Core,
    MathCore,
    DiscreteMath,
    Statistics,
    Science,
    Elective,
    Pathway,
    /// Any other tag, stored lower-case.
    Other(String),
}

impl Category {
    pub fn is_mandatory(&self) -> bool {
        matches!(
            self,
            Category::Core
                | Category::MathCore
                | Category::DiscreteMath
                | Category::Statistics
                | Category::Science
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Core => "core",
            Category::MathCore => "math_core",
            Category::DiscreteMath => "discrete_math",
            Category::Statistics => "statistics",
            Category::Science => "science",
            Category::Elective => "elective",
            Category::Pathway => "pathway",
            Category::Other(tag) => tag.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase().replace(['-', ' '], "_");
        match tag.as_str() {
            "" => Err("course category must not be empty".to_string()),
            "core" => Ok(Category::Core),
            "math_core" | "math" => Ok(Category::MathCore),
            "discrete_math" | "discrete" => Ok(Category::DiscreteMath),
            "statistics" | "stats" => Ok(Category::Statistics),
            "science" => Ok(Category::Science),
            "elective" => Ok(Category::Elective),
            "pathway" | "pathways" => Ok(Category::Pathway),
            _ => Ok(Category::Other(tag)),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Academic term of a semester slot. Plans always start in a Fall term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Fall,
    Spring,
}

impl Term {
    pub fn as_str(self) -> &'static str {
        match self {
            Term::Fall => "Fall",
            Term::Spring => "Spring",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Term {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fall" => Ok(Term::Fall),
            "spring" => Ok(Term::Spring),
            other => Err(format!("unknown term '{other}' (expected Fall or Spring)")),
        }
    }
}
