// src/catalog/code.rs

//! Course code canonicalization and level filters.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)[\s_\-]*(\d+[A-Za-z]?)$").expect("course code regex is valid")
});

static FILTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)\s*(\d+)\+?$").expect("code filter regex is valid")
});

/// Departments matched by the `STEM` pseudo-department in code filters.
const STEM_DEPARTMENTS: &[&str] = &[
    "AOE", "BIOL", "BMES", "BSE", "CEE", "CHE", "CHEM", "CMDA", "CS", "ECE", "ESM", "ISE", "MATH",
    "ME", "MINE", "MSE", "NSEG", "PHYS", "STAT",
];

/// Canonicalize a course code to `DEPT NUMBER` form.
///
/// `cs3114`, `CS-3114` and ` CS  3114 ` all become `CS 3114`. Anything that
/// does not look like letters followed by digits is trimmed and upper-cased.
pub fn canonical_code(raw: &str) -> String {
    let trimmed = raw.trim();
    match CODE_RE.captures(trimmed) {
        Some(caps) => format!("{} {}", caps[1].to_uppercase(), caps[2].to_uppercase()),
        None => trimmed.to_uppercase(),
    }
}

/// Split a canonical code into its department and numeric level.
pub fn split_code(code: &str) -> Option<(&str, u32)> {
    let (dept, rest) = code.split_once(' ')?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let level = rest[..digits_end].parse().ok()?;
    Some((dept, level))
}

/// Department + minimum level filter such as `CS 3000+` or `STEM 2000+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFilter {
    department: String,
    min_level: u32,
}

impl CodeFilter {
    pub fn new(department: &str, min_level: u32) -> Self {
        Self {
            department: department.trim().to_uppercase(),
            min_level,
        }
    }

    pub fn matches(&self, code: &str) -> bool {
        let Some((dept, level)) = split_code(code) else {
            return false;
        };
        if level < self.min_level {
            return false;
        }
        if self.department == "STEM" {
            STEM_DEPARTMENTS.contains(&dept)
        } else {
            dept == self.department
        }
    }
}

impl fmt::Display for CodeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}+", self.department, self.min_level)
    }
}

impl FromStr for CodeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = FILTER_RE
            .captures(s.trim())
            .ok_or_else(|| format!("invalid course filter '{s}' (expected e.g. \"CS 3000+\")"))?;
        let min_level = caps[2]
            .parse()
            .map_err(|_| format!("invalid level in course filter '{s}'"))?;
        Ok(CodeFilter::new(&caps[1], min_level))
    }
}
