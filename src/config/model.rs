// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// A degree program as read from a TOML file.
///
/// ```toml
/// [settings]
/// graduation_credits = 120
///
/// [[course]]
/// code = "CS 2114"
/// name = "Software Design and Data Structures"
/// category = "core"
/// difficulty = 4
/// prereqs = ["CS 1114"]
///
/// [[course]]
/// code = "CS 3114"
/// name = "Data Structures and Algorithms"
/// category = "core"
///
/// [course.prereqs_structured]
/// type = "AND"
/// requirements = [
///     { type = "COURSE", code = "CS 2114" },
///     { type = "OR", requirements = [{ type = "COURSE", code = "MATH 2534" }, { type = "COURSE", code = "MATH 3034" }] },
/// ]
///
/// [[course]]
/// code = "CS 4944"
/// name = "Capstone"
/// category = "core"
/// offered = ["Spring"]
///
/// [course.prereqs_structured]
/// type = "CREDITS"
/// min_credits = 12
/// department = "CS"
/// min_level = 3000
///
/// [[requirement]]
/// kind = "choose"
/// name = "Statistics"
/// pick = 1
/// from = ["STAT 3005", "STAT 3104", "STAT 4705", "STAT 4714"]
/// ```
///
/// Numeric fields are read as signed integers so that out-of-range values
/// are reported by validation rather than as TOML type errors.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramFile {
    #[serde(default)]
    pub settings: SettingsSection,

    /// Courses in catalog order.
    #[serde(default, rename = "course")]
    pub courses: Vec<CourseConfig>,

    #[serde(default, rename = "requirement")]
    pub requirements: Vec<RequirementConfig>,
}

/// `[settings]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsSection {
    #[serde(default = "default_graduation_credits")]
    pub graduation_credits: i64,
}

fn default_graduation_credits() -> i64 {
    120
}

impl Default for SettingsSection {
    fn default() -> Self {
        Self {
            graduation_credits: default_graduation_credits(),
        }
    }
}

/// `[[course]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    pub code: String,

    #[serde(default)]
    pub name: String,

    #[serde(default = "default_credits")]
    pub credits: i64,

    pub category: String,

    #[serde(default = "default_scale")]
    pub difficulty: i64,

    #[serde(default = "default_scale")]
    pub workload: i64,

    /// Flat prerequisite list, all of which are needed.
    #[serde(default)]
    pub prereqs: Option<Vec<String>>,

    /// Prerequisite tree. Mutually exclusive with `prereqs`.
    #[serde(default)]
    pub prereqs_structured: Option<PrereqNode>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub instructor: Option<String>,

    #[serde(default)]
    pub instructor_rating: Option<f64>,

    /// Terms the course runs in (`["Fall"]`); empty means every term.
    #[serde(default)]
    pub offered: Vec<String>,
}

fn default_credits() -> i64 {
    3
}

fn default_scale() -> i64 {
    3
}

/// Node of `prereqs_structured`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum PrereqNode {
    And {
        #[serde(default)]
        requirements: Vec<PrereqNode>,
    },
    Or {
        #[serde(default)]
        requirements: Vec<PrereqNode>,
    },
    Course {
        code: String,
    },
    /// `{ type = "CREDITS", min_credits = 12, department = "CS", min_level = 3000 }`
    Credits {
        min_credits: i64,
        department: String,
        #[serde(default)]
        min_level: i64,
    },
}

/// `[[requirement]]` entry, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RequirementConfig {
    All {
        name: String,
        courses: Vec<String>,
    },
    Choose {
        name: String,
        pick: i64,
        from: Vec<String>,
    },
    /// Exactly one of `category` or `codes` (e.g. `"CS 3000+"`).
    Credits {
        name: String,
        min_credits: i64,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        codes: Option<String>,
    },
}

/// A planning request as read from a TOML file.
///
/// ```toml
/// completed = ["CS 1114", "MATH 1225"]
/// in_progress = ["CS 2114"]
/// balanced = true
/// semester_count = 6
///
/// # Optional: validate this plan instead of generating one.
/// [plan]
/// fall1 = ["CS 2505", "MATH 2534"]
/// spring1 = ["CS 3114"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestFile {
    #[serde(default)]
    pub completed: Vec<String>,

    #[serde(default)]
    pub in_progress: Vec<String>,

    #[serde(default)]
    pub max_credits_per_semester: Option<i64>,

    #[serde(default)]
    pub max_hard_per_semester: Option<i64>,

    #[serde(default)]
    pub balanced: bool,

    #[serde(default)]
    pub semester_count: Option<i64>,

    /// Manual plan keyed by slot id (`fall1`, `spring1`, ...).
    #[serde(default)]
    pub plan: Option<BTreeMap<String, Vec<String>>>,
}
