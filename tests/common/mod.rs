#![allow(dead_code)]

use std::error::Error;

use courseplan::catalog::{Catalog, Prereq};
use courseplan::progress::{CreditFilter, RequirementCategory};
use courseplan::types::Category;
use courseplan_test_utils::builders::{CatalogBuilder, CourseBuilder};

pub use courseplan_test_utils::builders::student;
pub use courseplan_test_utils::init_tracing;

pub type TestResult = Result<(), Box<dyn Error>>;

/// Small CS catalog used across suites.
///
/// ```text
/// CS 1114 -> CS 2114 -> CS 3114 (also needs MATH 2534 or MATH 3034) -> CS 3214
///         -> CS 2505 -----------------------------------------------> CS 3214
/// MATH 1225 -> MATH 1226
///           -> MATH 2534
/// STAT 3005
/// electives: CS 4104 (after CS 3114), CS 3744 (after CS 2114)
/// ```
///
/// MATH 3034 is deliberately absent from the catalog.
pub fn cs_catalog() -> Catalog {
    CatalogBuilder::new()
        .with_course(CourseBuilder::new("CS 1114").difficulty(2).build())
        .with_core("CS 2114", &["CS 1114"])
        .with_core("CS 2505", &["CS 1114"])
        .with_course(
            CourseBuilder::new("MATH 1225")
                .category(Category::MathCore)
                .build(),
        )
        .with_course(
            CourseBuilder::new("MATH 1226")
                .category(Category::MathCore)
                .prereqs(&["MATH 1225"])
                .build(),
        )
        .with_course(
            CourseBuilder::new("MATH 2534")
                .category(Category::DiscreteMath)
                .prereqs(&["MATH 1225"])
                .build(),
        )
        .with_course(
            CourseBuilder::new("CS 3114")
                .hard()
                .prereq_tree(Prereq::And(vec![
                    Prereq::course("CS 2114"),
                    Prereq::any_of(["MATH 2534", "MATH 3034"]),
                ]))
                .build(),
        )
        .with_course(
            CourseBuilder::new("CS 3214")
                .difficulty(5)
                .prereqs(&["CS 3114", "CS 2505"])
                .build(),
        )
        .with_course(
            CourseBuilder::new("STAT 3005")
                .category(Category::Statistics)
                .build(),
        )
        .with_course(
            CourseBuilder::new("CS 4104")
                .category(Category::Elective)
                .hard()
                .prereqs(&["CS 3114"])
                .build(),
        )
        .with_course(
            CourseBuilder::new("CS 3744")
                .category(Category::Elective)
                .prereqs(&["CS 2114"])
                .instructor("North", 4.8)
                .build(),
        )
        .build()
}

pub fn cs_requirements() -> Vec<RequirementCategory> {
    vec![
        RequirementCategory::all(
            "CS Core",
            ["CS 1114", "CS 2114", "CS 2505", "CS 3114", "CS 3214"],
        ),
        RequirementCategory::choose(
            "Statistics",
            1,
            ["STAT 3005", "STAT 3104", "STAT 4705", "STAT 4714"],
        ),
        RequirementCategory::credits(
            "CS Electives",
            6,
            CreditFilter::Category(Category::Elective),
        ),
    ]
}

/// Path of a file under `demos/`.
pub fn demo_path(name: &str) -> String {
    format!("{}/demos/{name}", env!("CARGO_MANIFEST_DIR"))
}
