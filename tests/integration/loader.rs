// tests/integration/loader.rs

use std::io::Write;

use tempfile::NamedTempFile;

use courseplan::catalog::{CodeFilter, Prereq};
use courseplan::config::{load_and_validate, load_from_path, program_from_str};
use courseplan::progress::{CreditFilter, RequirementRule};
use courseplan::types::{Category, Term};

use crate::common::{TestResult, init_tracing};

const PROGRAM: &str = r#"
[[course]]
code = "cs2114"
category = "core"
prereqs = ["CS 1114"]

[[course]]
code = "CS 1114"
name = "Introduction to Software Design"
category = "core"
difficulty = 2

[[course]]
code = "CS 3114"
category = "core"
difficulty = 4
instructor = "Shaffer"
instructor_rating = 4.2

[course.prereqs_structured]
type = "AND"
requirements = [
    { type = "COURSE", code = "CS 2114" },
    { type = "OR", requirements = [{ type = "COURSE", code = "math2534" }, { type = "COURSE", code = "MATH 3034" }] },
]

[[requirement]]
kind = "all"
name = "Core"
courses = ["CS 1114", "CS 2114", "CS 3114", "CS 9999"]

[[requirement]]
kind = "credits"
name = "Upper"
min_credits = 3
codes = "CS 3000+"
"#;

fn program_file() -> Result<NamedTempFile, std::io::Error> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{PROGRAM}")?;
    Ok(file)
}

#[test]
fn raw_file_keeps_defaults_unvalidated() -> TestResult {
    let file = program_file()?;
    let raw = load_from_path(file.path())?;

    assert_eq!(raw.settings.graduation_credits, 120);
    assert_eq!(raw.courses.len(), 3);
    assert_eq!(raw.courses[0].code, "cs2114");
    assert_eq!(raw.courses[0].credits, 3);
    assert_eq!(raw.courses[0].workload, 3);
    assert!(raw.courses[2].prereqs_structured.is_some());
    assert_eq!(raw.requirements.len(), 2);
    Ok(())
}

#[test]
fn validated_program_keeps_file_order_and_canonical_codes() -> TestResult {
    init_tracing();
    let file = program_file()?;
    let program = load_and_validate(file.path())?;

    assert_eq!(program.graduation_credits, 120);
    let codes: Vec<&str> = program.catalog.courses().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["CS 2114", "CS 1114", "CS 3114"]);

    let intro = program.catalog.get("CS 1114").ok_or("CS 1114 missing")?;
    assert_eq!(intro.name, "Introduction to Software Design");
    assert_eq!(intro.category, Category::Core);

    // An empty name falls back to the code.
    let ds = program.catalog.get("CS 2114").ok_or("CS 2114 missing")?;
    assert_eq!(ds.name, "CS 2114");
    Ok(())
}

#[test]
fn structured_prerequisites_are_lowered() -> TestResult {
    let file = program_file()?;
    let program = load_and_validate(file.path())?;

    let course = program.catalog.get("CS 3114").ok_or("CS 3114 missing")?;
    assert_eq!(
        course.prereqs,
        Prereq::And(vec![
            Prereq::course("CS 2114"),
            Prereq::any_of(["MATH 2534", "MATH 3034"]),
        ])
    );
    assert_eq!(course.prereqs.to_string(), "CS 2114 AND (MATH 2534 OR MATH 3034)");
    assert_eq!(course.instructor.as_deref(), Some("Shaffer"));
    assert!(course.is_hard());
    Ok(())
}

#[test]
fn requirements_are_lowered_in_order() -> TestResult {
    let file = program_file()?;
    let program = load_and_validate(file.path())?;

    assert_eq!(program.requirements.len(), 2);
    // Codes outside the catalog only warn.
    assert_eq!(
        program.requirements[0].listed_courses(),
        &["CS 1114", "CS 2114", "CS 3114", "CS 9999"]
    );
    match &program.requirements[1].rule {
        RequirementRule::Credits {
            min_credits,
            filter: CreditFilter::Code(filter),
        } => {
            assert_eq!(*min_credits, 3);
            assert_eq!(filter.to_string(), "CS 3000+");
        }
        other => panic!("expected a code-filtered credit rule, got {other:?}"),
    }
    Ok(())
}

#[test]
fn credit_prerequisites_and_offerings_are_lowered() -> TestResult {
    let program = program_from_str(
        r#"
[[course]]
code = "CS 4944"
category = "core"
offered = ["spring"]

[course.prereqs_structured]
type = "OR"
requirements = [
    { type = "COURSE", code = "cs4104" },
    { type = "CREDITS", min_credits = 12, department = "cs", min_level = 3000 },
]

[[course]]
code = "CS 4104"
category = "elective"
offered = ["Fall", "Spring"]
"#,
    )?;

    let capstone = program.catalog.get("CS 4944").ok_or("CS 4944 missing")?;
    assert_eq!(
        capstone.prereqs,
        Prereq::Or(vec![
            Prereq::course("CS 4104"),
            Prereq::credits(12, CodeFilter::new("CS", 3000)),
        ])
    );
    assert_eq!(capstone.prereqs.to_string(), "CS 4104 OR 12 credits of CS 3000+");
    assert_eq!(capstone.offered, vec![Term::Spring]);
    assert!(!capstone.is_offered_in(Term::Fall));

    let algorithms = program.catalog.get("CS 4104").ok_or("CS 4104 missing")?;
    assert!(algorithms.is_offered_in(Term::Fall) && algorithms.is_offered_in(Term::Spring));
    Ok(())
}
