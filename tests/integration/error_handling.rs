// tests/integration/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;

use courseplan::config::{load_and_validate, load_request, program_from_str, request_from_str};
use courseplan::errors::PlanError;

use crate::common::TestResult;

fn invalid_input_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<PlanError>() {
        Some(PlanError::InvalidInput(msg)) => msg.clone(),
        other => panic!("expected InvalidInput, got: {other:?} ({err:#})"),
    }
}

#[test]
fn both_prerequisite_forms_are_rejected() {
    let err = program_from_str(
        r#"
[[course]]
code = "CS 3114"
category = "core"
prereqs = ["CS 2114"]

[course.prereqs_structured]
type = "COURSE"
code = "CS 2114"
"#,
    )
    .expect_err("both forms must fail");

    let msg = invalid_input_message(&err);
    assert!(msg.contains("CS 3114"));
    assert!(msg.contains("sets both"));
}

#[test]
fn out_of_range_course_fields_are_rejected() {
    let err = program_from_str(
        r#"
[[course]]
code = "CS 1114"
category = "core"
difficulty = 7
"#,
    )
    .expect_err("difficulty 7 must fail");
    assert!(invalid_input_message(&err).contains("between 1 and 5 (got 7)"));

    let err = program_from_str(
        r#"
[[course]]
code = "CS 1114"
category = "core"
credits = -3
"#,
    )
    .expect_err("negative credits must fail");
    assert!(invalid_input_message(&err).contains("must be positive"));
}

#[test]
fn credit_requirement_needs_exactly_one_filter() {
    for filters in [
        "category = \"elective\"\ncodes = \"CS 3000+\"",
        "",
    ] {
        let text = format!(
            r#"
[[course]]
code = "CS 1114"
category = "core"

[[requirement]]
kind = "credits"
name = "Electives"
min_credits = 6
{filters}
"#
        );
        let err = program_from_str(&text).expect_err("filter count must be checked");
        assert!(invalid_input_message(&err).contains("exactly one of"));
    }
}

#[test]
fn unknown_requirement_kind_is_a_parse_error() {
    let err = program_from_str(
        r#"
[[course]]
code = "CS 1114"
category = "core"

[[requirement]]
kind = "some"
name = "Core"
"#,
    )
    .expect_err("unknown kind must fail");
    assert!(matches!(
        err.downcast_ref::<PlanError>(),
        Some(PlanError::TomlError(_))
    ));
    assert!(format!("{err:#}").contains("parsing TOML program"));
}

#[test]
fn cyclic_catalog_still_loads() -> TestResult {
    let program = program_from_str(
        r#"
[[course]]
code = "CS 1"
category = "core"
prereqs = ["CS 2"]

[[course]]
code = "CS 2"
category = "core"
prereqs = ["CS 1"]
"#,
    )?;
    assert_eq!(program.catalog.graph().cycles().len(), 1);
    Ok(())
}

#[test]
fn unknown_slot_id_is_rejected() {
    let err = request_from_str(
        r#"
[plan]
winter1 = ["CS 1114"]
"#,
    )
    .expect_err("winter is not a term");
    assert!(invalid_input_message(&err).contains("unknown semester id 'winter1'"));
}

#[test]
fn slot_beyond_semester_count_is_rejected() {
    let err = request_from_str(
        r#"
semester_count = 2

[plan]
fall2 = ["CS 1114"]
"#,
    )
    .expect_err("fall2 is slot 2 of a 2-slot plan");
    assert!(invalid_input_message(&err).contains("plan has 2 semesters"));
}

#[test]
fn duplicate_placement_is_rejected() {
    let err = request_from_str(
        r#"
[plan]
fall1 = ["CS 1114"]
spring1 = ["cs1114"]
"#,
    )
    .expect_err("a course can only occupy one slot");
    assert!(invalid_input_message(&err).contains("already placed"));
}

#[test]
fn overlapping_student_sets_are_rejected() {
    let err = request_from_str(
        r#"
completed = ["CS 1114"]
in_progress = ["cs-1114"]
"#,
    )
    .expect_err("completed and in-progress must be disjoint");
    assert!(matches!(
        err.downcast_ref::<PlanError>(),
        Some(PlanError::InvalidInput(_))
    ));
}

#[test]
fn malformed_request_options_are_rejected() {
    for text in [
        "semester_count = 0",
        "semester_count = -2",
        "max_credits_per_semester = 0",
        "max_hard_per_semester = -1",
    ] {
        let err = request_from_str(text).expect_err(text);
        invalid_input_message(&err);
    }
}

#[test]
fn missing_file_reports_path() {
    let err = load_and_validate("/definitely/not/here.toml").expect_err("no such file");
    let chain = format!("{err:#}");
    assert!(chain.contains("reading program file"));
    assert!(chain.contains("/definitely/not/here.toml"));
    assert!(matches!(
        err.downcast_ref::<PlanError>(),
        Some(PlanError::IoError(_))
    ));
}

#[test]
fn malformed_program_file_is_a_toml_error() -> TestResult {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "[[course]]\ncode = 3114")?;

    let err = load_and_validate(file.path()).expect_err("code must be a string");
    assert!(format!("{err:#}").contains("parsing TOML program from"));
    assert!(matches!(
        err.downcast_ref::<PlanError>(),
        Some(PlanError::TomlError(_))
    ));
    Ok(())
}

#[test]
fn request_errors_carry_file_context() -> TestResult {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "semester_count = 0")?;

    let err = load_request(file.path()).expect_err("zero semesters");
    assert!(format!("{err:#}").contains("loading request from"));
    invalid_input_message(&err);
    Ok(())
}

#[test]
fn wrapped_errors_keep_their_source_message() {
    let io = PlanError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
    assert!(matches!(io, PlanError::IoError(_)));
    assert_eq!(io.to_string(), "IO error: gone");

    let toml_err = toml::from_str::<courseplan::config::RequestFile>("balanced = \"yes\"")
        .expect_err("balanced must be a bool");
    let wrapped = PlanError::from(toml_err);
    assert!(wrapped.to_string().starts_with("TOML parsing error"));

    let other = PlanError::from(anyhow::anyhow!("opaque failure"));
    assert_eq!(other.to_string(), "opaque failure");
}

#[test]
fn oversized_credit_counts_are_rejected() -> TestResult {
    let program = |credits: &str| {
        program_from_str(&format!(
            r#"
[[course]]
code = "CS 1000"
category = "core"
credits = 10

[[course]]
code = "CS 2000"
category = "core"
credits = {credits}
"#
        ))
    };

    for credits in ["4294967295", "31"] {
        let err = program(credits).expect_err("credits above the course maximum");
        let msg = invalid_input_message(&err);
        assert!(msg.contains("CS 2000"), "{msg}");
        assert!(msg.contains("at most 30 allowed"), "{msg}");
    }

    let program = program("30")?;
    assert_eq!(program.catalog.credits_of("CS 2000"), 30);
    Ok(())
}

#[test]
fn oversized_semester_values_are_rejected() {
    for id in ["spring9223372036854775809", "fall99999999999999999999999"] {
        let text = format!("[plan]\n{id} = [\"CS 1000\"]\n");
        let err = request_from_str(&text).expect_err(id);
        assert!(invalid_input_message(&err).contains("unknown semester id"));
    }

    let err = request_from_str("semester_count = 4294967295").expect_err("too many semesters");
    assert!(invalid_input_message(&err).contains("at most 24"));

    let err = request_from_str(
        r#"
semester_count = 24

[plan]
fall13 = ["CS 1000"]
"#,
    )
    .expect_err("fall13 is slot 24");
    assert!(invalid_input_message(&err).contains("plan has 24 semesters"));
}

#[test]
fn malformed_credit_prerequisites_and_terms_are_rejected() {
    let course_with = |extra: &str| {
        program_from_str(&format!(
            r#"
[[course]]
code = "CS 4944"
category = "core"
{extra}
"#
        ))
    };

    let err = course_with(
        "[course.prereqs_structured]\ntype = \"CREDITS\"\nmin_credits = 0\ndepartment = \"CS\"",
    )
    .expect_err("zero credits");
    assert!(invalid_input_message(&err).contains("min_credits must be positive"));

    let err = course_with(
        "[course.prereqs_structured]\ntype = \"CREDITS\"\nmin_credits = 12\ndepartment = \" \"",
    )
    .expect_err("blank department");
    assert!(invalid_input_message(&err).contains("needs a department"));

    let err = course_with("offered = [\"Winter\"]").expect_err("winter is not a term");
    let msg = invalid_input_message(&err);
    assert!(msg.contains("CS 4944"));
    assert!(msg.contains("unknown term 'winter'"));
}
