// tests/integration/end_to_end.rs

use courseplan::cli::CliArgs;
use courseplan::config::{load_and_validate, load_request};
use courseplan::scheduler::Scheduler;
use courseplan::{analyze_plan, run, validate};

use crate::common::{TestResult, demo_path, init_tracing};

fn args(request: Option<&str>) -> CliArgs {
    CliArgs {
        catalog: demo_path("cs-major.toml"),
        request: request.map(demo_path),
        log_level: None,
        roadmap: false,
        dry_run: false,
    }
}

#[test]
fn demo_request_generates_a_complete_core_plan() -> TestResult {
    init_tracing();
    let program = load_and_validate(demo_path("cs-major.toml"))?;
    let request = load_request(demo_path("request.toml"))?;

    assert_eq!(program.catalog.len(), 19);
    assert_eq!(program.requirements.len(), 7);
    assert!(request.options.balanced);
    assert_eq!(request.options.semester_count, 6);

    let outcome = Scheduler::new(
        &program.catalog,
        &program.requirements,
        &request.student,
        request.options,
    )?
    .with_graduation_credits(program.graduation_credits)
    .run();

    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
    assert!(outcome.unplaced.is_empty());
    assert_eq!(outcome.metadata.courses_placed, 10);
    assert_eq!(outcome.metadata.credits_planned, 31);
    assert_eq!(outcome.metadata.existing_credits, 14);
    assert_eq!(outcome.metadata.credit_shortfall, 120 - 31 - 14);

    let plan = &outcome.plan;
    for code in ["CS 1114", "CS 2114", "MATH 1225", "MATH 1226"] {
        assert!(!plan.contains(code), "{code} is already taken");
    }
    let slot = |code: &str| plan.slot_of(code).ok_or(format!("{code} not placed"));
    assert!(slot("CS 2505")? < slot("CS 2506")?);
    assert!(slot("CS 2506")? < slot("CS 3214")?);
    assert!(slot("MATH 2534")? < slot("CS 3114")?);
    assert!(slot("CS 3114")? < slot("CS 4104")?);
    // Electives stay out of generated plans.
    assert!(!plan.contains("CS 4284"));

    let report = analyze_plan(
        plan,
        &program.catalog,
        &program.requirements,
        &request.student,
        program.graduation_credits,
    );
    assert!(report.analysis.issues.is_empty(), "{:?}", report.analysis.issues);
    assert!(
        report
            .analysis
            .suggestions
            .contains(&"Systems Elective: plan 1 more from CS 4254, CS 4284".to_string())
    );
    Ok(())
}

#[test]
fn demo_manual_plan_has_no_issues() -> TestResult {
    let program = load_and_validate(demo_path("cs-major.toml"))?;
    let request = load_request(demo_path("manual-plan.toml"))?;
    let plan = request.plan.ok_or("manual plan missing")?;

    assert_eq!(plan.semester_count(), 4);
    assert_eq!(plan.course_count(), 14);

    let analysis = validate(&plan, &program.catalog, &request.student);
    assert!(analysis.issues.is_empty(), "{:?}", analysis.issues);
    assert!(
        analysis
            .suggestions
            .contains(&"Fall Y1: heavy load (17 credits)".to_string())
    );
    assert!(
        analysis
            .positives
            .contains(&"CS 3214 is taught by a highly rated instructor (Back, 4.6)".to_string())
    );

    let report = analyze_plan(
        &plan,
        &program.catalog,
        &program.requirements,
        &request.student,
        program.graduation_credits,
    );
    assert!(report.analysis.issues.is_empty(), "{:?}", report.analysis.issues);
    assert!(report.progress.categories.iter().all(|c| c.remaining_units() == 0));
    assert_eq!(report.progress.credits_completed, 7);
    assert_eq!(report.progress.credits_planned, 44);
    Ok(())
}

#[test]
fn run_generates_and_reports() -> TestResult {
    init_tracing();
    let mut cli = args(Some("request.toml"));
    cli.roadmap = true;
    run(cli)?;
    Ok(())
}

#[test]
fn run_validates_manual_plan() -> TestResult {
    run(args(Some("manual-plan.toml")))?;
    Ok(())
}

#[test]
fn run_without_request_plans_from_scratch() -> TestResult {
    run(args(None))?;
    Ok(())
}

#[test]
fn dry_run_only_loads() -> TestResult {
    let mut cli = args(Some("does-not-exist.toml"));
    cli.dry_run = true;
    // The request is never read on a dry run.
    run(cli)?;
    Ok(())
}

#[test]
fn run_fails_on_missing_catalog() {
    let mut cli = args(None);
    cli.catalog = demo_path("missing.toml");
    assert!(run(cli).is_err());
}
