// src/lib.rs

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod eval;
pub mod logging;
pub mod plan;
pub mod progress;
pub mod scheduler;
pub mod types;

use anyhow::Result;
use tracing::{debug, info};

pub use analysis::{Analysis, DegreeAnalysis, Simulation, analyze_plan, simulate_addition, validate};
pub use catalog::{Catalog, Course, Prereq};
pub use errors::PlanError;
pub use eval::{Diagnostic, Evaluation, Evaluator, Roadmap, roadmap};
pub use plan::{Plan, SemesterSlot, StudentState};
pub use progress::{ProgressReport, RequirementCategory, compute_progress};
pub use scheduler::{PlanOptions, PlanOutcome, Scheduler, generate_plan};
pub use types::{Category, Term};

use crate::cli::CliArgs;
use crate::config::{PlanRequest, Program, RequestFile, load_and_validate, load_request};
use crate::progress::{ProgressUnit, RequirementRule};

/// High-level entry point used by `main.rs`.
///
/// Loads the program and request, then either validates the request's
/// manual plan or generates one, and prints the report to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let program = load_and_validate(&args.catalog)?;

    if args.dry_run {
        print_dry_run(&program);
        return Ok(());
    }

    let request = match &args.request {
        Some(path) => load_request(path)?,
        None => PlanRequest::try_from(RequestFile::default())?,
    };

    if args.roadmap {
        let map = roadmap(&program.catalog, request.student.taken());
        print_roadmap(&map);
    }

    let plan = match request.plan {
        Some(plan) => {
            info!(courses = plan.course_count(), "validating manual plan");
            plan
        }
        None => {
            let outcome = Scheduler::new(
                &program.catalog,
                &program.requirements,
                &request.student,
                request.options,
            )?
            .with_graduation_credits(program.graduation_credits)
            .run();
            print_outcome(&outcome, &program);
            outcome.plan
        }
    };

    let report = analyze_plan(
        &plan,
        &program.catalog,
        &program.requirements,
        &request.student,
        program.graduation_credits,
    );
    print_analysis(&report);

    debug!("run complete");
    Ok(())
}

fn print_dry_run(program: &Program) {
    let catalog = &program.catalog;
    println!("courseplan dry-run");
    println!("  settings.graduation_credits = {}", program.graduation_credits);
    println!();

    println!("courses ({}):", catalog.len());
    for course in catalog.courses() {
        println!("  - {} ({})", course.code, course.name);
        println!(
            "      credits: {}  category: {}  difficulty: {}  workload: {}",
            course.credits, course.category, course.difficulty, course.workload
        );
        if !course.prereqs.is_empty() {
            println!("      prereqs: {}", course.prereqs);
        }
        let unlocks = catalog.graph().dependents_of(&course.code);
        if !unlocks.is_empty() {
            println!("      unlocks: {}", unlocks.join(", "));
        }
        if course.required {
            println!("      required: true");
        }
    }

    let cycles = catalog.graph().cycles();
    if !cycles.is_empty() {
        println!();
        println!("prerequisite cycles ({}):", cycles.len());
        for cycle in cycles {
            println!("  - {}", cycle.join(" -> "));
        }
    }

    println!();
    println!("requirements ({}):", program.requirements.len());
    for req in &program.requirements {
        println!("  - {}: {}", req.name, describe_rule(req));
    }

    debug!("dry-run complete (no planning)");
}

fn describe_rule(req: &RequirementCategory) -> String {
    match &req.rule {
        RequirementRule::All { courses } => format!("all of {}", courses.join(", ")),
        RequirementRule::Choose { pick, from } => format!("{pick} of {}", from.join(", ")),
        RequirementRule::Credits {
            min_credits,
            filter,
        } => format!("{min_credits} credits from {filter}"),
    }
}

fn print_roadmap(map: &Roadmap) {
    println!("available now ({}):", map.available.len());
    for course in &map.available {
        println!("  - {} ({})", course.code, course.name);
    }
    println!("locked ({}):", map.locked.len());
    for course in &map.locked {
        println!("  - {}: needs {}", course.code, course.missing.join(", "));
    }
    println!();
}

fn print_outcome(outcome: &PlanOutcome, program: &Program) {
    println!("plan ({} passes):", outcome.passes);
    for (slot, courses) in outcome.plan.semesters() {
        let credits = courses
            .iter()
            .map(|c| program.catalog.credits_of(c))
            .fold(0, u32::saturating_add);
        let listed: Vec<&str> = courses.iter().map(String::as_str).collect();
        println!("  {:<10} {:>2} cr  {}", slot.label(), credits, listed.join(", "));
    }

    let meta = &outcome.metadata;
    println!(
        "  {} courses, {} credits planned, {} existing, {} semesters used",
        meta.courses_placed, meta.credits_planned, meta.existing_credits, meta.semesters_used
    );
    if meta.credit_shortfall > 0 {
        println!(
            "  {} credits short of the {} needed to graduate",
            meta.credit_shortfall, program.graduation_credits
        );
    }

    if !outcome.warnings.is_empty() {
        println!();
        println!("warnings ({}):", outcome.warnings.len());
        for warning in &outcome.warnings {
            println!("  - {warning}");
        }
    }
    println!();
}

fn print_analysis(report: &DegreeAnalysis) {
    let analysis = &report.analysis;
    println!("analysis (score {}/100):", analysis.overall_score);
    for (title, entries) in [
        ("issues", &analysis.issues),
        ("suggestions", &analysis.suggestions),
        ("positives", &analysis.positives),
    ] {
        if entries.is_empty() {
            continue;
        }
        println!("  {title}:");
        for entry in entries {
            println!("    - {entry}");
        }
    }

    let progress = &report.progress;
    println!();
    println!("degree progress ({}% overall):", progress.overall_percent);
    for cat in &progress.categories {
        let unit = match cat.unit {
            ProgressUnit::Courses => "courses",
            ProgressUnit::Credits => "credits",
        };
        println!(
            "  {:<24} {:>3}%  {}/{} {unit} done, {} planned",
            cat.name, cat.percent, cat.completed_units, cat.required_units, cat.planned_units
        );
    }
    println!(
        "  credits: {} completed, {} planned, {} remaining",
        progress.credits_completed, progress.credits_planned, progress.credits_remaining
    );

    if !report.course_suggestions.is_empty() {
        println!();
        println!("course suggestions:");
        for s in &report.course_suggestions {
            let status = if s.prereqs_met {
                "ready".to_string()
            } else {
                format!("needs {}", s.missing_prereqs.join(", "))
            };
            println!("  [{:<6}] {:<10} {} ({status})", s.priority, s.course, s.reason);
        }
    }
}
