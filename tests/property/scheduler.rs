// tests/property/scheduler.rs

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use courseplan::catalog::Catalog;
use courseplan::eval::Evaluator;
use courseplan::plan::StudentState;
use courseplan::scheduler::{PlanOptions, generate_plan};
use courseplan::types::Term;
use courseplan_test_utils::builders::{CatalogBuilder, CourseBuilder, student};

fn code(i: usize) -> String {
    format!("CS {}", 1000 + i)
}

// Acyclic by construction: course N may only require courses 0..N-1.
fn catalog_strategy(max_courses: usize) -> impl Strategy<Value = Catalog> {
    (1..=max_courses).prop_flat_map(|n| {
        proptest::collection::vec(
            (
                proptest::collection::vec(any::<usize>(), 0..3),
                1u32..=5,
                1u8..=5,
                0u8..3,
            ),
            n,
        )
        .prop_map(|specs| {
            let mut builder = CatalogBuilder::new();
            for (i, (raw_deps, credits, difficulty, terms)) in specs.into_iter().enumerate() {
                let deps: BTreeSet<String> = if i == 0 {
                    BTreeSet::new()
                } else {
                    raw_deps.into_iter().map(|d| code(d % i)).collect()
                };
                let deps: Vec<&str> = deps.iter().map(String::as_str).collect();
                builder = builder.with_course(
                    CourseBuilder::new(&code(i))
                        .credits(credits)
                        .difficulty(difficulty)
                        .prereqs(&deps)
                        .offered(offering(terms))
                        .build(),
                );
            }
            builder.build()
        })
    })
}

fn offering(pick: u8) -> &'static [Term] {
    match pick {
        1 => &[Term::Fall],
        2 => &[Term::Spring],
        _ => &[],
    }
}

fn options_strategy() -> impl Strategy<Value = PlanOptions> {
    (any::<bool>(), 1usize..=8, proptest::option::of(3u32..=18)).prop_map(
        |(balanced, semesters, cap)| {
            let base = if balanced {
                PlanOptions::balanced()
            } else {
                PlanOptions::default()
            };
            let base = base.with_semesters(semesters);
            match cap {
                Some(cap) => base.with_credit_cap(cap),
                None => base,
            }
        },
    )
}

fn completed_from(catalog: &Catalog, picks: &[usize]) -> StudentState {
    let codes: BTreeSet<String> = picks
        .iter()
        .map(|p| code(p % catalog.len()))
        .collect();
    let codes: Vec<&str> = codes.iter().map(String::as_str).collect();
    student(&codes, &[])
}

proptest! {
    #[test]
    fn generated_plans_respect_every_constraint(
        catalog in catalog_strategy(12),
        options in options_strategy(),
        picks in proptest::collection::vec(any::<usize>(), 0..4),
    ) {
        let learner = completed_from(&catalog, &picks);
        let outcome = generate_plan(&catalog, &[], &learner, options)
            .expect("options are valid");
        let plan = &outcome.plan;
        let evaluator = Evaluator::new(&catalog);

        // One slot per course.
        prop_assert_eq!(plan.course_count(), plan.all_courses().len());

        for (slot, courses) in plan.semesters() {
            let credits: u32 = courses.iter().map(|c| catalog.credits_of(c)).sum();
            prop_assert!(credits <= options.credit_cap(), "{} over cap: {}", slot, credits);

            if let Some(hard_cap) = options.hard_cap() {
                let hard = courses
                    .iter()
                    .filter_map(|c| catalog.get(c))
                    .filter(|c| c.is_hard())
                    .count();
                prop_assert!(hard as u32 <= hard_cap);
            }

            for code in courses {
                prop_assert!(!learner.has_taken(code));
                prop_assert!(
                    catalog.get(code).is_some_and(|c| c.is_offered_in(slot.term())),
                    "{} placed in a term it is not offered in",
                    code
                );
                prop_assert!(
                    evaluator.prereqs_met(code, slot.index(), plan, &learner),
                    "{} placed in {} before its prerequisites",
                    code,
                    slot
                );
            }
        }

        // Every untaken course is either placed or reported, once.
        let untaken = catalog.courses().filter(|c| !learner.has_taken(&c.code)).count();
        prop_assert_eq!(plan.course_count() + outcome.unplaced.len(), untaken);
        prop_assert_eq!(outcome.warnings.len(), outcome.unplaced.len());
        let unplaced: HashSet<&String> = outcome.unplaced.iter().collect();
        prop_assert_eq!(unplaced.len(), outcome.unplaced.len());
        prop_assert!(outcome.unplaced.iter().all(|c| !plan.contains(c)));

        prop_assert!(outcome.passes <= 20);
        prop_assert_eq!(outcome.metadata.courses_placed, plan.course_count());
    }

    #[test]
    fn generation_is_deterministic(
        catalog in catalog_strategy(8),
        options in options_strategy(),
    ) {
        let learner = student(&[], &[]);
        let first = generate_plan(&catalog, &[], &learner, options).expect("valid options");
        let second = generate_plan(&catalog, &[], &learner, options).expect("valid options");
        prop_assert_eq!(first, second);
    }
}
