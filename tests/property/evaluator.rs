// tests/property/evaluator.rs

use std::collections::BTreeSet;

use proptest::prelude::*;

use courseplan::catalog::{Catalog, Prereq};
use courseplan::eval::{Evaluator, TakenSet};
use courseplan_test_utils::builders::{CatalogBuilder, CourseBuilder};

const LEAVES: usize = 6;
const TARGET: &str = "CS 100";

fn leaf_code(i: usize) -> String {
    format!("CS {}", i + 1)
}

fn tree_strategy() -> impl Strategy<Value = Prereq> {
    let leaf = (0..LEAVES).prop_map(|i| Prereq::Course(leaf_code(i)));
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..3).prop_map(Prereq::And),
            proptest::collection::vec(inner, 1..3).prop_map(Prereq::Or),
        ]
    })
}

fn catalog_with(tree: Prereq) -> Catalog {
    let mut builder = CatalogBuilder::new();
    for i in 0..LEAVES {
        builder = builder.with_core(&leaf_code(i), &[]);
    }
    builder
        .with_course(CourseBuilder::new(TARGET).prereq_tree(tree).build())
        .build()
}

fn codes_of<'a>(indices: impl Iterator<Item = &'a usize>) -> Vec<String> {
    indices.map(|&i| leaf_code(i)).collect()
}

fn taken_strategy() -> impl Strategy<Value = BTreeSet<usize>> {
    proptest::collection::btree_set(0..LEAVES, 0..=LEAVES)
}

proptest! {
    #[test]
    fn taking_more_courses_never_unsatisfies(
        tree in tree_strategy(),
        base in taken_strategy(),
        extra in taken_strategy(),
    ) {
        let catalog = catalog_with(tree);
        let evaluator = Evaluator::new(&catalog);

        let small_codes = codes_of(base.iter());
        let large_codes = codes_of(base.union(&extra));
        let small = TakenSet::from_codes(small_codes.iter().map(String::as_str));
        let large = TakenSet::from_codes(large_codes.iter().map(String::as_str));

        if evaluator.evaluate(TARGET, &small).satisfied {
            prop_assert!(evaluator.evaluate(TARGET, &large).satisfied);
        }
    }

    #[test]
    fn evaluation_is_repeatable_and_consistent(
        tree in tree_strategy(),
        taken in taken_strategy(),
    ) {
        let catalog = catalog_with(tree);
        let evaluator = Evaluator::new(&catalog);
        let codes = codes_of(taken.iter());
        let taken = TakenSet::from_codes(codes.iter().map(String::as_str));

        let first = evaluator.evaluate(TARGET, &taken);
        let second = evaluator.evaluate(TARGET, &taken);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.satisfied, first.missing.is_empty());
        prop_assert!(first.diagnostics.is_empty());
    }

    #[test]
    fn everything_taken_satisfies_any_tree(tree in tree_strategy()) {
        let catalog = catalog_with(tree);
        let codes: Vec<String> = (0..LEAVES).map(leaf_code).collect();
        let all = TakenSet::from_codes(codes.iter().map(String::as_str));
        prop_assert!(Evaluator::new(&catalog).evaluate(TARGET, &all).satisfied);
    }
}
