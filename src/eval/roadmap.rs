// src/eval/roadmap.rs

use crate::catalog::{Catalog, canonical_code};
use crate::eval::evaluator::{Evaluator, TakenSet};

/// A course the student can enroll in now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableCourse {
    pub code: String,
    pub name: String,
}

/// A course still blocked by prerequisites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedCourse {
    pub code: String,
    pub name: String,
    pub missing: Vec<String>,
}

/// Which untaken catalog courses are open and which are locked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roadmap {
    pub available: Vec<AvailableCourse>,
    pub locked: Vec<LockedCourse>,
}

/// Split every catalog course not in `taken` into available and locked,
/// both sorted by code.
pub fn roadmap<I, S>(catalog: &Catalog, taken: I) -> Roadmap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let taken: Vec<String> = taken
        .into_iter()
        .map(|c| canonical_code(c.as_ref()))
        .collect();
    let taken_set = TakenSet::from_codes(taken.iter().map(String::as_str));
    let evaluator = Evaluator::new(catalog);

    let mut out = Roadmap::default();
    for course in catalog.courses() {
        if taken_set.contains(&course.code) {
            continue;
        }
        let eval = evaluator.evaluate(&course.code, &taken_set);
        if eval.satisfied {
            out.available.push(AvailableCourse {
                code: course.code.clone(),
                name: course.name.clone(),
            });
        } else {
            out.locked.push(LockedCourse {
                code: course.code.clone(),
                name: course.name.clone(),
                missing: eval.missing,
            });
        }
    }

    out.available.sort_by(|a, b| a.code.cmp(&b.code));
    out.locked.sort_by(|a, b| a.code.cmp(&b.code));
    out
}
