// src/plan/slot.rs

use std::fmt;

use crate::types::Term;

/// Position of a semester in the plan. Slot 0 is the first Fall term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemesterSlot {
    index: usize,
}

impl SemesterSlot {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn term(self) -> Term {
        if self.index % 2 == 0 {
            Term::Fall
        } else {
            Term::Spring
        }
    }

    /// Academic year, starting at 1.
    pub fn year(self) -> usize {
        self.index / 2 + 1
    }

    /// Stable identifier such as `fall1` or `spring3`.
    pub fn id(self) -> String {
        format!("{}{}", self.term().as_str().to_lowercase(), self.year())
    }

    /// Display label such as `Fall Y1`.
    pub fn label(self) -> String {
        format!("{} Y{}", self.term(), self.year())
    }

    /// Parse an identifier produced by [`SemesterSlot::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_lowercase();
        let (term, year) = if let Some(rest) = id.strip_prefix("fall") {
            (0, rest)
        } else if let Some(rest) = id.strip_prefix("spring") {
            (1, rest)
        } else {
            return None;
        };
        let year: usize = year.parse().ok()?;
        let index = year.checked_sub(1)?.checked_mul(2)?.checked_add(term)?;
        Some(Self::new(index))
    }
}

impl fmt::Display for SemesterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
