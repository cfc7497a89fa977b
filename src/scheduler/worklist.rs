// src/scheduler/worklist.rs

/// One candidate course, by catalog position.
#[derive(Debug, Clone, Copy)]
struct Entry {
    catalog_pos: usize,
    pending: bool,
}

/// Arena of candidate courses for the fixed-point placement loop.
///
/// Entries are never removed; placing a course only clears its `pending`
/// flag, so iterating while placing is safe.
#[derive(Debug, Clone, Default)]
pub struct Worklist {
    entries: Vec<Entry>,
}

impl Worklist {
    /// Candidates must be given in catalog order.
    pub fn new(catalog_positions: impl IntoIterator<Item = usize>) -> Self {
        Self {
            entries: catalog_positions
                .into_iter()
                .map(|catalog_pos| Entry {
                    catalog_pos,
                    pending: true,
                })
                .collect(),
        }
    }

    /// Slots of pending entries in reverse catalog order (the order of a pass).
    pub fn pending_reversed(&self) -> Vec<usize> {
        (0..self.entries.len())
            .rev()
            .filter(|&slot| self.entries[slot].pending)
            .collect()
    }

    /// Catalog positions of pending entries, in catalog order.
    pub fn pending_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .filter(|e| e.pending)
            .map(|e| e.catalog_pos)
    }

    pub fn catalog_pos(&self, slot: usize) -> usize {
        self.entries[slot].catalog_pos
    }

    pub fn mark_placed(&mut self, slot: usize) {
        self.entries[slot].pending = false;
    }

    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|e| e.pending).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
