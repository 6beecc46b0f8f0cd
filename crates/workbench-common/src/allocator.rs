//! Smallest-free-integer id allocation.
//!
//! Each pane category (editors, compilers) owns one allocator. Ids start at 1
//! and the lowest free id is always handed out next, so ids stay small and are
//! reused as panes close.

use std::collections::BTreeSet;

use tracing::debug;

use crate::errors::IdError;

/// Ids at or above this value are never handed out by [`IdAllocator::next`].
pub const DEFAULT_ID_CEILING: u32 = 100_000;

#[derive(Debug, Clone)]
pub struct IdAllocator {
    used: BTreeSet<u32>,
    ceiling: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::with_ceiling(DEFAULT_ID_CEILING)
    }

    /// Allocator that hands out ids in `1..ceiling`.
    pub fn with_ceiling(ceiling: u32) -> Self {
        Self {
            used: BTreeSet::new(),
            ceiling,
        }
    }

    /// Mark `id` as in use. Adding an id twice is harmless.
    pub fn add(&mut self, id: u32) {
        self.used.insert(id);
    }

    /// Release `id`. Releasing an id that was never added is a no-op.
    pub fn remove(&mut self, id: u32) {
        self.used.remove(&id);
    }

    /// Claim and return the smallest positive id not currently in use.
    pub fn next(&mut self) -> Result<u32, IdError> {
        // The set is ordered, so the first gap in 1, 2, 3, ... is the answer.
        let mut candidate = 1u32;
        for &id in self.used.range(1..) {
            if id != candidate {
                break;
            }
            candidate += 1;
        }

        if candidate >= self.ceiling {
            return Err(IdError::CapacityExceeded {
                ceiling: self.ceiling,
            });
        }

        self.used.insert(candidate);
        debug!(id = candidate, in_use = self.used.len(), "allocated id");
        Ok(candidate)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.used.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Ids currently in use, ascending.
    pub fn in_use(&self) -> Vec<u32> {
        self.used.iter().copied().collect()
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
