use bitvec::prelude::*;
use std::fmt;

use crate::spatial::brick::BrickId;

/// Fixed-size bitset for tracking brick membership in scheduler regions
///
/// Indexed by [`BrickId`]. Provides O(1) membership testing, which the
/// scheduler needs for every candidate in every window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrickSet {
    bits: BitVec,
}

impl BrickSet {
    /// Create a set with no bricks present
    pub fn new(max_bricks: usize) -> Self {
        Self {
            bits: bitvec![0; max_bricks],
        }
    }

    /// Create a set from brick ids, ignoring ids beyond capacity
    pub fn from_ids(max_bricks: usize, ids: impl IntoIterator<Item = BrickId>) -> Self {
        let mut set = Self::new(max_bricks);
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Insert a brick
    pub fn insert(&mut self, id: BrickId) {
        if id < self.bits.len() {
            self.bits.set(id, true);
        }
    }

    /// Test brick membership
    pub fn contains(&self, id: BrickId) -> bool {
        self.bits.get(id).as_deref() == Some(&true)
    }

    /// Add every member of another set in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Create a new set containing the members of both
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Remove every member of another set in-place
    pub fn difference_with(&mut self, other: &Self) {
        let keep = !other.bits.clone();
        self.bits &= &keep;
    }

    /// Test if no bricks are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count bricks in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract member ids in ascending order
    pub fn to_vec(&self) -> Vec<BrickId> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for BrickSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BrickSet({} bricks: {:?})", self.count(), self.to_vec())
    }
}
