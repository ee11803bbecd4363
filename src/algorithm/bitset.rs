use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of strip ids
///
/// Strip ids are arena indices, so membership is a single bit per strip.
/// Ids outside the capacity are ignored on insert and never contained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripSet {
    bits: BitVec,
}

impl StripSet {
    /// Create a set with no strips present
    pub fn new(strip_count: usize) -> Self {
        Self {
            bits: bitvec![0; strip_count],
        }
    }

    /// Create a set containing every strip
    pub fn all(strip_count: usize) -> Self {
        Self {
            bits: bitvec![1; strip_count],
        }
    }

    /// Add a strip
    pub fn insert(&mut self, strip: usize) {
        if strip < self.bits.len() {
            self.bits.set(strip, true);
        }
    }

    /// Remove a strip
    pub fn remove(&mut self, strip: usize) {
        if strip < self.bits.len() {
            self.bits.set(strip, false);
        }
    }

    /// Test strip membership
    pub fn contains(&self, strip: usize) -> bool {
        self.bits.get(strip).as_deref() == Some(&true)
    }

    /// Remove every strip
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Count strips in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Member strip ids in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for StripSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StripSet({} strips: {:?})", self.count(), self.to_vec())
    }
}
