//! D-candidates: ordered index pairs with a shared value-set.
//!
//! For a working set Ω and labels `i ≠ j` in Ω, the value-set is
//!
//! ```text
//! value(i, j) = rowZero(i) ∩ colZero(j) ∩ Ω
//! ```
//!
//! kept in the order of `rowZero(i)`. A candidate is *valid* when its value
//! names both of its own labels.
//!
//! Candidates are ranked by descending `|value|` with a stable sort, so ties
//! keep the row-major enumeration order (`i` outer, `j` inner). That order is
//! observable in the final blocks and must not change.

use crate::zero_set::ZeroSets;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

/// One ordered pair `(i, j)` and its value-set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DCandidate {
    pub i: usize,
    pub j: usize,
    pub value: Vec<usize>,
}

impl DCandidate {
    pub fn new(i: usize, j: usize, value: Vec<usize>) -> Self {
        Self { i, j, value }
    }

    /// Whether the value-set contains both `i` and `j`.
    pub fn is_valid(&self) -> bool {
        self.value.contains(&self.i) && self.value.contains(&self.j)
    }

    /// Members of the value-set other than the pair itself that are still in
    /// `omega`, in value order.
    pub fn shrink(&self, omega: &[usize]) -> Vec<usize> {
        self.value
            .iter()
            .copied()
            .filter(|v| *v != self.i && *v != self.j && omega.contains(v))
            .collect()
    }
}

impl fmt::Display for DCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: Vec<String> = self.value.iter().map(usize::to_string).collect();
        write!(f, "({}, {}, [{}])", self.i, self.j, value.join(", "))
    }
}

/// Every pair of `omega`, stably sorted by descending value size. Invalid
/// candidates are kept.
pub fn all_candidates(zero_sets: &ZeroSets, omega: &[usize]) -> Vec<DCandidate> {
    let n = zero_sets.dimension();
    let mut candidates = Vec::new();

    for i in 1..=n {
        if !omega.contains(&i) {
            continue;
        }
        for j in 1..=n {
            if i == j || !omega.contains(&j) {
                continue;
            }
            let value: Vec<usize> = zero_sets
                .row(i)
                .iter()
                .copied()
                .filter(|v| zero_sets.col(j).contains(v) && omega.contains(v))
                .collect();
            candidates.push(DCandidate::new(i, j, value));
        }
    }

    // slice::sort_by_key is stable.
    candidates.sort_by_key(|d| Reverse(d.value.len()));
    candidates
}

/// Valid candidates of `omega`, highest priority first.
pub fn generate(zero_sets: &ZeroSets, omega: &[usize]) -> Vec<DCandidate> {
    separate(all_candidates(zero_sets, omega))
}

/// Keep only valid candidates, preserving order.
pub fn separate(candidates: Vec<DCandidate>) -> Vec<DCandidate> {
    candidates.into_iter().filter(DCandidate::is_valid).collect()
}
