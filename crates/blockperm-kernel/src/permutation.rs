//! Permutations of `1..n` and matrix conjugation.
//!
//! The decomposition is exposed by relabeling rows and columns together:
//! the remainder `w0` first, then `B1`, then `B2`.

use crate::error::DecompositionError;
use crate::matrix::Matrix;
use crate::realm::Blocks;
use serde::{Deserialize, Serialize};

/// A bijection on the labels `1..=n`, stored as the label sequence.
///
/// `labels[k]` is the original label placed at position `k`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Permutation {
    labels: Vec<usize>,
    /// `rank[label - 1]` is the position of `label`.
    rank: Vec<usize>,
}

impl Permutation {
    /// Validate a label sequence: every label of `1..=len` exactly once.
    pub fn from_labels(labels: Vec<usize>) -> Result<Self, DecompositionError> {
        let n = labels.len();
        let mut rank = vec![usize::MAX; n];
        for (position, &label) in labels.iter().enumerate() {
            if label == 0 || label > n {
                return Err(DecompositionError::LabelOutOfRange { label, n });
            }
            if rank[label - 1] != usize::MAX {
                return Err(DecompositionError::DuplicateLabel(label));
            }
            rank[label - 1] = position;
        }
        Ok(Self { labels, rank })
    }

    pub fn identity(n: usize) -> Self {
        Self {
            labels: (1..=n).collect(),
            rank: (0..n).collect(),
        }
    }

    /// `w0 ++ B1 ++ B2`, where `w0` is `universal` minus both blocks in
    /// `universal` order.
    pub fn build(blocks: &Blocks, universal: &[usize]) -> Result<Self, DecompositionError> {
        let n = universal.len();
        for &label in blocks.b1.iter().chain(&blocks.b2) {
            if label == 0 || label > n {
                return Err(DecompositionError::LabelOutOfRange { label, n });
            }
        }
        if let Some(&shared) = blocks.b1.iter().find(|v| blocks.b2.contains(v)) {
            return Err(DecompositionError::OverlappingBlocks(shared));
        }

        let labels: Vec<usize> = universal
            .iter()
            .copied()
            .filter(|v| !blocks.b1.contains(v) && !blocks.b2.contains(v))
            .chain(blocks.b1.iter().copied())
            .chain(blocks.b2.iter().copied())
            .collect();

        if labels.len() != n {
            return Err(DecompositionError::PermutationLength {
                expected: n,
                actual: labels.len(),
            });
        }
        Self::from_labels(labels)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Position of `label` (1-based label, 0-based position).
    pub fn position_of(&self, label: usize) -> usize {
        self.rank[label - 1]
    }

    pub fn is_identity(&self) -> bool {
        self.labels.iter().enumerate().all(|(k, &label)| label == k + 1)
    }

    /// Conjugate `matrix` by this permutation.
    ///
    /// Output row `k` is original row `labels[k] - 1`; a 1 at original column
    /// `c` lands in output column `position_of(c + 1)`.
    pub fn apply(&self, matrix: &Matrix) -> Result<Matrix, DecompositionError> {
        let n = matrix.dimension();
        if self.len() != n {
            return Err(DecompositionError::PermutationLength {
                expected: n,
                actual: self.len(),
            });
        }

        let rows = self
            .labels
            .iter()
            .map(|&label| {
                let mut row = vec![0u8; n];
                for (c, &value) in matrix.rows()[label - 1].iter().enumerate() {
                    if value == 1 {
                        row[self.position_of(c + 1)] = 1;
                    }
                }
                row
            })
            .collect();
        Ok(Matrix::from_trusted(rows))
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = DecompositionError;

    fn try_from(labels: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_labels(labels)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(permutation: Permutation) -> Self {
        permutation.labels
    }
}

/// `w0 ++ B1 ++ B2` as a plain label sequence.
pub fn build_permutation(
    b1: &[usize],
    b2: &[usize],
    universal: &[usize],
) -> Result<Vec<usize>, DecompositionError> {
    let blocks = Blocks {
        b1: b1.to_vec(),
        b2: b2.to_vec(),
    };
    Permutation::build(&blocks, universal).map(Vec::from)
}

/// Conjugate `matrix` by a label sequence.
pub fn apply_permutation(
    permutation: &[usize],
    matrix: &Matrix,
) -> Result<Matrix, DecompositionError> {
    Permutation::from_labels(permutation.to_vec())?.apply(matrix)
}
