//! Zero-sets and the initial working set.
//!
//! A zero-set lists, for one row (or column), the 1-based positions holding
//! a 0: the indices that row is *not* directly coupled to. Every later stage
//! of the decomposition is phrased in terms of these sets.

use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};

/// Row and column zero-sets of one matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZeroSets {
    /// `rows[i]` holds the labels `k` with `matrix[i][k-1] == 0`, ascending.
    pub rows: Vec<Vec<usize>>,
    /// `cols[j]` holds the labels `k` with `matrix[k-1][j] == 0`, ascending.
    pub cols: Vec<Vec<usize>>,
}

impl ZeroSets {
    pub fn of(matrix: &Matrix) -> Self {
        Self {
            rows: row_zero_sets(matrix),
            cols: col_zero_sets(matrix),
        }
    }

    /// Dimension of the underlying matrix.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Zero-set of the row labelled `label` (1-based).
    pub fn row(&self, label: usize) -> &[usize] {
        &self.rows[label - 1]
    }

    /// Zero-set of the column labelled `label` (1-based).
    pub fn col(&self, label: usize) -> &[usize] {
        &self.cols[label - 1]
    }
}

/// Zero positions of every row.
pub fn row_zero_sets(matrix: &Matrix) -> Vec<Vec<usize>> {
    matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, v)| **v == 0)
                .map(|(j, _)| j + 1)
                .collect()
        })
        .collect()
}

/// Zero positions of every column.
pub fn col_zero_sets(matrix: &Matrix) -> Vec<Vec<usize>> {
    let n = matrix.dimension();
    let mut cols: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, row) in matrix.rows().iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            if *value == 0 {
                cols[j].push(i + 1);
            }
        }
    }
    cols
}

/// `[1, 2, ..., n]`.
pub fn universal_set(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

/// Labels whose own row zero-set contains the label itself, ascending.
///
/// These are the indices with a 0 on the diagonal. The result seeds the
/// whole exploration and may be empty.
pub fn initial_omega(row_zero_sets: &[Vec<usize>]) -> Vec<usize> {
    row_zero_sets
        .iter()
        .enumerate()
        .filter(|(index, set)| set.contains(&(index + 1)))
        .map(|(index, _)| index + 1)
        .collect()
}
