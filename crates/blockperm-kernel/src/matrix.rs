//! Square 0/1 structural matrices.
//!
//! A structural matrix records only whether entry (i, j) couples row i to
//! column j. Indices exposed by the rest of the kernel are 1-based labels;
//! this module works with 0-based positions internally.

use crate::error::DecompositionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated square matrix of 0/1 entries with dimension `n >= 1`.
///
/// Construction is the only place the input contract is enforced. Everything
/// downstream assumes a well-formed matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<u8>>")]
pub struct Matrix {
    rows: Vec<Vec<u8>>,
}

impl Matrix {
    /// Validate and wrap a grid of 0/1 cells.
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, DecompositionError> {
        let n = rows.len();
        if n == 0 {
            return Err(DecompositionError::EmptyMatrix);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(DecompositionError::NotSquare {
                    row: i + 1,
                    len: row.len(),
                    expected: n,
                });
            }
            if let Some((j, &value)) = row.iter().enumerate().find(|(_, v)| **v > 1) {
                return Err(DecompositionError::NonBinaryEntry {
                    row: i + 1,
                    col: j + 1,
                    value: i64::from(value),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Rows built by the kernel itself, already known to be square and binary.
    pub(crate) fn from_trusted(rows: Vec<Vec<u8>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        Self { rows }
    }

    /// The `n x n` identity pattern.
    pub fn identity(n: usize) -> Result<Self, DecompositionError> {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| u8::from(i == j)).collect())
            .collect();
        Self::new(rows)
    }

    /// Dimension `n`.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Entry at 0-based position (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Number of 1 entries in 0-based row `row`.
    pub fn ones_in_row(&self, row: usize) -> usize {
        self.rows[row].iter().filter(|v| **v == 1).count()
    }

    /// Number of 1 entries in 0-based column `col`.
    pub fn ones_in_col(&self, col: usize) -> usize {
        self.rows.iter().filter(|row| row[col] == 1).count()
    }

    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = DecompositionError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        let mut cells = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let mut out = Vec::with_capacity(row.len());
            for (j, value) in row.into_iter().enumerate() {
                match value {
                    0 => out.push(0),
                    1 => out.push(1),
                    other => {
                        return Err(DecompositionError::NonBinaryEntry {
                            row: i + 1,
                            col: j + 1,
                            value: other,
                        });
                    }
                }
            }
            cells.push(out);
        }
        Self::new(cells)
    }
}

impl From<Matrix> for Vec<Vec<u8>> {
    fn from(matrix: Matrix) -> Self {
        matrix.rows
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
