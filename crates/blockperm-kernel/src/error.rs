//! Error types for blockperm kernel operations.
//!
//! A degenerate decomposition is not an error: it is reported as an empty
//! [`RealmCollection`](crate::realm::RealmCollection). Errors here are
//! contract violations at the boundary (malformed matrices, permutations that
//! are not bijections) and equation systems that cannot be parsed.

/// Contract violations on matrices, blocks and permutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecompositionError {
    /// The matrix has no rows.
    #[error("matrix is empty: dimension must be at least 1")]
    EmptyMatrix,

    /// A row's length differs from the number of rows.
    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A cell holds something other than 0 or 1.
    #[error("matrix entry ({row}, {col}) is {value}, expected 0 or 1")]
    NonBinaryEntry { row: usize, col: usize, value: i64 },

    /// A permutation's length does not match the dimension it acts on.
    #[error("permutation has {actual} labels, expected {expected}")]
    PermutationLength { expected: usize, actual: usize },

    /// A label is outside `1..=n`.
    #[error("label {label} is out of range 1..={n}")]
    LabelOutOfRange { label: usize, n: usize },

    /// A label appears twice in a permutation.
    #[error("label {0} appears more than once")]
    DuplicateLabel(usize),

    /// A label is placed in both blocks.
    #[error("label {0} is assigned to both blocks")]
    OverlappingBlocks(usize),
}

/// Failures while turning an equation system into a structural matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SystemParseError {
    /// The equation has no right-hand side.
    #[error("equation must contain '=': {0:?}")]
    MissingEquals(String),

    /// Nothing to the left of `=`.
    #[error("left side is empty in equation: {0:?}")]
    EmptyLeftSide(String),

    /// Nothing but whitespace to the right of `=`.
    #[error("right side is empty in equation: {0:?}")]
    EmptyRightSide(String),

    /// A coefficient such as `.` or `-.` that is not a number.
    #[error("failed to parse numeric coefficient in {term:?} (equation: {equation:?})")]
    BadCoefficient { term: String, equation: String },

    /// The system does not yield a square matrix.
    #[error("system has {rows} equations but {columns} variables; a square matrix is required")]
    NotSquare { rows: usize, columns: usize },

    /// The resulting matrix failed validation.
    #[error(transparent)]
    Matrix(#[from] DecompositionError),
}
