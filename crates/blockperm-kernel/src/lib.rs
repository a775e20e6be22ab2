//! # blockperm kernel
//!
//! Finds two-block structure in a square 0/1 structural matrix and the
//! permutation that exposes it.
//!
//! The kernel is a pure, deterministic computation: the same matrix always
//! yields the same blocks, permutation and digest. It performs no I/O and
//! does not validate anything beyond the [`Matrix`] and [`Permutation`]
//! contracts.
//!
//! ## Pipeline
//!
//! ```text
//! Matrix                ← validated n×n 0/1 grid
//!     │
//! ZeroSets              ← per-row / per-column zero labels
//!     │
//! initial_omega         ← labels with a 0 on the diagonal (Ω₀)
//!     │
//! DCandidate            ← ranked pairs (i, j) with shared value-sets
//!     │
//! RealmCollection       ← one trial per seed; best (B1, B2)
//!     │
//! Permutation           ← w0 ++ B1 ++ B2, applied to rows and columns
//! ```

pub mod candidate;
pub mod error;
pub mod matrix;
pub mod permutation;
pub mod realm;
pub mod structure;
pub mod system;
pub mod zero_set;

pub use candidate::DCandidate;
pub use error::{DecompositionError, SystemParseError};
pub use matrix::Matrix;
pub use permutation::{Permutation, apply_permutation, build_permutation};
pub use realm::{Blocks, CurrentCandidate, Realm, RealmCollection};
pub use structure::{StructureReport, analyze};
pub use system::{ParsedSystem, parse_system, parse_system_text};
pub use zero_set::{ZeroSets, col_zero_sets, initial_omega, row_zero_sets, universal_set};
