//! The full structural analysis of one matrix.
//!
//! [`analyze`] is the single compute action: it runs every stage of the
//! pipeline and keeps each intermediate so a presentation layer can show
//! them.
//!
//! Cost: candidate generation visits `O(n²)` pairs with `O(n)` work each and
//! runs up to `O(n)` times per realm, over up to `O(n²)` seed realms. That is
//! fine for matrices with tens of indices and grows quickly beyond.

use crate::candidate::{self, DCandidate};
use crate::error::DecompositionError;
use crate::matrix::Matrix;
use crate::permutation::Permutation;
use crate::realm::{Blocks, RealmCollection};
use crate::zero_set::{ZeroSets, initial_omega, universal_set};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Everything derived from one matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureReport {
    pub dimension: usize,
    pub row_zero_sets: Vec<Vec<usize>>,
    pub col_zero_sets: Vec<Vec<usize>>,
    pub initial_omega: Vec<usize>,
    /// Every pair of the initial working set, ranked.
    pub candidates: Vec<DCandidate>,
    /// The valid subsequence of `candidates`: the realm seeds.
    pub valid_candidates: Vec<DCandidate>,
    pub realms: RealmCollection,
    pub universal_set: Vec<usize>,
    pub permutation: Permutation,
    pub permuted_matrix: Matrix,
    /// SHA-256 over the blocks and permutation.
    pub digest: String,
}

impl StructureReport {
    /// The selected blocks (empty when degenerate).
    pub fn blocks(&self) -> &Blocks {
        &self.realms.records
    }

    pub fn is_degenerate(&self) -> bool {
        self.realms.is_degenerate()
    }

    /// Labels placed before both blocks.
    pub fn remainder(&self) -> &[usize] {
        let taken = self.blocks().b1.len() + self.blocks().b2.len();
        &self.permutation.labels()[..self.dimension - taken]
    }
}

/// Run the whole decomposition on `matrix`.
pub fn analyze(matrix: &Matrix) -> Result<StructureReport, DecompositionError> {
    let n = matrix.dimension();
    let zero_sets = ZeroSets::of(matrix);
    let omega0 = initial_omega(&zero_sets.rows);

    let candidates = candidate::all_candidates(&zero_sets, &omega0);
    let valid_candidates = candidate::separate(candidates.clone());
    tracing::debug!(
        dimension = n,
        omega0 = omega0.len(),
        candidates = candidates.len(),
        seeds = valid_candidates.len(),
        "candidates generated"
    );

    let realms = RealmCollection::explore(&zero_sets, &omega0, &valid_candidates);
    let universal = universal_set(n);
    let permutation = Permutation::build(&realms.records, &universal)?;
    let permuted_matrix = permutation.apply(matrix)?;
    let digest = decomposition_digest(&realms.records, &permutation);

    let ZeroSets { rows, cols } = zero_sets;
    Ok(StructureReport {
        dimension: n,
        row_zero_sets: rows,
        col_zero_sets: cols,
        initial_omega: omega0,
        candidates,
        valid_candidates,
        realms,
        universal_set: universal,
        permutation,
        permuted_matrix,
        digest,
    })
}

/// Deterministic fingerprint of a decomposition.
pub fn decomposition_digest(blocks: &Blocks, permutation: &Permutation) -> String {
    let mut hasher = Sha256::new();
    for (tag, labels) in [
        ("b1", blocks.b1.as_slice()),
        ("b2", blocks.b2.as_slice()),
        ("permutation", permutation.labels()),
    ] {
        hasher.update(tag.as_bytes());
        hasher.update(b":");
        for label in labels {
            hasher.update(label.to_string().as_bytes());
            hasher.update(b",");
        }
        hasher.update(b"\n");
    }
    let hash = hasher.finalize();
    format!("{hash:x}")
}
