//! Realm exploration: trial decompositions seeded by D-candidates.
//!
//! Each valid D-candidate of the initial working set Ω₀ seeds one *realm*.
//! A realm greedily peels pairs off Ω₀ to build the first block `B1`, then
//! repeats the procedure on what is left (`Ω₀ \ B1`) to build `B2`.
//!
//! ```text
//! Ω₀ ──seed──▶ shrink ──▶ shrink ──▶ … ──▶ ∅        B1 = i₀ j₀ i₁ j₁ …
//! Ω₀ \ B1 ──first──▶ shrink ──▶ … ──▶ ∅             B2 = i₀ j₀ …
//! ```
//!
//! The collection keeps the realm with the strictly largest block total,
//! scanning in seed order. If the selected realm has no second block the
//! whole result is discarded: the matrix has no two-block structure.

use crate::candidate::{self, DCandidate};
use crate::zero_set::ZeroSets;
use serde::{Deserialize, Serialize};

/// The candidate driving the next shrink step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentCandidate {
    /// A compatible pair; its value-set is never empty.
    Pair(DCandidate),
    /// A label with no compatible partner left in the working set.
    Isolated(usize),
}

impl CurrentCandidate {
    /// The working set after consuming this candidate. An isolated label
    /// always empties it.
    fn shrink(&self, omega: &[usize]) -> Vec<usize> {
        match self {
            Self::Pair(d) => d.shrink(omega),
            Self::Isolated(_) => Vec::new(),
        }
    }

    fn append_to(&self, block: &mut Vec<usize>) {
        match self {
            Self::Pair(d) => block.extend([d.i, d.j]),
            Self::Isolated(i) => block.push(*i),
        }
    }
}

/// One full trial decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    /// The candidate this realm started from.
    pub seed: DCandidate,
    /// Working sets visited while building `B1`, starting with Ω₀.
    pub omegas: Vec<Vec<usize>>,
    /// Valid candidates computed while building `B1`, starting with the
    /// seeds of Ω₀.
    pub candidates: Vec<Vec<DCandidate>>,
    pub b1: Vec<usize>,
    pub b2: Vec<usize>,
}

impl Realm {
    /// Run one realm from `seed`.
    pub fn explore(
        zero_sets: &ZeroSets,
        omega0: &[usize],
        seeds: &[DCandidate],
        seed: &DCandidate,
    ) -> Self {
        let mut omegas = vec![omega0.to_vec()];
        let mut candidates = vec![seeds.to_vec()];
        let mut b1 = Vec::new();

        let mut current = CurrentCandidate::Pair(seed.clone());
        let mut omega = omega0.to_vec();
        while !omega.is_empty() {
            omega = current.shrink(&omega);
            omegas.push(omega.clone());
            current.append_to(&mut b1);
            if omega.is_empty() {
                break;
            }

            let next = candidate::generate(zero_sets, &omega);
            current = match next.first() {
                Some(d) => CurrentCandidate::Pair(d.clone()),
                None => CurrentCandidate::Isolated(omega[0]),
            };
            candidates.push(next);
        }

        let b2 = second_block(zero_sets, omega0, &b1);
        tracing::trace!(seed = %seed, ?b1, ?b2, "realm explored");

        Self {
            seed: seed.clone(),
            omegas,
            candidates,
            b1,
            b2,
        }
    }

    /// Block total used to rank realms.
    ///
    /// A realm whose `B1` consumed all of Ω₀ has an empty `B2`, but the
    /// vacant leftover slot still counts as one. Such a realm therefore
    /// outranks any complete split of Ω₀ and, once selected, makes the
    /// whole result degenerate.
    pub fn score(&self) -> usize {
        self.b1.len() + self.b2.len().max(1)
    }

    /// Whether a second block was formed.
    pub fn has_second_block(&self) -> bool {
        !self.b2.is_empty()
    }
}

/// Build `B2` from `Ω₀ \ B1`.
///
/// Unlike the first block there is no isolated fallback inside the loop: a
/// label left without a partner closes the block.
fn second_block(zero_sets: &ZeroSets, omega0: &[usize], b1: &[usize]) -> Vec<usize> {
    let mut omega: Vec<usize> = omega0
        .iter()
        .copied()
        .filter(|v| !b1.contains(v))
        .collect();
    let mut b2 = Vec::new();

    let mut current = candidate::generate(zero_sets, &omega).into_iter().next();
    if current.is_none() {
        b2.extend(omega.first().copied());
        return b2;
    }

    loop {
        let Some(d) = current else {
            b2.extend(omega.first().copied());
            break;
        };
        omega = d.shrink(&omega);
        b2.extend([d.i, d.j]);
        if omega.is_empty() {
            break;
        }
        current = candidate::generate(zero_sets, &omega).into_iter().next();
    }

    b2
}

/// The two selected blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocks {
    pub b1: Vec<usize>,
    pub b2: Vec<usize>,
}

impl Blocks {
    pub fn is_empty(&self) -> bool {
        self.b1.is_empty() && self.b2.is_empty()
    }
}

/// All realms of one initial working set and the selected blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmCollection {
    pub realms: Vec<Realm>,
    pub records: Blocks,
}

impl RealmCollection {
    /// The "no non-trivial decomposition" result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Explore one realm per seed and select the best blocks.
    ///
    /// `seeds` are the valid candidates of `omega0`, in priority order.
    pub fn explore(zero_sets: &ZeroSets, omega0: &[usize], seeds: &[DCandidate]) -> Self {
        if omega0.is_empty() || seeds.is_empty() {
            tracing::debug!(
                omega0 = omega0.len(),
                seeds = seeds.len(),
                "nothing to explore"
            );
            return Self::empty();
        }

        let realms: Vec<Realm> = seeds
            .iter()
            .map(|seed| Realm::explore(zero_sets, omega0, seeds, seed))
            .collect();

        let Some(best) = select_best(&realms) else {
            return Self::empty();
        };
        if !realms[best].has_second_block() {
            tracing::debug!(
                realms = realms.len(),
                best,
                "selected realm has no second block; result discarded"
            );
            return Self::empty();
        }

        let records = Blocks {
            b1: realms[best].b1.clone(),
            b2: realms[best].b2.clone(),
        };
        tracing::debug!(
            realms = realms.len(),
            best,
            b1 = ?records.b1,
            b2 = ?records.b2,
            "realm selected"
        );
        Self { realms, records }
    }

    /// True when no two-block structure was found.
    pub fn is_degenerate(&self) -> bool {
        self.records.b2.is_empty()
    }
}

/// Index of the first realm with the strictly largest score.
fn select_best(realms: &[Realm]) -> Option<usize> {
    realms
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, usize)>, (index, realm)| {
            let score = realm.score();
            match best {
                Some((_, top)) if score <= top => best,
                _ => Some((index, score)),
            }
        })
        .map(|(index, _)| index)
}
