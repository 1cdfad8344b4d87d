use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use privmut_core::models::{Aa, Del, LabeledDel, LabeledSub, Letter, Nuc, Sub};

use crate::errors::PrivateMutationsWarning;

///
/// Mutations private to one query relative to its nearest reference-tree
/// node: changes the query carries that the node does not.
///
/// Freshly constructed per query; the surrounding pipeline owns the value
/// and aggregates it into the per-query report. All lists are sorted in
/// ascending position order and deduplicated.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateMutations<L: Letter> {
    /// Every private substitution, reversions included.
    pub substitutions: Vec<Sub<L>>,
    /// Private deletions, one per deleted position.
    pub deletions: Vec<Del<L>>,
    /// The subset of `substitutions` that restores the reference symbol at
    /// a position the node had mutated.
    pub reversions: Vec<Sub<L>>,
    /// Substitutions with an exact match in the curated catalog.
    pub labeled_substitutions: Vec<LabeledSub<L>>,
    /// Substitutions without a catalog match.
    pub unlabeled_substitutions: Vec<Sub<L>>,
    /// Deletions with an exact match in the curated catalog.
    pub labeled_deletions: Vec<LabeledDel<L>>,
    /// Deletions without a catalog match.
    pub unlabeled_deletions: Vec<Del<L>>,

    // summary counts, reported and sorted on by the surrounding pipeline
    pub total_substitutions: usize,
    pub total_deletions: usize,
    pub total_reversions: usize,
    pub total_labeled_substitutions: usize,
    pub total_unlabeled_substitutions: usize,
}

pub type PrivateNucMutations = PrivateMutations<Nuc>;
pub type PrivateAaMutations = PrivateMutations<Aa>;

///
/// Partial-success carrier for the amino-acid finder: per-gene results for
/// every gene that could be processed, plus one warning per gene that could
/// not.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateAaMutationsResult {
    /// Gene name → private amino-acid mutations in that gene. Genes whose
    /// reference peptide was missing are absent.
    pub by_gene: BTreeMap<String, PrivateAaMutations>,
    /// Non-fatal conditions encountered along the way.
    pub warnings: Vec<PrivateMutationsWarning>,
}
