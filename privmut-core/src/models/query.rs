use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::mutation::{AaDel, AaSub, DelRange, NucSub};
use crate::models::range::PosRange;

///
/// The slice of a query's upstream analysis result consumed by the
/// private-mutation finders: everything the aligner and translator computed
/// about the query relative to the reference.
///
/// Owned by the surrounding pipeline and read-only here. All amino-acid
/// collections are keyed by gene name.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryMutations {
    /// Nucleotide substitutions relative to the reference.
    pub substitutions: Vec<NucSub>,
    /// Deleted reference ranges.
    pub deletions: Vec<DelRange>,
    /// Ambiguous/unsequenced reference positions (`N` runs).
    pub missing: Vec<PosRange>,
    /// The reference span covered by the aligned query. Positions outside
    /// it carry no information about the query.
    pub alignment_range: PosRange,
    /// Per-gene amino-acid substitutions relative to the reference peptides.
    pub aa_substitutions: BTreeMap<String, Vec<AaSub>>,
    /// Per-gene amino-acid deletions.
    pub aa_deletions: BTreeMap<String, Vec<AaDel>>,
    /// Per-gene peptide positions with no information (untranslatable codons).
    pub unknown_aa_ranges: BTreeMap<String, Vec<PosRange>>,
}

impl QueryMutations {
    /// An empty mutation set covering the given reference span: a query that
    /// is identical to the reference wherever it aligns.
    pub fn new(alignment_range: PosRange) -> Self {
        Self {
            substitutions: Vec::new(),
            deletions: Vec::new(),
            missing: Vec::new(),
            alignment_range,
            aa_substitutions: BTreeMap::new(),
            aa_deletions: BTreeMap::new(),
            unknown_aa_ranges: BTreeMap::new(),
        }
    }
}
