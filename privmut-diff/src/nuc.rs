use std::collections::BTreeMap;

use privmut_core::models::{is_position_covered, Nuc, QueryMutations};

use crate::diff::find_private_mutations;
use crate::labels::{NucDelLabelIndex, NucSubLabelIndex};
use crate::models::PrivateNucMutations;

///
/// Find the nucleotide mutations private to a query relative to its nearest
/// reference-tree node.
///
/// A mutation is private when the query carries it but the node does not:
/// either the query mutated a position the node left untouched, or it moved
/// away from the node's own state. Positions where the query matches the
/// reference while the node carries a mutation are reported as reversions.
/// Positions that are missing or outside the query's alignment coverage are
/// excluded, and mutations shared with the node are never reported.
///
/// # Arguments
///
/// - node_mut_map: position → symbol at the nearest node, relative to `ref_seq`
/// - query: the query's upstream analysis result
/// - ref_seq: the reference genome
/// - substitution_labels / deletion_labels: curated catalog indexes
///
/// # Panics
///
/// Panics if a position in `node_mut_map` or `query` lies outside
/// `ref_seq`; that is a contract violation by the caller, not an input
/// condition this function recovers from.
///
pub fn find_private_nuc_mutations(
    node_mut_map: &BTreeMap<usize, Nuc>,
    query: &QueryMutations,
    ref_seq: &[Nuc],
    substitution_labels: &NucSubLabelIndex,
    deletion_labels: &NucDelLabelIndex,
) -> PrivateNucMutations {
    let deleted_positions = query.deletions.iter().flat_map(|del| del.positions());

    let is_uninformative = |pos: usize| {
        !query.alignment_range.contains(pos) || is_position_covered(&query.missing, pos)
    };

    find_private_mutations(
        node_mut_map,
        &query.substitutions,
        deleted_positions,
        is_uninformative,
        ref_seq,
        substitution_labels,
        deletion_labels,
    )
}
