//! The diff pass shared by the nucleotide and amino-acid finders.
//!
//! Works on three implicit symbol accessors: the reference sequence, the
//! node mutation map (equal to the reference wherever it has no entry) and
//! the query (equal to the reference outside its own substitution/deletion
//! sets). Only positions where one of the explicit sets is defined can
//! produce output.

use std::collections::{BTreeMap, BTreeSet};

use privmut_core::models::{Del, Letter, Sub};

use crate::labels::{partition_deletions, partition_substitutions, DelLabelIndex, SubLabelIndex};
use crate::models::PrivateMutations;

/// Diff the query against the node, relative to the reference.
///
/// `deleted_positions` enumerates the query's deleted positions;
/// `is_uninformative` reports positions where the query carries no
/// information (ambiguous, missing, outside alignment coverage). Positions
/// must lie inside `ref_seq`; a violation is a caller bug and panics.
pub(crate) fn find_private_mutations<L, D, U>(
    node_mut_map: &BTreeMap<usize, L>,
    substitutions: &[Sub<L>],
    deleted_positions: D,
    is_uninformative: U,
    ref_seq: &[L],
    substitution_labels: &SubLabelIndex<L>,
    deletion_labels: &DelLabelIndex<L>,
) -> PrivateMutations<L>
where
    L: Letter,
    D: IntoIterator<Item = usize>,
    U: Fn(usize) -> bool,
{
    // Positions the query explicitly mutated or deleted. The reversion sweep
    // below must not touch them again.
    let mut covered = BTreeSet::new();

    // Query substitutions the node does not share.
    let mut private_subs = Vec::new();
    for sub in substitutions {
        covered.insert(sub.pos);
        // an unknown query symbol cannot be classified; it still blocks the
        // reversion sweep below, since the query is not at the reference state
        if sub.to.is_unknown() {
            continue;
        }
        match node_mut_map.get(&sub.pos) {
            Some(&node_symbol) => {
                if node_symbol != sub.to {
                    // The query moved away from the node's own state, so the
                    // change is counted from the node, not from the reference.
                    private_subs.push(Sub {
                        pos: sub.pos,
                        from: node_symbol,
                        to: sub.to,
                    });
                }
                // otherwise inherited from the node: not private
            }
            None => private_subs.push(*sub),
        }
    }

    // Query deletions the node does not share.
    let mut private_dels = Vec::new();
    for pos in deleted_positions {
        covered.insert(pos);
        let from = node_mut_map.get(&pos).copied().unwrap_or_else(|| ref_seq[pos]);
        if !from.is_gap() {
            private_dels.push(Del { pos, from });
        }
    }

    // Node mutations the query does not carry. At such positions the query
    // sits at the reference state, which undoes the node's change. Positions
    // with no query information cannot be classified and are skipped.
    let mut reversions = Vec::new();
    for (&pos, &node_symbol) in node_mut_map {
        if covered.contains(&pos) || is_uninformative(pos) {
            continue;
        }
        let ref_symbol = ref_seq[pos];
        if node_symbol != ref_symbol {
            reversions.push(Sub {
                pos,
                from: node_symbol,
                to: ref_symbol,
            });
        }
    }

    let mut substitutions_out = private_subs;
    substitutions_out.extend_from_slice(&reversions);
    substitutions_out.sort_unstable();
    substitutions_out.dedup();

    private_dels.sort_unstable();
    private_dels.dedup();

    let (labeled_substitutions, unlabeled_substitutions) =
        partition_substitutions(&substitutions_out, substitution_labels);
    let (labeled_deletions, unlabeled_deletions) =
        partition_deletions(&private_dels, deletion_labels);

    PrivateMutations {
        total_substitutions: substitutions_out.len(),
        total_deletions: private_dels.len(),
        total_reversions: reversions.len(),
        total_labeled_substitutions: labeled_substitutions.len(),
        total_unlabeled_substitutions: unlabeled_substitutions.len(),
        substitutions: substitutions_out,
        deletions: private_dels,
        reversions,
        labeled_substitutions,
        unlabeled_substitutions,
        labeled_deletions,
        unlabeled_deletions,
    }
}
