//! Private-mutation finding for tree-placed query sequences.
//!
//! After a query sequence has been aligned to a reference genome and placed
//! onto a reference tree, this crate determines which of its changes are
//! **private**: present in the query but not inherited from the nearest tree
//! node. It distinguishes reversions to the reference state from genuinely
//! novel changes and attaches known-mutation labels from curated catalogs.
//!
//! ## Features
//!
//! - **Nucleotide finder**: [`find_private_nuc_mutations`] diffs the query
//!   against the node's mutation map over the whole genome
//! - **Amino-acid finder**: [`find_private_aa_mutations`] runs the same diff
//!   per gene, tolerating missing reference peptides as non-fatal warnings
//! - **Label catalogs**: exact-match indexes built once per run
//!   ([`labels::SubLabelIndex`], [`labels::DelLabelIndex`])
//!
//! Each call is pure: inputs are read-only, the result is freshly allocated,
//! and independent queries can be processed concurrently without
//! coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use privmut_core::models::{Nuc, NucSub, PosRange, QueryMutations};
//! use privmut_core::utils::to_nuc_seq;
//! use privmut_diff::labels::{NucDelLabelIndex, NucSubLabelIndex};
//! use privmut_diff::find_private_nuc_mutations;
//!
//! let ref_seq = to_nuc_seq("ACGT").unwrap();
//!
//! // the nearest node carries G where the reference has C
//! let node_mut_map: BTreeMap<usize, Nuc> = [(1, Nuc::G)].into_iter().collect();
//!
//! // the query carries T there instead
//! let query = QueryMutations {
//!     substitutions: vec![NucSub { pos: 1, from: Nuc::C, to: Nuc::T }],
//!     ..QueryMutations::new(PosRange::new(0, ref_seq.len()))
//! };
//!
//! let private = find_private_nuc_mutations(
//!     &node_mut_map,
//!     &query,
//!     &ref_seq,
//!     &NucSubLabelIndex::new(),
//!     &NucDelLabelIndex::new(),
//! );
//!
//! // the change is private and counted from the node's state, not the reference's
//! assert_eq!(
//!     private.substitutions,
//!     vec![NucSub { pos: 1, from: Nuc::G, to: Nuc::T }]
//! );
//! ```

mod diff;

pub mod aa;
pub mod errors;
pub mod labels;
pub mod models;
pub mod nuc;

// re-exports
pub use self::aa::find_private_aa_mutations;
pub use self::errors::PrivateMutationsWarning;
pub use self::models::{
    PrivateAaMutations, PrivateAaMutationsResult, PrivateMutations, PrivateNucMutations,
};
pub use self::nuc::find_private_nuc_mutations;
