//! Core data models for private-mutation analysis.
//!
//! This crate holds the vocabulary shared by the mutation finders in
//! `privmut-diff` and by the surrounding analysis pipeline:
//!
//! - **Alphabets**: [`models::Nuc`] (IUPAC nucleotide codes) and
//!   [`models::Aa`] (amino acids), both implementing the [`models::Letter`]
//!   trait the diff machinery is generic over
//! - **Mutations**: substitutions, single-position deletions and deletion
//!   ranges, with `Display`/`FromStr` in the conventional `A123T` notation
//! - **Query context**: [`models::QueryMutations`], the read-only slice of an
//!   upstream analysis result the finders consume
//! - **Gene map**: the authoritative gene list for peptide-level analysis
//! - **Label catalogs**: curated known-mutation records
//!
//! Positions are 0-based internally; rendered text is 1-based, following
//! genomics convention.

pub mod errors;
pub mod models;
pub mod utils;

// re-exports for cleaner imports
pub use errors::MutationParseError;
pub use models::{Aa, GeneMap, Letter, Nuc, QueryMutations};
