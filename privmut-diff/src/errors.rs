use thiserror::Error;

///
/// Non-fatal conditions raised while finding private mutations.
///
/// These are collected per query and surfaced as warnings in the final
/// report; they never abort the remaining genes or the run.
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrivateMutationsWarning {
    /// The gene map declares a gene for which no reference peptide was
    /// supplied. The gene is skipped for this query.
    #[error("Reference peptide not found for gene '{gene_name}'")]
    RefPeptideNotFound { gene_name: String },
}
