use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationParseError {
    #[error("Invalid nucleotide code: '{0}'")]
    InvalidNucCode(char),

    #[error("Invalid amino acid code: '{0}'")]
    InvalidAaCode(char),

    #[error("Malformed substitution: '{0}'")]
    InvalidSubstitution(String),

    #[error("Malformed deletion: '{0}'")]
    InvalidDeletion(String),

    #[error("Position is not a valid 1-based coordinate: '{0}'")]
    InvalidPosition(String),
}
