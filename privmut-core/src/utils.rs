use crate::errors::MutationParseError;
use crate::models::aa::Aa;
use crate::models::alphabet::Letter;
use crate::models::nuc::Nuc;

///
/// Convert a string of IUPAC characters into a nucleotide sequence.
///
/// # Arguments
///
/// - s: sequence text, case-insensitive, gaps as `-`
///
pub fn to_nuc_seq(s: &str) -> Result<Vec<Nuc>, MutationParseError> {
    s.chars().map(Nuc::from_char).collect()
}

pub fn from_nuc_seq(seq: &[Nuc]) -> String {
    seq.iter().map(|nuc| nuc.to_char()).collect()
}

///
/// Convert a peptide string into an amino-acid sequence.
///
pub fn to_aa_seq(s: &str) -> Result<Vec<Aa>, MutationParseError> {
    s.chars().map(Aa::from_char).collect()
}

pub fn from_aa_seq(seq: &[Aa]) -> String {
    seq.iter().map(|aa| aa.to_char()).collect()
}
