use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::errors::MutationParseError;

/// A symbol alphabet the diff machinery can be generic over.
///
/// Implemented by [`crate::models::Nuc`] and [`crate::models::Aa`]. The two
/// distinguished symbols are the gap (a deleted position) and the unknown
/// symbol (a position carrying no information).
pub trait Letter: Copy + Clone + Debug + Display + Eq + Ord + Hash {
    const GAP: Self;
    const UNKNOWN: Self;

    fn from_char(c: char) -> Result<Self, MutationParseError>;
    fn to_char(self) -> char;

    fn is_gap(self) -> bool {
        self == Self::GAP
    }

    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}
