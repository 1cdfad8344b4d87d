use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::MutationParseError;
use crate::models::alphabet::Letter;

///
/// IUPAC nucleotide code: the four canonical bases, ambiguity codes,
/// the fully-unknown `N` and the gap.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nuc {
    A,
    C,
    G,
    T,
    R,
    Y,
    S,
    W,
    K,
    M,
    B,
    D,
    H,
    V,
    N,
    #[serde(rename = "-")]
    Gap,
}

impl Nuc {
    /// Canonical, unambiguous bases only.
    pub fn is_acgt(self) -> bool {
        matches!(self, Nuc::A | Nuc::C | Nuc::G | Nuc::T)
    }
}

impl Letter for Nuc {
    const GAP: Self = Nuc::Gap;
    const UNKNOWN: Self = Nuc::N;

    fn from_char(c: char) -> Result<Self, MutationParseError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Nuc::A),
            'C' => Ok(Nuc::C),
            'G' => Ok(Nuc::G),
            'T' => Ok(Nuc::T),
            'R' => Ok(Nuc::R),
            'Y' => Ok(Nuc::Y),
            'S' => Ok(Nuc::S),
            'W' => Ok(Nuc::W),
            'K' => Ok(Nuc::K),
            'M' => Ok(Nuc::M),
            'B' => Ok(Nuc::B),
            'D' => Ok(Nuc::D),
            'H' => Ok(Nuc::H),
            'V' => Ok(Nuc::V),
            'N' => Ok(Nuc::N),
            '-' => Ok(Nuc::Gap),
            _ => Err(MutationParseError::InvalidNucCode(c)),
        }
    }

    fn to_char(self) -> char {
        match self {
            Nuc::A => 'A',
            Nuc::C => 'C',
            Nuc::G => 'G',
            Nuc::T => 'T',
            Nuc::R => 'R',
            Nuc::Y => 'Y',
            Nuc::S => 'S',
            Nuc::W => 'W',
            Nuc::K => 'K',
            Nuc::M => 'M',
            Nuc::B => 'B',
            Nuc::D => 'D',
            Nuc::H => 'H',
            Nuc::V => 'V',
            Nuc::N => 'N',
            Nuc::Gap => '-',
        }
    }
}

impl Display for Nuc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
