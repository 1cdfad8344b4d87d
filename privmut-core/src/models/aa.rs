use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::MutationParseError;
use crate::models::alphabet::Letter;

///
/// Amino acid code: the twenty standard residues, the stop codon,
/// the unknown `X` and the gap.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Aa {
    A,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    K,
    L,
    M,
    N,
    P,
    Q,
    R,
    S,
    T,
    V,
    W,
    Y,
    #[serde(rename = "*")]
    Stop,
    X,
    #[serde(rename = "-")]
    Gap,
}

impl Letter for Aa {
    const GAP: Self = Aa::Gap;
    const UNKNOWN: Self = Aa::X;

    fn from_char(c: char) -> Result<Self, MutationParseError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Aa::A),
            'C' => Ok(Aa::C),
            'D' => Ok(Aa::D),
            'E' => Ok(Aa::E),
            'F' => Ok(Aa::F),
            'G' => Ok(Aa::G),
            'H' => Ok(Aa::H),
            'I' => Ok(Aa::I),
            'K' => Ok(Aa::K),
            'L' => Ok(Aa::L),
            'M' => Ok(Aa::M),
            'N' => Ok(Aa::N),
            'P' => Ok(Aa::P),
            'Q' => Ok(Aa::Q),
            'R' => Ok(Aa::R),
            'S' => Ok(Aa::S),
            'T' => Ok(Aa::T),
            'V' => Ok(Aa::V),
            'W' => Ok(Aa::W),
            'Y' => Ok(Aa::Y),
            '*' => Ok(Aa::Stop),
            'X' => Ok(Aa::X),
            '-' => Ok(Aa::Gap),
            _ => Err(MutationParseError::InvalidAaCode(c)),
        }
    }

    fn to_char(self) -> char {
        match self {
            Aa::A => 'A',
            Aa::C => 'C',
            Aa::D => 'D',
            Aa::E => 'E',
            Aa::F => 'F',
            Aa::G => 'G',
            Aa::H => 'H',
            Aa::I => 'I',
            Aa::K => 'K',
            Aa::L => 'L',
            Aa::M => 'M',
            Aa::N => 'N',
            Aa::P => 'P',
            Aa::Q => 'Q',
            Aa::R => 'R',
            Aa::S => 'S',
            Aa::T => 'T',
            Aa::V => 'V',
            Aa::W => 'W',
            Aa::Y => 'Y',
            Aa::Stop => '*',
            Aa::X => 'X',
            Aa::Gap => '-',
        }
    }
}

impl Display for Aa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_every_code() {
        for c in "ACDEFGHIKLMNPQRSTVWY*X-".chars() {
            let aa = Aa::from_char(c).unwrap();
            assert_eq!(aa.to_char(), c);
        }
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(
            Aa::from_char('J'),
            Err(MutationParseError::InvalidAaCode('J'))
        );
    }

    #[test]
    fn classifies_gap_and_unknown() {
        assert!(Aa::Gap.is_gap());
        assert!(Aa::X.is_unknown());
        assert!(!Aa::Stop.is_gap());
        assert!(!Aa::Stop.is_unknown());
    }
}
