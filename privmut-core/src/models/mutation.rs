use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MutationParseError;
use crate::models::aa::Aa;
use crate::models::alphabet::Letter;
use crate::models::nuc::Nuc;
use crate::models::range::PosRange;

///
/// Single-position substitution: `from` is the baseline symbol, `to` is what
/// the sequence carries instead.
///
/// Field order gives position-major sort order, so sorting a `Vec<Sub<_>>`
/// yields ascending genomic (or peptide) position.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Sub<L: Letter> {
    pub pos: usize,
    pub from: L,
    pub to: L,
}

pub type NucSub = Sub<Nuc>;
pub type AaSub = Sub<Aa>;

impl<L: Letter> Display for Sub<L> {
    /// Conventional notation, 1-based: `C241T`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, self.pos + 1, self.to)
    }
}

impl<L: Letter> FromStr for Sub<L> {
    type Err = MutationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MutationParseError::InvalidSubstitution(s.to_string());

        let mut chars = s.chars();
        let from = chars.next().ok_or_else(malformed)?;
        let to = chars.next_back().ok_or_else(malformed)?;

        let digits = chars.as_str();
        let pos_one_based: usize = digits.parse().map_err(|_| malformed())?;
        if pos_one_based == 0 {
            return Err(MutationParseError::InvalidPosition(digits.to_string()));
        }

        Ok(Self {
            pos: pos_one_based - 1,
            from: L::from_char(from)?,
            to: L::from_char(to)?,
        })
    }
}

///
/// A single deleted position and the baseline symbol it removed.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Del<L: Letter> {
    pub pos: usize,
    pub from: L,
}

pub type NucDel = Del<Nuc>;
pub type AaDel = Del<Aa>;

impl<L: Letter> Display for Del<L> {
    /// Rendered like a substitution to gap: `A117-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, self.pos + 1, L::GAP)
    }
}

impl<L: Letter> FromStr for Del<L> {
    type Err = MutationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sub = Sub::<L>::from_str(s)
            .map_err(|_| MutationParseError::InvalidDeletion(s.to_string()))?;
        if !sub.to.is_gap() {
            return Err(MutationParseError::InvalidDeletion(s.to_string()));
        }
        Ok(Self {
            pos: sub.pos,
            from: sub.from,
        })
    }
}

///
/// A run of deleted positions as reported by the upstream alignment.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DelRange {
    pub start: usize,
    pub length: usize,
}

impl DelRange {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// One past the last deleted position.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn range(&self) -> PosRange {
        PosRange::new(self.start, self.end())
    }

    /// Iterate the deleted positions.
    pub fn positions(&self) -> std::ops::Range<usize> {
        self.start..self.end()
    }
}

impl Display for DelRange {
    /// 1-based inclusive span: `22029-22034`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start + 1, self.end())
    }
}
