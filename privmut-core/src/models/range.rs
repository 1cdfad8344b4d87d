use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Contiguous run of positions. Inclusive start, exclusive of end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PosRange {
    pub begin: usize,
    pub end: usize,
}

impl PosRange {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.begin && pos < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }
}

impl Display for PosRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

/// True if `pos` falls inside any of the given ranges.
///
/// The range lists this crate deals with (missing runs, unknown peptide
/// stretches) are short, so a linear scan beats building an index per query.
pub fn is_position_covered(ranges: &[PosRange], pos: usize) -> bool {
    ranges.iter().any(|range| range.contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(5, false)]
    #[case(10, true)]
    #[case(14, true)]
    #[case(15, false)]
    fn contains_is_half_open(#[case] pos: usize, #[case] expected: bool) {
        assert_eq!(PosRange::new(10, 15).contains(pos), expected);
    }

    #[test]
    fn empty_range_contains_nothing() {
        let range = PosRange::new(7, 7);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert!(!range.contains(7));
    }

    #[test]
    fn formats_as_a_span() {
        assert_eq!(PosRange::new(10, 15).to_string(), "10-15");
    }

    #[test]
    fn covers_positions_across_ranges() {
        let ranges = vec![PosRange::new(0, 3), PosRange::new(10, 12)];
        assert!(is_position_covered(&ranges, 0));
        assert!(is_position_covered(&ranges, 11));
        assert!(!is_position_covered(&ranges, 3));
        assert!(!is_position_covered(&ranges, 9));
    }
}
