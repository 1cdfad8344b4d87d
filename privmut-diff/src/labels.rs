//! Exact-match indexes over the curated mutation-label catalogs.
//!
//! The catalogs are immutable for the duration of a run, so the indexes are
//! built once (not per query) and shared by reference across all queries.

use fxhash::FxHashMap as HashMap;

use privmut_core::models::{Aa, Del, LabeledDel, LabeledSub, Letter, Nuc, Sub};

/// Label lookup keyed by exact `(position, from, to)` substitution pattern.
#[derive(Clone, Debug)]
pub struct SubLabelIndex<L: Letter> {
    index: HashMap<Sub<L>, Vec<String>>,
}

pub type NucSubLabelIndex = SubLabelIndex<Nuc>;
pub type AaSubLabelIndex = SubLabelIndex<Aa>;

impl<L: Letter> SubLabelIndex<L> {
    /// An empty index: every lookup misses.
    pub fn new() -> Self {
        Self {
            index: HashMap::default(),
        }
    }

    /// Build the index from catalog records. Records repeating a pattern
    /// merge their label lists.
    pub fn from_entries(entries: &[LabeledSub<L>]) -> Self {
        let mut index: HashMap<Sub<L>, Vec<String>> = HashMap::default();
        for entry in entries {
            index
                .entry(entry.substitution)
                .or_default()
                .extend(entry.labels.iter().cloned());
        }
        Self { index }
    }

    pub fn get(&self, sub: &Sub<L>) -> Option<&[String]> {
        self.index.get(sub).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<L: Letter> Default for SubLabelIndex<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Label lookup keyed by exact `(position, deleted symbol)` pattern.
#[derive(Clone, Debug)]
pub struct DelLabelIndex<L: Letter> {
    index: HashMap<Del<L>, Vec<String>>,
}

pub type NucDelLabelIndex = DelLabelIndex<Nuc>;
pub type AaDelLabelIndex = DelLabelIndex<Aa>;

impl<L: Letter> DelLabelIndex<L> {
    pub fn new() -> Self {
        Self {
            index: HashMap::default(),
        }
    }

    pub fn from_entries(entries: &[LabeledDel<L>]) -> Self {
        let mut index: HashMap<Del<L>, Vec<String>> = HashMap::default();
        for entry in entries {
            index
                .entry(entry.deletion)
                .or_default()
                .extend(entry.labels.iter().cloned());
        }
        Self { index }
    }

    pub fn get(&self, del: &Del<L>) -> Option<&[String]> {
        self.index.get(del).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<L: Letter> Default for DelLabelIndex<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Route substitutions to the labeled or unlabeled partition by catalog
/// lookup. Every substitution lands in exactly one of the two.
pub(crate) fn partition_substitutions<L: Letter>(
    substitutions: &[Sub<L>],
    labels: &SubLabelIndex<L>,
) -> (Vec<LabeledSub<L>>, Vec<Sub<L>>) {
    let mut labeled = Vec::new();
    let mut unlabeled = Vec::new();

    for sub in substitutions {
        match labels.get(sub) {
            Some(found) => labeled.push(LabeledSub {
                substitution: *sub,
                labels: found.to_vec(),
            }),
            None => unlabeled.push(*sub),
        }
    }

    (labeled, unlabeled)
}

pub(crate) fn partition_deletions<L: Letter>(
    deletions: &[Del<L>],
    labels: &DelLabelIndex<L>,
) -> (Vec<LabeledDel<L>>, Vec<Del<L>>) {
    let mut labeled = Vec::new();
    let mut unlabeled = Vec::new();

    for del in deletions {
        match labels.get(del) {
            Some(found) => labeled.push(LabeledDel {
                deletion: *del,
                labels: found.to_vec(),
            }),
            None => unlabeled.push(*del),
        }
    }

    (labeled, unlabeled)
}

#[cfg(test)]
mod tests {
    use super::*;

    use privmut_core::models::{LabeledNucSub, NucDel, NucSub};
    use pretty_assertions::assert_eq;

    fn catalog_entry(text: &str, labels: &[&str]) -> LabeledNucSub {
        LabeledNucSub {
            substitution: text.parse().unwrap(),
            labels: labels.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn finds_exact_matches_only() {
        let index = SubLabelIndex::from_entries(&[catalog_entry("C241T", &["20A"])]);

        let hit: NucSub = "C241T".parse().unwrap();
        let wrong_target: NucSub = "C241G".parse().unwrap();
        let wrong_pos: NucSub = "C242T".parse().unwrap();

        assert_eq!(index.get(&hit), Some(&["20A".to_string()][..]));
        assert_eq!(index.get(&wrong_target), None);
        assert_eq!(index.get(&wrong_pos), None);
    }

    #[test]
    fn merges_duplicate_patterns() {
        let index = SubLabelIndex::from_entries(&[
            catalog_entry("A23403G", &["20A"]),
            catalog_entry("A23403G", &["20B", "20C"]),
        ]);

        assert_eq!(index.len(), 1);
        let labels = index.get(&"A23403G".parse().unwrap()).unwrap();
        assert_eq!(labels.join(","), "20A,20B,20C");
    }

    #[test]
    fn partitions_substitutions_exclusively() {
        let index = SubLabelIndex::from_entries(&[catalog_entry("C241T", &["20A"])]);
        let subs: Vec<NucSub> = vec!["C241T".parse().unwrap(), "G300A".parse().unwrap()];

        let (labeled, unlabeled) = partition_substitutions(&subs, &index);
        assert_eq!(labeled.len(), 1);
        assert_eq!(unlabeled.len(), 1);
        assert_eq!(labeled[0].substitution, subs[0]);
        assert_eq!(unlabeled[0], subs[1]);
    }

    #[test]
    fn empty_index_labels_nothing() {
        let index = NucDelLabelIndex::new();
        assert!(index.is_empty());

        let dels: Vec<NucDel> = vec!["A117-".parse().unwrap()];
        let (labeled, unlabeled) = partition_deletions(&dels, &index);
        assert!(labeled.is_empty());
        assert_eq!(unlabeled, dels);
    }
}
