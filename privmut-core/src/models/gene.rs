use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::models::range::PosRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

///
/// One gene and its coordinate frame on the reference genome.
///
/// The coordinate metadata is carried opaquely here: peptide positions are
/// already resolved by the upstream translator, so downstream consumers only
/// use the gene name and membership in the gene map.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    pub name: String,
    pub range: PosRange,
    pub frame: u8,
    pub strand: Strand,
}

///
/// The authoritative list of genes for peptide-level analysis.
///
/// Iteration order is by gene name, so every walk over the map is
/// deterministic.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneMap {
    genes: BTreeMap<String, Gene>,
}

impl GeneMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_genes(genes: impl IntoIterator<Item = Gene>) -> Self {
        Self {
            genes: genes
                .into_iter()
                .map(|gene| (gene.name.clone(), gene))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Gene> {
        self.genes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.genes.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Gene)> {
        self.genes.iter()
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}
