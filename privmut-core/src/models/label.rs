use serde::{Deserialize, Serialize};

use crate::models::aa::Aa;
use crate::models::alphabet::Letter;
use crate::models::mutation::{Del, Sub};
use crate::models::nuc::Nuc;

///
/// One curated catalog record: a substitution pattern and the labels
/// attached to it (e.g. names of lineages known to carry the mutation).
///
/// Also used on the output side, as the labeled partition of a query's
/// private mutations.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSub<L: Letter> {
    pub substitution: Sub<L>,
    pub labels: Vec<String>,
}

/// Deletion counterpart of [`LabeledSub`], keyed per deleted position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledDel<L: Letter> {
    pub deletion: Del<L>,
    pub labels: Vec<String>,
}

pub type LabeledNucSub = LabeledSub<Nuc>;
pub type LabeledNucDel = LabeledDel<Nuc>;
pub type LabeledAaSub = LabeledSub<Aa>;
pub type LabeledAaDel = LabeledDel<Aa>;
