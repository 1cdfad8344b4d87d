pub mod aa;
pub mod alphabet;
pub mod gene;
pub mod label;
pub mod mutation;
pub mod nuc;
pub mod query;
pub mod range;

// re-export for cleaner imports
pub use self::aa::Aa;
pub use self::alphabet::Letter;
pub use self::gene::{Gene, GeneMap, Strand};
pub use self::label::{
    LabeledAaDel, LabeledAaSub, LabeledDel, LabeledNucDel, LabeledNucSub, LabeledSub,
};
pub use self::mutation::{AaDel, AaSub, Del, DelRange, NucDel, NucSub, Sub};
pub use self::nuc::Nuc;
pub use self::query::QueryMutations;
pub use self::range::{is_position_covered, PosRange};
