use std::collections::BTreeMap;

use log::warn;

use privmut_core::models::{is_position_covered, Aa, GeneMap, QueryMutations};

use crate::diff::find_private_mutations;
use crate::errors::PrivateMutationsWarning;
use crate::labels::{AaDelLabelIndex, AaSubLabelIndex};
use crate::models::PrivateAaMutationsResult;

///
/// Find the amino-acid mutations private to a query relative to its nearest
/// reference-tree node, gene by gene.
///
/// Genes are taken from `gene_map` (the authoritative list) in name order.
/// A gene with no entry in `node_mut_map` diffs against an empty node map;
/// a gene with no reference peptide in `ref_peptides` is skipped and
/// reported through [`PrivateAaMutationsResult::warnings`] without aborting
/// the remaining genes.
///
/// # Panics
///
/// Panics if a peptide position lies outside the gene's reference peptide
/// (a contract violation by the caller).
///
pub fn find_private_aa_mutations(
    node_mut_map: &BTreeMap<String, BTreeMap<usize, Aa>>,
    query: &QueryMutations,
    ref_peptides: &BTreeMap<String, Vec<Aa>>,
    gene_map: &GeneMap,
    substitution_labels: &AaSubLabelIndex,
    deletion_labels: &AaDelLabelIndex,
) -> PrivateAaMutationsResult {
    let mut by_gene = BTreeMap::new();
    let mut warnings = Vec::new();
    let empty_node_muts = BTreeMap::new();

    for (gene_name, _gene) in gene_map.iter() {
        let Some(ref_peptide) = ref_peptides.get(gene_name) else {
            warn!("Reference peptide not found for gene '{gene_name}', skipping gene");
            warnings.push(PrivateMutationsWarning::RefPeptideNotFound {
                gene_name: gene_name.clone(),
            });
            continue;
        };

        let node_muts = node_mut_map.get(gene_name).unwrap_or(&empty_node_muts);
        let substitutions = query
            .aa_substitutions
            .get(gene_name)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let deletions = query
            .aa_deletions
            .get(gene_name)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let unknown_ranges = query
            .unknown_aa_ranges
            .get(gene_name)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let private = find_private_mutations(
            node_muts,
            substitutions,
            deletions.iter().map(|del| del.pos),
            |pos| is_position_covered(unknown_ranges, pos),
            ref_peptide,
            substitution_labels,
            deletion_labels,
        );

        by_gene.insert(gene_name.clone(), private);
    }

    PrivateAaMutationsResult { by_gene, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    use privmut_core::models::{AaDel, AaSub, Gene, LabeledAaSub, PosRange, Strand};
    use privmut_core::utils::to_aa_seq;
    use pretty_assertions::assert_eq;

    fn gene(name: &str) -> Gene {
        Gene {
            name: name.to_string(),
            range: PosRange::new(0, 300),
            frame: 0,
            strand: Strand::Forward,
        }
    }

    fn peptides(entries: &[(&str, &str)]) -> BTreeMap<String, Vec<Aa>> {
        entries
            .iter()
            .map(|(name, seq)| (name.to_string(), to_aa_seq(seq).unwrap()))
            .collect()
    }

    fn query_with_subs(gene_name: &str, subs: Vec<AaSub>) -> QueryMutations {
        let mut query = QueryMutations::new(PosRange::new(0, 1000));
        query.aa_substitutions.insert(gene_name.to_string(), subs);
        query
    }

    #[test]
    fn missing_reference_peptide_skips_the_gene_but_not_the_rest() {
        let gene_map = GeneMap::from_genes(vec![gene("A"), gene("B")]);
        let ref_peptides = peptides(&[("A", "MKV")]);
        let query = QueryMutations::new(PosRange::new(0, 1000));

        let result = find_private_aa_mutations(
            &BTreeMap::new(),
            &query,
            &ref_peptides,
            &gene_map,
            &AaSubLabelIndex::new(),
            &AaDelLabelIndex::new(),
        );

        assert_eq!(result.by_gene.len(), 1);
        assert!(result.by_gene.contains_key("A"));
        assert_eq!(
            result.warnings,
            vec![PrivateMutationsWarning::RefPeptideNotFound {
                gene_name: "B".to_string()
            }]
        );
    }

    #[test]
    fn gene_absent_from_node_map_diffs_against_an_empty_map() {
        let gene_map = GeneMap::from_genes(vec![gene("S")]);
        let ref_peptides = peptides(&[("S", "MKV")]);
        let query = query_with_subs(
            "S",
            vec![AaSub {
                pos: 1,
                from: Aa::K,
                to: Aa::N,
            }],
        );

        let result = find_private_aa_mutations(
            &BTreeMap::new(),
            &query,
            &ref_peptides,
            &gene_map,
            &AaSubLabelIndex::new(),
            &AaDelLabelIndex::new(),
        );

        let s = &result.by_gene["S"];
        assert_eq!(
            s.substitutions,
            vec![AaSub {
                pos: 1,
                from: Aa::K,
                to: Aa::N
            }]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn node_mutations_revert_per_gene() {
        let gene_map = GeneMap::from_genes(vec![gene("S")]);
        let ref_peptides = peptides(&[("S", "MKV")]);
        let node_mut_map: BTreeMap<String, BTreeMap<usize, Aa>> = [(
            "S".to_string(),
            [(2, Aa::L)].into_iter().collect::<BTreeMap<usize, Aa>>(),
        )]
        .into_iter()
        .collect();
        let query = QueryMutations::new(PosRange::new(0, 1000));

        let result = find_private_aa_mutations(
            &node_mut_map,
            &query,
            &ref_peptides,
            &gene_map,
            &AaSubLabelIndex::new(),
            &AaDelLabelIndex::new(),
        );

        let s = &result.by_gene["S"];
        assert_eq!(
            s.reversions,
            vec![AaSub {
                pos: 2,
                from: Aa::L,
                to: Aa::V
            }]
        );
    }

    #[test]
    fn unknown_peptide_stretches_are_excluded() {
        let gene_map = GeneMap::from_genes(vec![gene("S")]);
        let ref_peptides = peptides(&[("S", "MKV")]);
        let node_mut_map: BTreeMap<String, BTreeMap<usize, Aa>> = [(
            "S".to_string(),
            [(0, Aa::T)].into_iter().collect::<BTreeMap<usize, Aa>>(),
        )]
        .into_iter()
        .collect();
        let mut query = QueryMutations::new(PosRange::new(0, 1000));
        query
            .unknown_aa_ranges
            .insert("S".to_string(), vec![PosRange::new(0, 2)]);

        let result = find_private_aa_mutations(
            &node_mut_map,
            &query,
            &ref_peptides,
            &gene_map,
            &AaSubLabelIndex::new(),
            &AaDelLabelIndex::new(),
        );

        assert!(result.by_gene["S"].reversions.is_empty());
    }

    #[test]
    fn aa_deletions_and_labels_are_scoped_to_their_gene() {
        let gene_map = GeneMap::from_genes(vec![gene("N"), gene("S")]);
        let ref_peptides = peptides(&[("N", "MSD"), ("S", "MKV")]);

        let mut query = QueryMutations::new(PosRange::new(0, 1000));
        query.aa_deletions.insert(
            "N".to_string(),
            vec![AaDel { pos: 1, from: Aa::S }],
        );
        query.aa_substitutions.insert(
            "S".to_string(),
            vec![AaSub { pos: 0, from: Aa::M, to: Aa::I }],
        );

        let catalog = vec![LabeledAaSub {
            substitution: AaSub { pos: 0, from: Aa::M, to: Aa::I },
            labels: vec!["marker-1".to_string()],
        }];
        let substitution_labels = AaSubLabelIndex::from_entries(&catalog);

        let result = find_private_aa_mutations(
            &BTreeMap::new(),
            &query,
            &ref_peptides,
            &gene_map,
            &substitution_labels,
            &AaDelLabelIndex::new(),
        );

        assert_eq!(
            result.by_gene["N"].deletions,
            vec![AaDel { pos: 1, from: Aa::S }]
        );
        assert!(result.by_gene["N"].labeled_substitutions.is_empty());
        assert_eq!(result.by_gene["S"].labeled_substitutions.len(), 1);
        assert_eq!(
            result.by_gene["S"].labeled_substitutions[0].labels,
            vec!["marker-1".to_string()]
        );
    }
}
