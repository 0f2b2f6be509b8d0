//! Consensus over multiple lineages: lowest common ancestor and weighted
//! majority vote

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::error::{LinnaeusError, LinnaeusResult};
use crate::taxon::Taxon;
use crate::types::TaxonId;

/// Most specific taxon present in every input lineage
///
/// Input order does not matter; a single view returns its own taxon. The
/// result carries no `agreement` value since the intersection is exact.
pub fn find_lca<'db>(taxa: &[Taxon<'db>]) -> LinnaeusResult<Taxon<'db>> {
    let first = taxa.first().ok_or_else(|| {
        LinnaeusError::EmptyInput("find_lca requires at least one taxon".to_string())
    })?;

    // Positional index over the first lineage: root at depth 0
    let depth_in_first: HashMap<TaxonId, usize> = first
        .taxid_lineage()
        .iter()
        .rev()
        .enumerate()
        .map(|(depth, &taxid)| (taxid, depth))
        .collect();

    let mut survivors: HashSet<TaxonId> = depth_in_first.keys().copied().collect();
    for taxon in &taxa[1..] {
        let lineage: HashSet<TaxonId> = taxon.taxid_lineage().iter().copied().collect();
        survivors.retain(|taxid| lineage.contains(taxid));
    }

    let winner = survivors
        .into_iter()
        .max_by_key(|taxid| depth_in_first.get(taxid).copied().unwrap_or(0))
        .ok_or(LinnaeusError::NoConsensus)?;

    trace!(%winner, inputs = taxa.len(), "lowest common ancestor found");
    Taxon::new(winner, first.db())
}

/// Most specific taxon backed by more than `fraction` of the total input
/// weight
///
/// Every view contributes its full weight exactly once to each identifier
/// on its lineage (default weight 1 per view). The returned view carries
/// `agreement`, the fraction of total weight behind the winner. As
/// `fraction` grows toward 1 the result broadens toward the root; as it
/// shrinks toward 0 it approaches the most specific widely shared taxon.
pub fn find_majority_vote<'db>(
    taxa: &[Taxon<'db>],
    weights: Option<&[f64]>,
    fraction: f64,
) -> LinnaeusResult<Taxon<'db>> {
    let first = taxa.first().ok_or_else(|| {
        LinnaeusError::EmptyInput("find_majority_vote requires at least one taxon".to_string())
    })?;
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(LinnaeusError::InvalidFraction(fraction));
    }
    let weights: Vec<f64> = match weights {
        Some(given) => {
            if given.len() != taxa.len() {
                return Err(LinnaeusError::InvalidWeight(format!(
                    "{} weights supplied for {} taxa",
                    given.len(),
                    taxa.len()
                )));
            }
            if let Some(bad) = given.iter().find(|&&weight| !(weight > 0.0)) {
                return Err(LinnaeusError::InvalidWeight(format!(
                    "weights must be positive, got {}",
                    bad
                )));
            }
            given.to_vec()
        }
        None => vec![1.0; taxa.len()],
    };
    let total_weight: f64 = weights.iter().sum();

    let mut support: HashMap<TaxonId, f64> = HashMap::new();
    for (taxon, &weight) in taxa.iter().zip(&weights) {
        let mut counted = HashSet::new();
        for &taxid in taxon.taxid_lineage() {
            if counted.insert(taxid) {
                *support.entry(taxid).or_insert(0.0) += weight;
            }
        }
    }

    // Support is monotone toward the root along each path, so the first
    // identifier past the threshold on a subject-first lineage is that
    // path's deepest candidate. The overall winner is the deepest of these
    // per-path candidates; a tie between distinct candidates at equal depth
    // (possible only below fraction 0.5, where qualifying candidates can
    // sit on disjoint branches) goes to the path carrying the greatest
    // accumulated support, then to input order.
    let threshold = fraction * total_weight;
    let mut winner: Option<Candidate> = None;
    for taxon in taxa {
        let lineage = taxon.taxid_lineage();
        let Some(position) = lineage
            .iter()
            .position(|taxid| support.get(taxid).copied().unwrap_or(0.0) > threshold)
        else {
            continue;
        };
        let candidate = Candidate {
            taxid: lineage[position],
            weight: support.get(&lineage[position]).copied().unwrap_or(0.0),
            depth: lineage.len() - 1 - position,
            path_support: lineage_support(taxon, &support),
        };
        let replace = match &winner {
            None => true,
            Some(current) if current.taxid == candidate.taxid => false,
            Some(current) => {
                candidate.depth > current.depth
                    || (candidate.depth == current.depth
                        && candidate.path_support > current.path_support)
            }
        };
        if replace {
            winner = Some(candidate);
        }
    }
    let winner = winner.ok_or(LinnaeusError::NoConsensus)?;

    let agreement = winner.weight / total_weight;
    trace!(winner = %winner.taxid, agreement, inputs = taxa.len(), "majority vote resolved");
    Taxon::with_agreement(winner.taxid, first.db(), agreement)
}

/// Deepest above-threshold identifier on one input path
struct Candidate {
    taxid: TaxonId,
    weight: f64,
    depth: usize,
    path_support: f64,
}

fn lineage_support(taxon: &Taxon, support: &HashMap<TaxonId, f64>) -> f64 {
    taxon
        .taxid_lineage()
        .iter()
        .map(|taxid| support.get(taxid).copied().unwrap_or(0.0))
        .sum()
}
