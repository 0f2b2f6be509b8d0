//! Read-only taxon views over a taxonomy index

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::Serialize;

use crate::database::TaxonomyDB;
use crate::error::{LinnaeusError, LinnaeusResult};
use crate::lineage::resolve_lineage;
use crate::types::TaxonId;

/// Rank label excluded from the ranked map projections
pub const NO_RANK: &str = "no rank";

/// One taxon together with its materialized lineage
///
/// A `Taxon` borrows the index it was resolved against; it never owns or
/// mutates it, so views are cheap to construct and freely shareable. The
/// lineage is stored subject-first, root-last; all other projections are
/// computed on demand from the borrowed index.
#[derive(Debug, Clone, Serialize)]
pub struct Taxon<'db> {
    #[serde(skip)]
    db: &'db TaxonomyDB,
    taxid: TaxonId,
    name: String,
    rank: String,
    legacy_taxid: bool,
    taxid_lineage: Vec<TaxonId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    agreement: Option<f64>,
}

impl<'db> Taxon<'db> {
    /// Resolve `taxid` against `db`
    ///
    /// Retired identifiers are normalized through the merged table; the
    /// resulting view then describes the replacement taxon and reports
    /// [`Taxon::legacy_taxid`].
    pub fn new(taxid: TaxonId, db: &'db TaxonomyDB) -> LinnaeusResult<Self> {
        let legacy_taxid = db.is_legacy(taxid);
        let taxid_lineage = resolve_lineage(taxid, db)?;
        let subject = taxid_lineage[0];
        let name = db
            .name_of(subject)
            .ok_or_else(|| {
                LinnaeusError::MalformedDatabase(format!(
                    "taxon {} has no scientific name",
                    subject
                ))
            })?
            .to_string();
        let rank = db
            .rank_of(subject)
            .ok_or_else(|| {
                LinnaeusError::MalformedDatabase(format!("taxon {} has no rank entry", subject))
            })?
            .to_string();
        Ok(Self {
            db,
            taxid: subject,
            name,
            rank,
            legacy_taxid,
            taxid_lineage,
            agreement: None,
        })
    }

    /// Consensus constructor: same view, with the supporting weight fraction
    pub(crate) fn with_agreement(
        taxid: TaxonId,
        db: &'db TaxonomyDB,
        agreement: f64,
    ) -> LinnaeusResult<Self> {
        let mut taxon = Self::new(taxid, db)?;
        taxon.agreement = Some(agreement);
        Ok(taxon)
    }

    pub(crate) fn db(&self) -> &'db TaxonomyDB {
        self.db
    }

    pub fn taxid(&self) -> TaxonId {
        self.taxid
    }

    /// Canonical ("scientific name") display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// Whether the identifier passed to [`Taxon::new`] was a retired one
    pub fn legacy_taxid(&self) -> bool {
        self.legacy_taxid
    }

    /// Fraction of input weight behind this view when produced by the
    /// consensus engine; `None` for directly constructed views
    pub fn agreement(&self) -> Option<f64> {
        self.agreement
    }

    /// Identifiers from the subject to the root, both inclusive
    pub fn taxid_lineage(&self) -> &[TaxonId] {
        &self.taxid_lineage
    }

    /// Canonical names along the lineage, subject first
    ///
    /// A lineage member missing its scientific name (possible only with an
    /// incomplete name table) renders as `Unknown (taxid)` rather than
    /// leaving a silent hole in the projection.
    pub fn name_lineage(&self) -> Vec<String> {
        self.taxid_lineage
            .iter()
            .map(|&taxid| match self.db.name_of(taxid) {
                Some(name) => name.to_string(),
                None => format!("Unknown ({})", taxid),
            })
            .collect()
    }

    /// Rank labels along the lineage, subject first
    pub fn rank_lineage(&self) -> Vec<&str> {
        self.taxid_lineage
            .iter()
            .map(|&taxid| self.db.rank_of(taxid).unwrap_or(NO_RANK))
            .collect()
    }

    /// (rank, taxid) pairs along the lineage, subject first
    pub fn ranked_taxid_lineage(&self) -> Vec<(&str, TaxonId)> {
        self.rank_lineage()
            .into_iter()
            .zip(self.taxid_lineage.iter().copied())
            .collect()
    }

    /// (rank, name) pairs along the lineage, subject first
    pub fn ranked_name_lineage(&self) -> Vec<(&str, String)> {
        self.rank_lineage()
            .into_iter()
            .zip(self.name_lineage())
            .collect()
    }

    /// Named ranks to identifiers, in root-to-subject order
    ///
    /// Entries ranked exactly "no rank" are skipped. Folding from the root
    /// toward the subject means a repeated rank label (possible only with
    /// odd data) resolves to the occurrence closest to the subject.
    pub fn rank_taxid_map(&self) -> IndexMap<String, TaxonId> {
        let mut map = IndexMap::new();
        for &taxid in self.taxid_lineage.iter().rev() {
            let rank = self.db.rank_of(taxid).unwrap_or(NO_RANK);
            if rank != NO_RANK {
                map.insert(rank.to_string(), taxid);
            }
        }
        map
    }

    /// Named ranks to canonical names, in root-to-subject order
    pub fn rank_name_map(&self) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        for &taxid in self.taxid_lineage.iter().rev() {
            let rank = self.db.rank_of(taxid).unwrap_or(NO_RANK);
            if rank != NO_RANK {
                if let Some(name) = self.db.name_of(taxid) {
                    map.insert(rank.to_string(), name.to_string());
                }
            }
        }
        map
    }

    /// View of the parent taxon; the root's parent is the root itself
    pub fn parent(&self) -> LinnaeusResult<Taxon<'db>> {
        let parent = self
            .db
            .parent_of(self.taxid)
            .ok_or(LinnaeusError::UnknownTaxId(self.taxid))?;
        Taxon::new(parent, self.db)
    }
}

/// Renders the named-rank lineage, root first, in the compact
/// `k__Bacteria;p__Proteobacteria;...` form
impl fmt::Display for Taxon<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        for (rank, name) in self.rank_name_map() {
            if let Some(initial) = rank.chars().next() {
                parts.push(format!("{}__{}", initial, name));
            }
        }
        write!(f, "{}", parts.join(";"))
    }
}

/// Two views are equal when their whole identifier lineages match
impl PartialEq for Taxon<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.taxid_lineage == other.taxid_lineage
    }
}

impl Eq for Taxon<'_> {}

impl Hash for Taxon<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.taxid.hash(state);
    }
}
