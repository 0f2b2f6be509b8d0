//! Raw table rows handed to the index builder
//!
//! These mirror the three logical tables of an NCBI-style taxonomy dump.
//! How the rows are obtained (download, archive extraction, `.dmp` line
//! parsing) is the caller's concern.

use super::TaxonId;
use serde::{Deserialize, Serialize};

/// Name class under which every taxon carries its canonical display name
pub const SCIENTIFIC_NAME: &str = "scientific name";

/// One row of the node table: a taxon, its parent, and its rank label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub taxid: TaxonId,
    /// The root node lists itself as parent
    pub parent: TaxonId,
    /// Open label set ("order", "clade", "no rank", ...), not a closed enum
    pub rank: String,
}

impl NodeRecord {
    pub fn new(taxid: impl Into<TaxonId>, parent: impl Into<TaxonId>, rank: impl Into<String>) -> Self {
        Self {
            taxid: taxid.into(),
            parent: parent.into(),
            rank: rank.into(),
        }
    }
}

/// One row of the name table; a taxon usually carries several rows across
/// name classes ("scientific name", "common name", "synonym", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub taxid: TaxonId,
    pub name: String,
    pub class: String,
}

impl NameRecord {
    pub fn new(taxid: impl Into<TaxonId>, name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            taxid: taxid.into(),
            name: name.into(),
            class: class.into(),
        }
    }

    /// Shorthand for a row in the canonical "scientific name" class
    pub fn scientific(taxid: impl Into<TaxonId>, name: impl Into<String>) -> Self {
        Self::new(taxid, name, SCIENTIFIC_NAME)
    }
}

/// One row of the merged table: a retired identifier and its replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub old: TaxonId,
    pub new: TaxonId,
}

impl MergedRecord {
    pub fn new(old: impl Into<TaxonId>, new: impl Into<TaxonId>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}
