use serde::{Deserialize, Serialize};
use std::fmt;

/// Taxonomic identifier - newtype pattern for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct TaxonId(pub u32);

impl TaxonId {
    /// The conventional NCBI root taxon. The actual root of a loaded
    /// database is discovered from its node table, not assumed.
    pub const ROOT: Self = Self(1);

    /// Create a new TaxonId
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TaxonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TaxonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<TaxonId> for u32 {
    fn from(taxid: TaxonId) -> Self {
        taxid.0
    }
}
