//! Shared value types

pub mod record;
pub mod taxon_id;

pub use record::{MergedRecord, NameRecord, NodeRecord, SCIENTIFIC_NAME};
pub use taxon_id::TaxonId;
