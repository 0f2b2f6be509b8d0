//! In-memory queries over an NCBI-style taxonomy dump: lineage retrieval,
//! consensus across lineages (lowest common ancestor and weighted majority
//! vote), and name-to-identifier resolution.
//!
//! The entry point is [`TaxonomyDB`], built once from the three raw dump
//! tables (nodes, names, merged identifiers) and immutable afterwards.
//! [`Taxon`] views borrow the database and materialize one lineage each.

pub mod consensus;
pub mod database;
pub mod error;
pub mod lineage;
pub mod resolve;
pub mod taxon;
pub mod types;

// Re-export commonly used types
pub use consensus::{find_lca, find_majority_vote};
pub use database::TaxonomyDB;
pub use error::{LinnaeusError, LinnaeusResult};
pub use lineage::resolve_lineage;
#[cfg(feature = "fuzzy")]
pub use resolve::JaroWinklerMatcher;
pub use resolve::{NameMatcher, NameResolver, ResolveOptions};
pub use taxon::{Taxon, NO_RANK};
pub use types::{MergedRecord, NameRecord, NodeRecord, TaxonId, SCIENTIFIC_NAME};

/// Version information for the linnaeus crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
