//! Core error types for linnaeus

use crate::types::TaxonId;
use thiserror::Error;

/// Main error type for taxonomy operations
#[derive(Error, Debug)]
pub enum LinnaeusError {
    #[error("Malformed database: {0}")]
    MalformedDatabase(String),

    #[error("Unknown taxonomic identifier: {0}")]
    UnknownTaxId(TaxonId),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Fraction must be strictly between 0 and 1, got {0}")]
    InvalidFraction(f64),

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    #[error("No taxon exceeded the consensus threshold")]
    NoConsensus,

    #[error("Score cutoff must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for taxonomy operations
pub type LinnaeusResult<T> = Result<T, LinnaeusError>;
