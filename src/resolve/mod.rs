//! Name-to-identifier resolution, exact and approximate

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::trace;

use crate::database::TaxonomyDB;
use crate::error::{LinnaeusError, LinnaeusResult};
use crate::types::TaxonId;

/// Pluggable approximate string matcher
///
/// Given a query, the universe of known names, and a normalized cutoff in
/// [0, 1], return every candidate scoring at or above the cutoff. Kept
/// deliberately narrow so the matching backend stays swappable and its
/// absence is a configuration error rather than a silent exact fallback.
pub trait NameMatcher: Send + Sync {
    fn find_matches<'a>(&self, query: &str, universe: &[&'a str], cutoff: f64) -> Vec<&'a str>;
}

/// Jaro-Winkler matcher backed by `strsim`
///
/// Scores the whole universe in parallel; NCBI-scale name tables (a few
/// hundred thousand entries) resolve in milliseconds.
#[cfg(feature = "fuzzy")]
#[derive(Debug, Default, Clone, Copy)]
pub struct JaroWinklerMatcher;

#[cfg(feature = "fuzzy")]
impl NameMatcher for JaroWinklerMatcher {
    fn find_matches<'a>(&self, query: &str, universe: &[&'a str], cutoff: f64) -> Vec<&'a str> {
        universe
            .par_iter()
            .filter(|name| strsim::jaro_winkler(query, name) >= cutoff)
            .copied()
            .collect()
    }
}

/// Options for a name lookup
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Use the approximate matcher instead of exact table lookup
    pub fuzzy: bool,
    /// Minimum normalized similarity for fuzzy matches
    pub score_cutoff: f64,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            fuzzy: false,
            score_cutoff: 0.9,
        }
    }
}

/// Maps name strings back to candidate identifiers
///
/// Lookups run against the database's inverted scientific-name table,
/// which is built lazily on the first query.
pub struct NameResolver<'db> {
    db: &'db TaxonomyDB,
    matcher: Option<Box<dyn NameMatcher>>,
}

impl<'db> NameResolver<'db> {
    /// Exact-only resolver; fuzzy queries fail with a configuration error
    pub fn new(db: &'db TaxonomyDB) -> Self {
        Self { db, matcher: None }
    }

    /// Resolver with an approximate matcher for fuzzy queries
    pub fn with_matcher(db: &'db TaxonomyDB, matcher: Box<dyn NameMatcher>) -> Self {
        Self {
            db,
            matcher: Some(matcher),
        }
    }

    /// All identifiers holding `query` as scientific name
    ///
    /// Homonyms are expected: several taxa can legitimately share one name,
    /// and all holders are returned. A miss is an empty result, not an
    /// error.
    pub fn resolve(&self, query: &str, options: &ResolveOptions) -> LinnaeusResult<Vec<TaxonId>> {
        if options.fuzzy {
            self.resolve_fuzzy(query, options.score_cutoff)
        } else {
            let hits = self
                .db
                .name_index()
                .get(query)
                .cloned()
                .unwrap_or_default();
            trace!(query, hits = hits.len(), "exact name lookup");
            Ok(hits)
        }
    }

    /// Batch lookup; the output mirrors the input shape and order
    pub fn resolve_batch(
        &self,
        queries: &[&str],
        options: &ResolveOptions,
    ) -> LinnaeusResult<Vec<Vec<TaxonId>>> {
        queries
            .par_iter()
            .map(|query| self.resolve(query, options))
            .collect()
    }

    fn resolve_fuzzy(&self, query: &str, cutoff: f64) -> LinnaeusResult<Vec<TaxonId>> {
        if !(0.0..=1.0).contains(&cutoff) {
            return Err(LinnaeusError::InvalidThreshold(cutoff));
        }
        let matcher = self.matcher.as_deref().ok_or_else(|| {
            LinnaeusError::Configuration(
                "fuzzy resolution requested but no name matcher is configured".to_string(),
            )
        })?;

        let index = self.db.name_index();
        let universe: Vec<&str> = index.keys().map(String::as_str).collect();
        let matches = matcher.find_matches(query, &universe, cutoff);

        // Every name past the cutoff contributes its holders; no ranking
        // beyond the threshold filter
        let mut seen = HashSet::new();
        let mut hits = Vec::new();
        for name in matches {
            if let Some(holders) = index.get(name) {
                for &taxid in holders {
                    if seen.insert(taxid) {
                        hits.push(taxid);
                    }
                }
            }
        }
        hits.sort_unstable();
        trace!(query, cutoff, hits = hits.len(), "fuzzy name lookup");
        Ok(hits)
    }
}
