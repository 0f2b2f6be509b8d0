//! The in-memory taxonomy index built from the raw dump tables

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::{LinnaeusError, LinnaeusResult};
use crate::types::{MergedRecord, NameRecord, NodeRecord, TaxonId, SCIENTIFIC_NAME};

/// Queryable index over one taxonomy dump
///
/// Holds the four derived mappings (parent, rank, names, merged) plus the
/// discovered root. Built in a single pass per table and immutable
/// afterwards, so a shared reference can be handed to any number of
/// concurrent readers without locking. Multiple databases (e.g. NCBI next
/// to GTDB) coexist independently.
#[derive(Debug)]
pub struct TaxonomyDB {
    parent: HashMap<TaxonId, TaxonId>,
    rank: HashMap<TaxonId, String>,
    names: HashMap<TaxonId, HashMap<String, Vec<String>>>,
    merged: HashMap<TaxonId, TaxonId>,
    root: TaxonId,
    /// Inverted scientific-name table, memoized on first name query
    name_index: OnceCell<HashMap<String, Vec<TaxonId>>>,
}

impl TaxonomyDB {
    /// Build the index from raw table rows
    ///
    /// Fails fast with [`LinnaeusError::MalformedDatabase`] (publishing no
    /// partial index) when a node references a parent absent from the node
    /// table, a name row references an unknown taxon, or the node table
    /// lacks a unique self-parented root. No tree traversal happens here;
    /// lineage walks are deferred to query time.
    pub fn from_tables(
        nodes: Vec<NodeRecord>,
        names: Vec<NameRecord>,
        merged: Option<Vec<MergedRecord>>,
    ) -> LinnaeusResult<Self> {
        let mut parent = HashMap::with_capacity(nodes.len());
        let mut rank = HashMap::with_capacity(nodes.len());
        let mut root = None;

        for node in nodes {
            if node.taxid == node.parent {
                match root {
                    None => root = Some(node.taxid),
                    Some(existing) => {
                        return Err(LinnaeusError::MalformedDatabase(format!(
                            "multiple self-parented roots: {} and {}",
                            existing, node.taxid
                        )))
                    }
                }
            }
            parent.insert(node.taxid, node.parent);
            rank.insert(node.taxid, node.rank);
        }

        let root = root.ok_or_else(|| {
            LinnaeusError::MalformedDatabase("node table has no self-parented root".to_string())
        })?;

        for (&taxid, &declared_parent) in &parent {
            if !parent.contains_key(&declared_parent) {
                return Err(LinnaeusError::MalformedDatabase(format!(
                    "node {} references missing parent {}",
                    taxid, declared_parent
                )));
            }
        }

        let mut name_table: HashMap<TaxonId, HashMap<String, Vec<String>>> =
            HashMap::with_capacity(parent.len());
        for row in names {
            if !parent.contains_key(&row.taxid) {
                return Err(LinnaeusError::MalformedDatabase(format!(
                    "name '{}' references unknown taxon {}",
                    row.name, row.taxid
                )));
            }
            name_table
                .entry(row.taxid)
                .or_default()
                .entry(row.class)
                .or_default()
                .push(row.name);
        }

        let merged: HashMap<TaxonId, TaxonId> = merged
            .unwrap_or_default()
            .into_iter()
            .map(|record| (record.old, record.new))
            .collect();

        debug!(
            nodes = parent.len(),
            named = name_table.len(),
            merged = merged.len(),
            "taxonomy index built"
        );

        Ok(Self {
            parent,
            rank,
            names: name_table,
            merged,
            root,
            name_index: OnceCell::new(),
        })
    }

    /// Number of taxa in the index
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The self-parented root of the tree
    pub fn root(&self) -> TaxonId {
        self.root
    }

    /// Whether `taxid` names a current (non-retired) taxon
    pub fn contains(&self, taxid: TaxonId) -> bool {
        self.parent.contains_key(&taxid)
    }

    /// Parent of `taxid`; the root reports itself
    pub fn parent_of(&self, taxid: TaxonId) -> Option<TaxonId> {
        self.parent.get(&taxid).copied()
    }

    /// Rank label of `taxid` ("species", "clade", "no rank", ...)
    pub fn rank_of(&self, taxid: TaxonId) -> Option<&str> {
        self.rank.get(&taxid).map(String::as_str)
    }

    /// All names of `taxid`, grouped by name class
    pub fn names_of(&self, taxid: TaxonId) -> Option<&HashMap<String, Vec<String>>> {
        self.names.get(&taxid)
    }

    /// Canonical display name: the first "scientific name" entry
    pub fn name_of(&self, taxid: TaxonId) -> Option<&str> {
        self.names
            .get(&taxid)?
            .get(SCIENTIFIC_NAME)?
            .first()
            .map(String::as_str)
    }

    /// Follow the merged table once: retired identifiers map to their
    /// replacement, everything else maps to itself
    pub fn normalize(&self, taxid: TaxonId) -> TaxonId {
        self.merged.get(&taxid).copied().unwrap_or(taxid)
    }

    /// Whether `taxid` is a retired identifier superseded by a merge
    pub fn is_legacy(&self, taxid: TaxonId) -> bool {
        self.merged.contains_key(&taxid)
    }

    /// Inverted scientific-name table, built on first use
    ///
    /// Homonyms are legitimate: one name can belong to several taxa, so
    /// every holder is kept. Identifier lists are sorted for deterministic
    /// output.
    pub(crate) fn name_index(&self) -> &HashMap<String, Vec<TaxonId>> {
        self.name_index.get_or_init(|| {
            let mut index: HashMap<String, Vec<TaxonId>> = HashMap::with_capacity(self.names.len());
            for (&taxid, classes) in &self.names {
                if let Some(scientific) = classes.get(SCIENTIFIC_NAME) {
                    for name in scientific {
                        index.entry(name.clone()).or_default().push(taxid);
                    }
                }
            }
            for holders in index.values_mut() {
                holders.sort_unstable();
                holders.dedup();
            }
            debug!(names = index.len(), "inverted name index built");
            index
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_node_tables() -> (Vec<NodeRecord>, Vec<NameRecord>) {
        let nodes = vec![
            NodeRecord::new(1u32, 1u32, "no rank"),
            NodeRecord::new(2u32, 1u32, "superkingdom"),
        ];
        let names = vec![
            NameRecord::scientific(1u32, "root"),
            NameRecord::scientific(2u32, "Bacteria"),
            NameRecord::new(2u32, "eubacteria", "genbank common name"),
        ];
        (nodes, names)
    }

    #[test]
    fn test_build_and_lookups() {
        let (nodes, names) = two_node_tables();
        let db = TaxonomyDB::from_tables(nodes, names, None).unwrap();

        assert_eq!(db.len(), 2);
        assert_eq!(db.root(), TaxonId::new(1));
        assert_eq!(db.parent_of(TaxonId::new(2)), Some(TaxonId::new(1)));
        assert_eq!(db.rank_of(TaxonId::new(2)), Some("superkingdom"));
        assert_eq!(db.name_of(TaxonId::new(2)), Some("Bacteria"));

        let classes = db.names_of(TaxonId::new(2)).unwrap();
        assert_eq!(classes["genbank common name"], vec!["eubacteria"]);
    }

    #[test]
    fn test_missing_parent_rejected() {
        let nodes = vec![
            NodeRecord::new(1u32, 1u32, "no rank"),
            NodeRecord::new(2u32, 99u32, "superkingdom"),
        ];
        let names = vec![NameRecord::scientific(1u32, "root")];
        let err = TaxonomyDB::from_tables(nodes, names, None).unwrap_err();
        assert!(matches!(err, LinnaeusError::MalformedDatabase(_)));
    }

    #[test]
    fn test_missing_root_rejected() {
        let nodes = vec![
            NodeRecord::new(1u32, 2u32, "no rank"),
            NodeRecord::new(2u32, 1u32, "no rank"),
        ];
        let err = TaxonomyDB::from_tables(nodes, Vec::new(), None).unwrap_err();
        assert!(matches!(err, LinnaeusError::MalformedDatabase(_)));
    }

    #[test]
    fn test_unknown_name_reference_rejected() {
        let (nodes, mut names) = two_node_tables();
        names.push(NameRecord::scientific(42u32, "Mystery"));
        let err = TaxonomyDB::from_tables(nodes, names, None).unwrap_err();
        assert!(matches!(err, LinnaeusError::MalformedDatabase(_)));
    }

    #[test]
    fn test_merged_normalization() {
        let (nodes, names) = two_node_tables();
        let merged = vec![MergedRecord::new(260u32, 2u32)];
        let db = TaxonomyDB::from_tables(nodes, names, Some(merged)).unwrap();

        assert!(db.is_legacy(TaxonId::new(260)));
        assert_eq!(db.normalize(TaxonId::new(260)), TaxonId::new(2));
        assert_eq!(db.normalize(TaxonId::new(2)), TaxonId::new(2));
        assert!(!db.contains(TaxonId::new(260)));
    }
}
