//! Parent-pointer traversal from a taxon to the root

use tracing::trace;

use crate::database::TaxonomyDB;
use crate::error::{LinnaeusError, LinnaeusResult};
use crate::types::TaxonId;

/// Walk parent pointers from `taxid` up to the root
///
/// The starting identifier is first normalized through the merged table
/// (a single lookup), so retired identifiers resolve transparently to their
/// replacement. The result begins with the normalized subject and ends with
/// the root, both inclusive; cost is O(depth).
///
/// A parent chain longer than the whole node table can only mean a cycle
/// that never reaches the root, which is reported as a malformed database
/// instead of looping forever.
pub fn resolve_lineage(taxid: TaxonId, db: &TaxonomyDB) -> LinnaeusResult<Vec<TaxonId>> {
    let mut current = db.normalize(taxid);
    let mut lineage = vec![current];
    loop {
        let parent = db
            .parent_of(current)
            .ok_or(LinnaeusError::UnknownTaxId(taxid))?;
        if parent == current {
            break;
        }
        if lineage.len() == db.len() {
            return Err(LinnaeusError::MalformedDatabase(format!(
                "parent chain of {} cycles without reaching the root",
                taxid
            )));
        }
        lineage.push(parent);
        current = parent;
    }
    trace!(%taxid, depth = lineage.len(), "lineage resolved");
    Ok(lineage)
}
