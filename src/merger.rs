//! Fold a merge-source rule list into a target rule list.

use crate::error::MergeError;
use crate::rules::RuleSet;
use log::{info, warn};
use std::path::Path;

/// Rule counts observed during a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    /// Unique rules in the target before merging.
    pub target: usize,
    /// Unique rules in the merge source.
    pub source: usize,
    /// Rules written back to the target.
    pub merged: usize,
    /// Rules the target did not previously contain.
    pub added: usize,
}

/// Union the rules of `target` and `source` and rewrite `target` with the
/// sorted, deduplicated result.
///
/// `target` is read in full and closed before it is reopened for writing.
/// `source` is only ever read.
///
/// # Errors
///
/// Returns [`MergeError::Read`] if either file cannot be read as UTF-8 text
/// and [`MergeError::Write`] if the target cannot be rewritten. When reading
/// fails the target is left untouched.
pub fn merge(target: &Path, source: &Path) -> Result<MergeSummary, MergeError> {
    let existing = RuleSet::read(target)?;
    let incoming = RuleSet::read(source)?;
    if incoming.is_empty() {
        warn!("merge list {} holds no rules", source.display());
    }
    let merged = existing.union(&incoming);
    merged.write(target)?;

    let summary = MergeSummary {
        target: existing.len(),
        source: incoming.len(),
        merged: merged.len(),
        added: merged.difference_len(&existing),
    };
    info!(
        "merged {} source rules into {} existing rules: {} total, {} added",
        summary.source, summary.target, summary.merged, summary.added
    );
    Ok(summary)
}
