//! Detection of resources migrated more than once.
//!
//! Migration must move each logical resource exactly once. A name
//! occurring multiple times on the destination is a violation regardless
//! of source-side counts.

use std::collections::BTreeSet;

use recon_core::{match_by_name, MatchResult, Named};

/// Duplicate destination names from a match, unmodified.
pub fn duplicate_destination_names<'a, T>(result: &'a MatchResult<'_, T>) -> &'a BTreeSet<String> {
    &result.duplicate_names
}

/// Run the matcher over one resource kind and report each duplicated
/// destination name.
pub fn migrated_once<T: Named>(kind: &str, src: &[T], dst: &[T]) -> Vec<String> {
    let result = match_by_name(src, dst);
    duplicate_destination_names(&result)
        .iter()
        .map(|name| format!("{kind} '{name}' is present multiple times on destination"))
        .collect()
}
