//! Name-based matching of resources across two clouds.
//!
//! Resource identifiers are not preserved by migration, so `name` is the
//! join key. Names are not guaranteed unique; when a name repeats, the
//! first occurrence on each side (stable by fetch order) forms the pair
//! and extra destination occurrences are reported as duplicates.

use std::collections::{BTreeMap, BTreeSet};

/// Anything with a best-effort join key.
pub trait Named {
    fn name(&self) -> &str;
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Outcome of matching one source collection against one destination
/// collection.
#[derive(Debug, Clone)]
pub struct MatchResult<'a, T> {
    /// (source, destination) pairs sharing a name.
    pub pairs: Vec<(&'a T, &'a T)>,
    /// Source items whose name is absent from the destination.
    pub unmatched_src: Vec<&'a T>,
    /// Destination items whose name is absent from the source.
    pub unmatched_dst: Vec<&'a T>,
    /// Names occurring more than once on the destination side.
    pub duplicate_names: BTreeSet<String>,
}

/// Match two collections by name. Never consults ids.
pub fn match_by_name<'a, T: Named>(src: &'a [T], dst: &'a [T]) -> MatchResult<'a, T> {
    let src_index = index_by_name(src);
    let dst_index = index_by_name(dst);

    let mut pairs = Vec::new();
    let mut unmatched_src = Vec::new();
    let mut paired = BTreeSet::new();
    for item in src {
        match dst_index.get(item.name()) {
            Some(rows) => {
                // Only the first source occurrence of a name joins.
                if paired.insert(item.name()) {
                    pairs.push((item, rows[0]));
                }
            }
            None => unmatched_src.push(item),
        }
    }

    let unmatched_dst = dst
        .iter()
        .filter(|item| !src_index.contains_key(item.name()))
        .collect();

    // Duplicate destination names are a violation regardless of how many
    // source occurrences exist.
    let duplicate_names = dst_index
        .iter()
        .filter(|(_, rows)| rows.len() > 1)
        .map(|(name, _)| (*name).to_string())
        .collect();

    MatchResult {
        pairs,
        unmatched_src,
        unmatched_dst,
        duplicate_names,
    }
}

fn index_by_name<T: Named>(items: &[T]) -> BTreeMap<&str, Vec<&T>> {
    let mut index: BTreeMap<&str, Vec<&T>> = BTreeMap::new();
    for item in items {
        index.entry(item.name()).or_default().push(item);
    }
    index
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{match_by_name, Named};

    #[derive(Debug, PartialEq)]
    struct Item {
        id: &'static str,
        name: &'static str,
    }

    impl Named for Item {
        fn name(&self) -> &str {
            self.name
        }
    }

    fn item(id: &'static str, name: &'static str) -> Item {
        Item { id, name }
    }

    #[test]
    fn pairs_shared_names_and_splits_unmatched() {
        let src = vec![item("s1", "a"), item("s2", "b")];
        let dst = vec![item("d1", "b"), item("d2", "c")];

        let result = match_by_name(&src, &dst);
        assert_eq!(result.pairs, vec![(&src[1], &dst[0])]);
        assert_eq!(result.unmatched_src, vec![&src[0]]);
        assert_eq!(result.unmatched_dst, vec![&dst[1]]);
        assert!(result.duplicate_names.is_empty());
    }

    #[test]
    fn pairing_is_stable_under_collection_reordering() {
        let src = vec![item("s1", "a"), item("s2", "b")];
        let dst = vec![item("d1", "b"), item("d2", "a")];
        let dst_rev = vec![item("d2", "a"), item("d1", "b")];

        let forward = match_by_name(&src, &dst);
        let reversed = match_by_name(&src, &dst_rev);
        let names = |pairs: &[(&Item, &Item)]| {
            pairs
                .iter()
                .map(|(s, d)| (s.id, d.id))
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&forward.pairs), names(&reversed.pairs));
    }

    #[test]
    fn duplicate_destination_names_reported_for_any_source_set() {
        let src = vec![item("s1", "r2")];
        let dst = vec![item("d1", "r1"), item("d2", "r1"), item("d3", "r2")];

        let result = match_by_name(&src, &dst);
        let dupes: Vec<&str> = result.duplicate_names.iter().map(String::as_str).collect();
        assert_eq!(dupes, vec!["r1"]);
    }

    #[test]
    fn all_unique_destination_names_yield_no_duplicates() {
        let src = vec![item("s1", "r1")];
        let dst = vec![item("d1", "r1"), item("d2", "r2")];

        assert!(match_by_name(&src, &dst).duplicate_names.is_empty());
    }

    #[test]
    fn duplicate_destination_entries_pair_against_first_by_fetch_order() {
        let src = vec![item("s1", "r1")];
        let dst = vec![item("d2", "r1"), item("d1", "r1")];

        let result = match_by_name(&src, &dst);
        assert_eq!(result.pairs, vec![(&src[0], &dst[0])]);
    }
}
