// SPDX-License-Identifier: MPL-2.0
//! Grouping and ordering of toasts for display.
//!
//! A pure projection of the store: records are partitioned into the six
//! fixed position buckets, empty buckets are omitted, and each bucket is
//! ordered by arrival. Bottom anchors grow oldest-first and top anchors
//! newest-first, so a fresh toast always appears adjacent to the screen edge
//! its bucket hangs from.

use crate::record::{Position, ToastRecord};
use crate::store::Store;

/// Partitions active records by position, each bucket ordered for display.
///
/// Buckets appear in [`Position::ALL`] order; positions with no records are
/// skipped entirely. Ordering is by `(created_at, seq)`, descending for top
/// anchors and ascending for bottom anchors.
pub(crate) fn by_position(store: &Store) -> Vec<(Position, Vec<&ToastRecord>)> {
    let mut buckets = Vec::new();

    for position in Position::ALL {
        let mut records: Vec<&ToastRecord> =
            store.iter().filter(|r| r.position == position).collect();
        if records.is_empty() {
            continue;
        }

        records.sort_by_key(|r| (r.created_at, r.seq));
        if position.is_top() {
            records.reverse();
        }

        buckets.push((position, records));
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::record;

    fn titles(bucket: &[&ToastRecord]) -> Vec<String> {
        bucket
            .iter()
            .map(|r| r.title().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn empty_store_projects_no_buckets() {
        let store = Store::new();
        assert!(by_position(&store).is_empty());
    }

    #[test]
    fn empty_buckets_are_omitted() {
        let mut store = Store::new();
        store.insert(record("a", Position::TopRight));

        let buckets = by_position(&store);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].0, Position::TopRight);
    }

    #[test]
    fn bottom_buckets_order_oldest_first() {
        let mut store = Store::new();
        store.insert(record("t1", Position::BottomRight));
        store.insert(record("t2", Position::BottomRight));
        store.insert(record("t3", Position::BottomRight));

        let buckets = by_position(&store);
        assert_eq!(titles(&buckets[0].1), vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn top_buckets_order_newest_first() {
        let mut store = Store::new();
        store.insert(record("t1", Position::TopLeft));
        store.insert(record("t2", Position::TopLeft));
        store.insert(record("t3", Position::TopLeft));

        let buckets = by_position(&store);
        assert_eq!(titles(&buckets[0].1), vec!["t3", "t2", "t1"]);
    }

    #[test]
    fn records_split_across_positions() {
        let mut store = Store::new();
        store.insert(record("top", Position::TopCenter));
        store.insert(record("bottom", Position::BottomCenter));

        let buckets = by_position(&store);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].0, Position::TopCenter);
        assert_eq!(buckets[1].0, Position::BottomCenter);
    }

    #[test]
    fn duplicate_ids_group_under_the_same_bucket() {
        let mut store = Store::new();
        store.insert(record("dup", Position::BottomRight));
        store.insert(record("dup", Position::BottomRight));

        let buckets = by_position(&store);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].1.len(), 2);
    }
}
