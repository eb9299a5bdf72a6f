// SPDX-License-Identifier: MPL-2.0
//! In-memory store of active toast records.
//!
//! The store is the single owner of all live [`ToastRecord`]s. It keeps them
//! in insertion order and stamps each insert with a strictly increasing
//! sequence number, so ordering stays deterministic even when two toasts are
//! created within the same clock tick.

use crate::record::{Phase, ToastId, ToastRecord};
use std::time::Instant;

/// Ordered collection of active toast records.
#[derive(Debug, Default)]
pub(crate) struct Store {
    records: Vec<ToastRecord>,
    next_seq: u64,
}

impl Store {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, stamping `created_at` and the sequence tie-break.
    ///
    /// Duplicate ids are allowed (caller-supplied ids are accepted as-is);
    /// all later operations on that id affect every record carrying it.
    pub(crate) fn insert(&mut self, mut record: ToastRecord) {
        record.created_at = Instant::now();
        record.seq = self.next_seq;
        self.next_seq += 1;
        self.records.push(record);
    }

    /// Flags every record with `id` as dismissed.
    ///
    /// Idempotent: returns `true` only if at least one record was newly
    /// flagged. Unknown ids are a no-op.
    pub(crate) fn mark_dismissed(&mut self, id: &ToastId) -> bool {
        let mut changed = false;
        for record in self.records.iter_mut().filter(|r| &r.id == id) {
            if !record.dismissed {
                record.dismissed = true;
                changed = true;
            }
        }
        changed
    }

    /// Flags every active record as dismissed.
    pub(crate) fn mark_all_dismissed(&mut self) {
        for record in &mut self.records {
            record.dismissed = true;
        }
    }

    /// Advances the phase of every record with `id`.
    ///
    /// Phases only move forward; an attempt to move a record back to an
    /// earlier phase is ignored.
    pub(crate) fn advance_phase(&mut self, id: &ToastId, phase: Phase) {
        for record in self.records.iter_mut().filter(|r| &r.id == id) {
            if phase > record.phase {
                record.phase = phase;
            }
        }
    }

    /// Removes every record with `id`, returning how many were removed.
    pub(crate) fn remove(&mut self, id: &ToastId) -> usize {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        before - self.records.len()
    }

    /// Returns the first record with `id`, if any is still active.
    pub(crate) fn get(&self, id: &ToastId) -> Option<&ToastRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &ToastRecord> {
        self.records.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::record;
    use super::*;
    use crate::record::Position;

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn insert_stamps_strictly_increasing_sequence() {
        let mut store = Store::new();
        for i in 0..4 {
            store.insert(record(&format!("t{i}"), Position::TopRight));
        }

        let seqs: Vec<u64> = store.iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2, 3]);

        let times: Vec<Instant> = store.iter().map(|r| r.created_at).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn mark_dismissed_is_idempotent() {
        let mut store = Store::new();
        store.insert(record("a", Position::TopRight));
        let id = ToastId::from("a");

        assert!(store.mark_dismissed(&id));
        assert!(!store.mark_dismissed(&id));
        assert!(store.get(&id).unwrap().dismissed);
    }

    #[test]
    fn mark_dismissed_unknown_id_is_noop() {
        let mut store = Store::new();
        store.insert(record("a", Position::TopRight));

        assert!(!store.mark_dismissed(&ToastId::from("missing")));
        assert!(!store.get(&ToastId::from("a")).unwrap().dismissed);
    }

    #[test]
    fn phase_never_moves_backwards() {
        let mut store = Store::new();
        store.insert(record("a", Position::TopRight));
        let id = ToastId::from("a");

        store.advance_phase(&id, Phase::Exiting);
        store.advance_phase(&id, Phase::Entering);

        assert_eq!(store.get(&id).unwrap().phase, Phase::Exiting);
    }

    #[test]
    fn remove_drops_every_record_with_the_id() {
        let mut store = Store::new();
        store.insert(record("dup", Position::TopRight));
        store.insert(record("dup", Position::TopRight));
        store.insert(record("other", Position::TopRight));

        assert_eq!(store.remove(&ToastId::from("dup")), 2);
        assert_eq!(store.len(), 1);
        assert!(store.get(&ToastId::from("dup")).is_none());
    }

    #[test]
    fn mark_all_dismissed_flags_everything() {
        let mut store = Store::new();
        store.insert(record("a", Position::TopRight));
        store.insert(record("b", Position::BottomLeft));

        store.mark_all_dismissed();
        assert!(store.iter().all(|r| r.dismissed));
    }
}
