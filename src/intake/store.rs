// SPDX-License-Identifier: MPL-2.0
//! Collection store for accepted files.
//!
//! The store is an insertion-ordered sequence. Every mutation invokes the
//! registered change listener with a snapshot of the full post-mutation
//! collection (never a delta).
//!
//! Positional indices are only meaningful until the next mutation: removing
//! index `i` shifts every later entry down by one. Callers that need to keep a
//! reference across mutations should hold the entry's [`EntryId`] instead.

use crate::domain::intake::{CandidateFile, EntryId, FileEntry};
use std::fmt;

/// Callback invoked with the post-mutation collection.
pub type ChangeListener = Box<dyn FnMut(&[FileEntry])>;

/// Ordered, id-addressable set of accepted files.
#[derive(Default)]
pub struct CollectionStore {
    entries: Vec<FileEntry>,
    next_id: u64,
    listener: Option<ChangeListener>,
}

impl fmt::Debug for CollectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionStore")
            .field("entries", &self.entries)
            .field("next_id", &self.next_id)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl CollectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that reports every mutation to `listener`.
    pub fn with_listener(listener: impl FnMut(&[FileEntry]) + 'static) -> Self {
        Self {
            listener: Some(Box::new(listener)),
            ..Self::default()
        }
    }

    /// Replaces the change listener.
    pub fn set_listener(&mut self, listener: impl FnMut(&[FileEntry]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Appends accepted files in the given order and returns their ids.
    ///
    /// An empty batch is not a mutation and does not notify.
    pub fn add(&mut self, files: Vec<CandidateFile>) -> Vec<EntryId> {
        if files.is_empty() {
            return Vec::new();
        }

        let ids: Vec<EntryId> = files
            .into_iter()
            .map(|file| {
                let id = EntryId::new(self.next_id);
                self.next_id += 1;
                self.entries.push(FileEntry::new(id, file));
                id
            })
            .collect();

        self.notify();
        ids
    }

    /// Removes the entry at `index`. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<FileEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.notify();
        Some(removed)
    }

    /// Removes the entry with the given id. Unknown ids are ignored.
    pub fn remove(&mut self, id: EntryId) -> Option<FileEntry> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    /// Empties the collection. Always notifies, even when already empty.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.notify();
    }

    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Returns an owned copy of the current collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FileEntry> {
        self.entries.clone()
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&FileEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Current position of the entry with the given id.
    #[must_use]
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the byte sizes of all entries.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(FileEntry::size).sum()
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn file(name: &str, size: usize) -> CandidateFile {
        CandidateFile::from_bytes(name, "text/csv", vec![0u8; size], 0)
    }

    fn names(store: &CollectionStore) -> Vec<String> {
        store
            .entries()
            .iter()
            .map(|entry| entry.name().to_string())
            .collect()
    }

    #[test]
    fn add_preserves_order_across_batches() {
        let mut store = CollectionStore::new();
        store.add(vec![file("A", 1), file("B", 1)]);
        store.add(vec![file("C", 1)]);
        assert_eq!(names(&store), vec!["A", "B", "C"]);

        store.remove_at(0);
        assert_eq!(names(&store), vec!["B", "C"]);
    }

    #[test]
    fn remove_at_out_of_range_is_a_silent_no_op() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut store = CollectionStore::with_listener(move |_| *counter.borrow_mut() += 1);
        store.add(vec![file("A", 1)]);

        assert!(store.remove_at(1).is_none());
        assert!(store.remove_at(usize::MAX).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn ids_survive_removal_of_earlier_entries() {
        let mut store = CollectionStore::new();
        let ids = store.add(vec![file("A", 1), file("B", 1), file("C", 1)]);

        store.remove(ids[0]);
        assert_eq!(store.position(ids[2]), Some(1));

        let removed = store.remove(ids[2]).map(|entry| entry.name().to_string());
        assert_eq!(removed.as_deref(), Some("C"));
        assert_eq!(names(&store), vec!["B"]);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = CollectionStore::new();
        let first = store.add(vec![file("A", 1)]);
        store.clear();
        let second = store.add(vec![file("A", 1)]);
        assert!(second[0] > first[0]);
    }

    #[test]
    fn listener_receives_full_snapshot_after_each_mutation() {
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut store = CollectionStore::with_listener(move |entries| {
            sink.borrow_mut()
                .push(entries.iter().map(|e| e.name().to_string()).collect());
        });

        store.add(vec![file("A", 1), file("B", 1)]);
        store.remove_at(0);
        store.clear();

        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["B".to_string()],
                Vec::<String>::new(),
            ]
        );
    }

    #[test]
    fn empty_add_does_not_notify() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut store = CollectionStore::with_listener(move |_| *counter.borrow_mut() += 1);
        assert!(store.add(Vec::new()).is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = CollectionStore::new();
        store.add(vec![file("A", 1)]);
        store.clear();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn total_size_sums_entries() {
        let mut store = CollectionStore::new();
        store.add(vec![file("A", 3), file("B", 4)]);
        assert_eq!(store.total_size(), 7);
    }
}
