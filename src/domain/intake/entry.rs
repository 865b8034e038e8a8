// SPDX-License-Identifier: MPL-2.0
//! Accepted file entries.

use super::candidate::CandidateFile;
use std::fmt;

/// Stable identifier of an accepted entry.
///
/// Identifiers are allocated in increasing order by the store and are never
/// reused, so unlike positional indices they stay valid across removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

impl EntryId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A candidate that passed validation and lives in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    id: EntryId,
    file: CandidateFile,
}

impl FileEntry {
    #[must_use]
    pub fn new(id: EntryId, file: CandidateFile) -> Self {
        Self { id, file }
    }

    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn file(&self) -> &CandidateFile {
        &self.file
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.file.name()
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.file.size()
    }

    /// Consumes the entry and returns the underlying file handle.
    #[must_use]
    pub fn into_file(self) -> CandidateFile {
        self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_displays_with_hash_prefix() {
        assert_eq!(EntryId::new(42).to_string(), "#42");
    }

    #[test]
    fn entry_ids_order_by_allocation() {
        assert!(EntryId::new(1) < EntryId::new(2));
    }

    #[test]
    fn entry_exposes_file_metadata() {
        let file = CandidateFile::from_bytes("prices.csv", "text/csv", b"a,b".to_vec(), 1);
        let entry = FileEntry::new(EntryId::new(3), file.clone());
        assert_eq!(entry.name(), "prices.csv");
        assert_eq!(entry.size(), 3);
        assert_eq!(entry.into_file(), file);
    }
}
