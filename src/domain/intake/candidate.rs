// SPDX-License-Identifier: MPL-2.0
//! Candidate file handles.
//!
//! A candidate is immutable once obtained from its input channel: the intake
//! pipeline only reads its metadata and, for previews, its content.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the bytes of a candidate can be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// A file on disk (picker, drag-and-drop, command line).
    Path(PathBuf),
    /// An in-memory buffer (programmatic adds).
    Memory(Arc<[u8]>),
}

impl ContentSource {
    /// Returns the backing path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ContentSource::Path(path) => Some(path),
            ContentSource::Memory(_) => None,
        }
    }
}

/// An as-yet-unvalidated file handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    name: String,
    mime_type: String,
    size: u64,
    /// Milliseconds since the Unix epoch.
    last_modified: i64,
    source: ContentSource,
}

impl CandidateFile {
    /// Creates a candidate from explicit metadata.
    ///
    /// `mime_type` is the declared type as reported by the source; it may be
    /// empty or wrong.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size: u64,
        last_modified: i64,
        source: ContentSource,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            last_modified,
            source,
        }
    }

    /// Creates an in-memory candidate whose size is the buffer length.
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
        last_modified: i64,
    ) -> Self {
        let bytes: Arc<[u8]> = bytes.into();
        Self::new(
            name,
            mime_type,
            bytes.len() as u64,
            last_modified,
            ContentSource::Memory(bytes),
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared content type, possibly empty.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Last modification time in milliseconds since the Unix epoch.
    #[must_use]
    pub fn last_modified(&self) -> i64 {
        self.last_modified
    }

    #[must_use]
    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    /// Lower-cased substring after the final period of the name.
    ///
    /// A name without a period has an empty extension.
    #[must_use]
    pub fn extension(&self) -> String {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }

    /// Returns true when both files share name, size and modification time.
    ///
    /// This metadata triple is the duplicate-detection key: content is never
    /// compared.
    #[must_use]
    pub fn same_file_as(&self, other: &CandidateFile) -> bool {
        self.name == other.name
            && self.size == other.size
            && self.last_modified == other.last_modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> CandidateFile {
        CandidateFile::from_bytes(name, "", Vec::<u8>::new(), 0)
    }

    #[test]
    fn extension_is_lowercased_suffix_after_last_period() {
        assert_eq!(named("Report.Final.XLSX").extension(), "xlsx");
        assert_eq!(named("data.csv").extension(), "csv");
    }

    #[test]
    fn name_without_period_has_empty_extension() {
        assert_eq!(named("README").extension(), "");
    }

    #[test]
    fn trailing_period_yields_empty_extension() {
        assert_eq!(named("archive.").extension(), "");
    }

    #[test]
    fn from_bytes_uses_buffer_length_as_size() {
        let file = CandidateFile::from_bytes("a.txt", "text/plain", b"hello".to_vec(), 7);
        assert_eq!(file.size(), 5);
        assert_eq!(file.last_modified(), 7);
        assert!(file.source().path().is_none());
    }

    #[test]
    fn same_file_ignores_type_and_content() {
        let a = CandidateFile::from_bytes("a.csv", "text/csv", b"1,2".to_vec(), 10);
        let b = CandidateFile::from_bytes("a.csv", "application/octet-stream", b"3,4".to_vec(), 10);
        assert!(a.same_file_as(&b));
    }

    #[test]
    fn different_timestamp_is_not_the_same_file() {
        let a = CandidateFile::from_bytes("a.csv", "text/csv", b"1,2".to_vec(), 10);
        let b = CandidateFile::from_bytes("a.csv", "text/csv", b"1,2".to_vec(), 11);
        assert!(!a.same_file_as(&b));
    }
}
