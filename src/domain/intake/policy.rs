// SPDX-License-Identifier: MPL-2.0
//! Acceptance policy for candidate files.
//!
//! The policy combines a size limit with two acceptance sets: declared MIME
//! types and file extensions. A file is type-acceptable when EITHER matches;
//! the extension set exists because platforms report spreadsheet types
//! inconsistently (`application/octet-stream`, empty strings, vendor types).

use std::collections::BTreeSet;

/// Default maximum accepted file size (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Declared content types accepted by default.
pub const DEFAULT_ALLOWED_TYPES: &[&str] = &[
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/pdf",
    "text/plain",
    "image/png",
    "image/jpeg",
];

/// File extensions accepted by default, regardless of the declared type.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] =
    &["csv", "xls", "xlsx", "pdf", "txt", "png", "jpg", "jpeg"];

/// Format categories named in type rejections.
pub const SUPPORTED_FORMATS: &str = "CSV, Excel, PDF, text, PNG/JPEG images";

/// Normalizes a user-supplied extension: trimmed, without leading dots,
/// lower-cased.
#[must_use]
pub fn normalize_extension(raw: &str) -> String {
    raw.trim().trim_start_matches('.').to_lowercase()
}

/// Size, type and extension acceptance rules.
///
/// Changing the policy only affects later validations; files already
/// accepted are never re-validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakePolicy {
    max_file_size: u64,
    allowed_types: BTreeSet<String>,
    allowed_extensions: BTreeSet<String>,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_FILE_SIZE,
            DEFAULT_ALLOWED_TYPES.iter().copied(),
            DEFAULT_ALLOWED_EXTENSIONS.iter().copied(),
        )
    }
}

impl IntakePolicy {
    /// Creates a policy from explicit rules.
    pub fn new<T, E>(max_file_size: u64, allowed_types: T, allowed_extensions: E) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let mut policy = Self {
            max_file_size,
            allowed_types: BTreeSet::new(),
            allowed_extensions: BTreeSet::new(),
        };
        policy.set_allowed_types(allowed_types);
        policy.set_allowed_extensions(allowed_extensions);
        policy
    }

    #[must_use]
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    pub fn set_max_file_size(&mut self, bytes: u64) {
        self.max_file_size = bytes;
    }

    /// Replaces the accepted MIME types wholesale.
    pub fn set_allowed_types<I>(&mut self, types: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.allowed_types = types
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
    }

    /// Replaces the accepted extensions wholesale.
    pub fn set_allowed_extensions<I>(&mut self, extensions: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.allowed_extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
    }

    pub fn allowed_types(&self) -> impl Iterator<Item = &str> {
        self.allowed_types.iter().map(String::as_str)
    }

    pub fn allowed_extensions(&self) -> impl Iterator<Item = &str> {
        self.allowed_extensions.iter().map(String::as_str)
    }

    #[must_use]
    pub fn allows_size(&self, size: u64) -> bool {
        size <= self.max_file_size
    }

    /// Returns true when the declared type is in the accepted set.
    #[must_use]
    pub fn allows_type(&self, mime_type: &str) -> bool {
        !mime_type.is_empty() && self.allowed_types.contains(&mime_type.to_lowercase())
    }

    /// Returns true when the extension is in the accepted set.
    ///
    /// An empty extension never matches.
    #[must_use]
    pub fn allows_extension(&self, extension: &str) -> bool {
        !extension.is_empty() && self.allowed_extensions.contains(&extension.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_uses_documented_limits() {
        let policy = IntakePolicy::default();
        assert_eq!(policy.max_file_size(), DEFAULT_MAX_FILE_SIZE);
        assert!(policy.allows_type("text/csv"));
        assert!(policy.allows_extension("xlsx"));
    }

    #[test]
    fn size_limit_is_inclusive() {
        let policy = IntakePolicy::new(100, ["text/plain"], ["txt"]);
        assert!(policy.allows_size(100));
        assert!(!policy.allows_size(101));
    }

    #[test]
    fn extensions_are_normalized() {
        let policy = IntakePolicy::new(1, Vec::<&str>::new(), [".CSV", " xlsx ", ""]);
        let extensions: Vec<&str> = policy.allowed_extensions().collect();
        assert_eq!(extensions, vec!["csv", "xlsx"]);
    }

    #[test]
    fn empty_type_and_extension_never_match() {
        let policy = IntakePolicy::default();
        assert!(!policy.allows_type(""));
        assert!(!policy.allows_extension(""));
    }

    #[test]
    fn set_allowed_types_replaces_the_whole_set() {
        let mut policy = IntakePolicy::default();
        policy.set_allowed_types(["application/json"]);
        assert!(policy.allows_type("application/json"));
        assert!(!policy.allows_type("text/csv"));
    }

    #[test]
    fn type_comparison_ignores_case() {
        let policy = IntakePolicy::default();
        assert!(policy.allows_type("Text/CSV"));
    }
}
