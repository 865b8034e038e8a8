// SPDX-License-Identifier: MPL-2.0
//! Validation verdicts.

use super::policy::SUPPORTED_FORMATS;
use super::size::format_size;
use std::fmt;

/// Why a candidate was refused. Only the first failing check is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The file exceeds the configured maximum size.
    TooLarge { size: u64, max: u64 },
    /// Neither the declared type nor the extension is accepted.
    UnsupportedType { declared: String },
    /// A file with the same name, size and modification time is already selected.
    Duplicate,
}

impl Rejection {
    /// Returns the i18n message key for this rejection.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Rejection::TooLarge { .. } => "rejection-too-large",
            Rejection::UnsupportedType { .. } => "rejection-unsupported-type",
            Rejection::Duplicate => "rejection-duplicate",
        }
    }

    /// Returns the interpolation arguments matching [`Self::i18n_key`].
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            Rejection::TooLarge { size, max } => {
                vec![("size", format_size(*size)), ("max", format_size(*max))]
            }
            Rejection::UnsupportedType { declared } => vec![
                ("type", declared_label(declared).to_string()),
                ("formats", SUPPORTED_FORMATS.to_string()),
            ],
            Rejection::Duplicate => Vec::new(),
        }
    }
}

fn declared_label(declared: &str) -> &str {
    if declared.is_empty() {
        "unknown"
    } else {
        declared
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooLarge { size, max } => write!(
                f,
                "File is too large ({}). Maximum size is {}.",
                format_size(*size),
                format_size(*max)
            ),
            Rejection::UnsupportedType { declared } => write!(
                f,
                "Unsupported file type ({}). Supported formats: {SUPPORTED_FORMATS}.",
                declared_label(declared)
            ),
            Rejection::Duplicate => write!(f, "File has already been added."),
        }
    }
}

/// Outcome of validating one candidate. Consumed immediately, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Rejection),
}

impl Verdict {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(rejection) => Some(rejection),
        }
    }

    /// Human-readable rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.rejection().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_large_reason_names_both_sizes() {
        let rejection = Rejection::TooLarge {
            size: 20 * 1024 * 1024,
            max: 10 * 1024 * 1024,
        };
        let reason = rejection.to_string();
        assert!(reason.contains("20 MB"));
        assert!(reason.contains("10 MB"));
    }

    #[test]
    fn unsupported_type_reason_names_declared_type_and_formats() {
        let rejection = Rejection::UnsupportedType {
            declared: "application/json".into(),
        };
        let reason = rejection.to_string();
        assert!(reason.contains("application/json"));
        assert!(reason.contains(SUPPORTED_FORMATS));
    }

    #[test]
    fn empty_declared_type_is_reported_as_unknown() {
        let rejection = Rejection::UnsupportedType {
            declared: String::new(),
        };
        assert!(rejection.to_string().contains("unknown"));
        assert_eq!(rejection.i18n_args()[0], ("type", "unknown".to_string()));
    }

    #[test]
    fn valid_verdict_has_no_reason() {
        assert!(Verdict::Valid.is_valid());
        assert!(Verdict::Valid.reason().is_none());
    }

    #[test]
    fn invalid_verdict_exposes_reason() {
        let verdict = Verdict::Invalid(Rejection::Duplicate);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.reason().as_deref(), Some("File has already been added."));
    }

    #[test]
    fn i18n_keys_are_distinct() {
        assert_eq!(
            Rejection::TooLarge { size: 2, max: 1 }.i18n_key(),
            "rejection-too-large"
        );
        assert_eq!(Rejection::Duplicate.i18n_key(), "rejection-duplicate");
    }
}
