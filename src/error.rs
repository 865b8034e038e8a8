// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Policy violations (oversized files, unsupported types, duplicates) are not
//! errors: they are reported as [`Rejection`](crate::domain::intake::Rejection)
//! values. This type covers the failures that can actually interrupt an
//! operation: filesystem access, configuration parsing and preview reads.

use thiserror::Error;

/// Errors surfaced by the intake pipeline and its ambient services.
///
/// Payloads are stored as strings so the error stays `Clone` and can travel
/// inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Filesystem access failed (missing file, permission denied, ...).
    #[error("I/O Error: {0}")]
    Io(String),

    /// The configuration file could not be read or written.
    #[error("Config Error: {0}")]
    Config(String),

    /// A preview read completed but its content could not be decoded.
    #[error("Preview Error: {0}")]
    Preview(String),
}

impl Error {
    /// Returns the i18n message key used when this error reaches the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Preview(_) => "error-preview",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Preview(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
