// SPDX-License-Identifier: MPL-2.0
//! Bounds applied to user-provided intake settings.
//!
//! The policy defaults themselves live next to the policy type in
//! [`crate::domain::intake::IntakePolicy`]; this module only holds the limits a
//! `settings.toml` value is clamped to.

/// Smallest accepted `max_file_size` (1 KB).
pub const MIN_MAX_FILE_SIZE: u64 = 1024;

/// Largest accepted `max_file_size` (1 GB).
pub const MAX_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Language used when neither the CLI, the config nor the OS locale matches.
pub const DEFAULT_LOCALE: &str = "en-US";

const _: () = {
    assert!(MIN_MAX_FILE_SIZE < MAX_MAX_FILE_SIZE);
    assert!(crate::domain::intake::DEFAULT_MAX_FILE_SIZE >= MIN_MAX_FILE_SIZE);
    assert!(crate::domain::intake::DEFAULT_MAX_FILE_SIZE <= MAX_MAX_FILE_SIZE);
};
