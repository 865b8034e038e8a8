// SPDX-License-Identifier: MPL-2.0
//! File intake domain types.
//!
//! A [`CandidateFile`] arrives from an input channel, is checked against the
//! current [`IntakePolicy`] to produce a [`Verdict`], and on acceptance becomes
//! a [`FileEntry`] with a stable [`EntryId`].

mod candidate;
mod entry;
mod policy;
mod size;
mod verdict;

pub use candidate::{CandidateFile, ContentSource};
pub use entry::{EntryId, FileEntry};
pub use policy::{
    normalize_extension, IntakePolicy, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_ALLOWED_TYPES,
    DEFAULT_MAX_FILE_SIZE, SUPPORTED_FORMATS,
};
pub use size::format_size;
pub use verdict::{Rejection, Verdict};
