// SPDX-License-Identifier: MPL-2.0
//! Preview dispatcher.
//!
//! Dispatch is by declared type only:
//! - `image/*` is read and shown as an image,
//! - `text/plain` is read and shown as truncated text,
//! - `application/pdf` gets a metadata placeholder without any read,
//! - anything else gets an informational message without any read.
//!
//! Every request bumps a generation counter. A read that completes after a
//! newer request, after the preview was closed, or after its entry left the
//! store is discarded instead of overwriting the modal.

use crate::domain::intake::{CandidateFile, EntryId, FileEntry};
use crate::error::Error;

/// Maximum number of characters shown in a text preview.
pub const TEXT_PREVIEW_LIMIT: usize = 1000;

/// Appended to text previews that were cut at [`TEXT_PREVIEW_LIMIT`].
pub const TRUNCATION_MARKER: &str = "\n… (truncated)";

/// Rendering branch selected from the declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewCategory {
    Image,
    Text,
    Document,
    Unsupported,
}

impl PreviewCategory {
    /// Whether this branch needs the file content.
    #[must_use]
    pub fn needs_read(self) -> bool {
        matches!(self, PreviewCategory::Image | PreviewCategory::Text)
    }
}

/// Picks the preview branch for a declared content type.
#[must_use]
pub fn categorize(mime_type: &str) -> PreviewCategory {
    if mime_type.starts_with("image/") {
        PreviewCategory::Image
    } else if mime_type == "text/plain" {
        PreviewCategory::Text
    } else if mime_type == "application/pdf" {
        PreviewCategory::Document
    } else {
        PreviewCategory::Unsupported
    }
}

/// Caps `text` at [`TEXT_PREVIEW_LIMIT`] characters, appending the marker
/// when anything was cut.
#[must_use]
pub fn truncate_text(text: &str) -> String {
    match text.char_indices().nth(TEXT_PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}

/// What the preview modal shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent {
    Image {
        bytes: Vec<u8>,
        width: u32,
        height: u32,
    },
    Text(String),
    /// Metadata-only placeholder for documents that are not rendered.
    Document {
        name: String,
        size: u64,
        last_modified: i64,
    },
    Unsupported {
        declared: String,
    },
    /// The read failed; the error is localised when rendered.
    Unavailable {
        error: Error,
    },
}

/// A scheduled read, handed to the async loader and back on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTicket {
    generation: u64,
    entry: EntryId,
    category: PreviewCategory,
    file: CandidateFile,
}

impl PreviewTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn entry(&self) -> EntryId {
        self.entry
    }

    #[must_use]
    pub fn category(&self) -> PreviewCategory {
        self.category
    }

    #[must_use]
    pub fn file(&self) -> &CandidateFile {
        &self.file
    }
}

/// State of the preview modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Closed,
    Loading {
        entry: EntryId,
        name: String,
    },
    Ready {
        entry: EntryId,
        name: String,
        content: PreviewContent,
    },
}

impl PreviewState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, PreviewState::Closed)
    }

    /// Entry currently shown or loading, if any.
    #[must_use]
    pub fn entry(&self) -> Option<EntryId> {
        match self {
            PreviewState::Closed => None,
            PreviewState::Loading { entry, .. } | PreviewState::Ready { entry, .. } => Some(*entry),
        }
    }
}

/// Result of handing a finished read back to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The content is now displayed.
    Applied,
    /// The read failed; the modal shows an unavailable message.
    Failed(Error),
    /// A newer request or a removal superseded this read.
    Stale,
}

/// Tracks the modal state and the latest preview generation.
#[derive(Debug, Default)]
pub struct PreviewDispatcher {
    generation: u64,
    state: PreviewState,
}

impl PreviewDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Opens the preview for `entry`.
    ///
    /// Returns a ticket when the content must be read; the caller schedules
    /// the read and reports back through [`Self::complete`]. Categories that
    /// need no read are resolved immediately.
    pub fn request(&mut self, entry: &FileEntry) -> Option<PreviewTicket> {
        self.generation += 1;
        let file = entry.file();
        let category = categorize(file.mime_type());
        let name = file.name().to_string();

        if category.needs_read() {
            self.state = PreviewState::Loading {
                entry: entry.id(),
                name,
            };
            return Some(PreviewTicket {
                generation: self.generation,
                entry: entry.id(),
                category,
                file: file.clone(),
            });
        }

        let content = match category {
            PreviewCategory::Document => PreviewContent::Document {
                name: name.clone(),
                size: file.size(),
                last_modified: file.last_modified(),
            },
            _ => PreviewContent::Unsupported {
                declared: file.mime_type().to_string(),
            },
        };
        self.state = PreviewState::Ready {
            entry: entry.id(),
            name,
            content,
        };
        None
    }

    /// Applies a finished read.
    ///
    /// `still_present` tells whether the ticket's entry is still in the store.
    pub fn complete(
        &mut self,
        ticket: &PreviewTicket,
        result: Result<PreviewContent, Error>,
        still_present: bool,
    ) -> Completion {
        if ticket.generation != self.generation {
            return Completion::Stale;
        }
        if !still_present {
            self.close();
            return Completion::Stale;
        }

        let name = ticket.file.name().to_string();
        match result {
            Ok(content) => {
                self.state = PreviewState::Ready {
                    entry: ticket.entry,
                    name,
                    content,
                };
                Completion::Applied
            }
            Err(error) => {
                self.state = PreviewState::Ready {
                    entry: ticket.entry,
                    name,
                    content: PreviewContent::Unavailable {
                        error: error.clone(),
                    },
                };
                Completion::Failed(error)
            }
        }
    }

    /// Dismisses the modal and invalidates any read in flight.
    pub fn close(&mut self) {
        self.generation += 1;
        self.state = PreviewState::Closed;
    }
}
