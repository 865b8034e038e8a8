// SPDX-License-Identifier: MPL-2.0
//! File intake pipeline.
//!
//! Input capture → validation → collection store → (on demand) preview.
//! [`IntakeManager`] ties the stages together behind one facade.

pub mod capture;
pub mod manager;
pub mod preview;
pub mod reader;
pub mod store;
pub mod validation;

pub use capture::{DragPayload, DragPhase, DROP_SETTLE};
pub use manager::{BatchReport, IntakeManager};
pub use preview::{Completion, PreviewCategory, PreviewContent, PreviewState, PreviewTicket};
pub use store::CollectionStore;
