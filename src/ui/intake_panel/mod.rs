// SPDX-License-Identifier: MPL-2.0
//! Intake panel component: file list, summary, drop highlight and the
//! preview modal.
//!
//! The panel owns no collection state; it drives an [`IntakeManager`] and
//! only caches what rendering needs (the decoded image handle of the open
//! preview).

pub mod view;

pub use view::{view, ViewContext};

use crate::domain::intake::EntryId;
use crate::error::Error;
use crate::intake::{
    reader, Completion, DragPayload, IntakeManager, PreviewContent, PreviewState, PreviewTicket,
    DROP_SETTLE,
};
use crate::ui::notifications::NotificationMessage;
use iced::widget::image;
use iced::{window, Task};

#[derive(Debug, Clone)]
pub enum Message {
    BrowseRequested,
    ClearAll,
    RemoveEntry(EntryId),
    PreviewRequested(EntryId),
    PreviewLoaded {
        ticket: PreviewTicket,
        result: Result<PreviewContent, Error>,
    },
    ClosePreview,
    /// The settle window of the given drop batch elapsed.
    DropSettled(u64),
    Notification(NotificationMessage),
}

/// Side effects the application must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenFileDialog,
}

/// Render cache of the panel.
#[derive(Debug, Default)]
pub struct State {
    /// Uploaded image of the preview currently shown.
    preview_image: Option<(EntryId, image::Handle)>,
}

impl State {
    #[must_use]
    pub fn preview_image(&self, entry: EntryId) -> Option<&image::Handle> {
        self.preview_image
            .as_ref()
            .filter(|(id, _)| *id == entry)
            .map(|(_, handle)| handle)
    }

    fn sync_with(&mut self, preview: &PreviewState) {
        match preview {
            PreviewState::Ready {
                entry,
                content: PreviewContent::Image { bytes, .. },
                ..
            } => {
                if self.preview_image(*entry).is_none() {
                    self.preview_image = Some((*entry, image::Handle::from_bytes(bytes.clone())));
                }
            }
            _ => self.preview_image = None,
        }
    }
}

pub fn update(
    manager: &mut IntakeManager,
    state: &mut State,
    message: Message,
) -> (Effect, Task<Message>) {
    let task = match message {
        Message::BrowseRequested => return (Effect::OpenFileDialog, Task::none()),
        Message::ClearAll => {
            manager.clear();
            Task::none()
        }
        Message::RemoveEntry(id) => {
            manager.remove(id);
            Task::none()
        }
        Message::PreviewRequested(id) => match manager.request_preview(id) {
            Some(ticket) => {
                let pending = ticket.clone();
                Task::perform(reader::load_preview(pending), move |result| {
                    Message::PreviewLoaded { ticket, result }
                })
            }
            None => Task::none(),
        },
        Message::PreviewLoaded { ticket, result } => {
            if manager.complete_preview(&ticket, result) == Completion::Applied {
                tracing::debug!(entry = %ticket.entry(), "preview ready");
            }
            Task::none()
        }
        Message::ClosePreview => {
            manager.close_preview();
            Task::none()
        }
        Message::DropSettled(generation) => {
            manager.flush_settled(generation);
            Task::none()
        }
        Message::Notification(message) => {
            manager.notifications_mut().handle_message(&message);
            Task::none()
        }
    };

    state.sync_with(manager.preview_state());
    (Effect::None, task)
}

/// Feeds window-level file drag events into the manager.
pub fn handle_window_event(manager: &mut IntakeManager, event: &window::Event) -> Task<Message> {
    match event {
        window::Event::FileHovered(_) => {
            manager.drag_entered(&DragPayload::files());
            Task::none()
        }
        window::Event::FilesHoveredLeft => {
            manager.drag_left(None, None);
            Task::none()
        }
        window::Event::FileDropped(path) => {
            if manager.file_dropped(path.clone()) {
                let generation = manager.drop_generation();
                Task::perform(tokio::time::sleep(DROP_SETTLE), move |()| {
                    Message::DropSettled(generation)
                })
            } else {
                Task::none()
            }
        }
        _ => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::CandidateFile;
    use std::path::PathBuf;

    fn manager_with(files: Vec<CandidateFile>) -> (IntakeManager, Vec<EntryId>) {
        let mut manager = IntakeManager::default();
        let ids = manager.add_files(files).added;
        (manager, ids)
    }

    #[test]
    fn browse_asks_for_file_dialog() {
        let mut manager = IntakeManager::default();
        let mut state = State::default();
        let (effect, _) = update(&mut manager, &mut state, Message::BrowseRequested);
        assert_eq!(effect, Effect::OpenFileDialog);
    }

    #[test]
    fn remove_uses_entry_id() {
        let (mut manager, ids) = manager_with(vec![
            CandidateFile::from_bytes("a.csv", "text/csv", b"1".to_vec(), 0),
            CandidateFile::from_bytes("b.csv", "text/csv", b"2".to_vec(), 0),
        ]);
        let mut state = State::default();

        update(&mut manager, &mut state, Message::RemoveEntry(ids[1]));
        update(&mut manager, &mut state, Message::RemoveEntry(ids[1]));

        let names: Vec<&str> = manager.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a.csv"]);
    }

    #[test]
    fn clear_all_hides_surface() {
        let (mut manager, _) = manager_with(vec![CandidateFile::from_bytes(
            "a.csv",
            "text/csv",
            b"1".to_vec(),
            0,
        )]);
        let mut state = State::default();
        assert!(manager.is_visible());

        update(&mut manager, &mut state, Message::ClearAll);
        assert!(!manager.has_files());
        assert!(!manager.is_visible());
    }

    #[test]
    fn loaded_image_is_cached_for_rendering() {
        let (mut manager, ids) = manager_with(vec![CandidateFile::from_bytes(
            "scan.png",
            "image/png",
            vec![0u8; 4],
            0,
        )]);
        let mut state = State::default();
        let ticket = manager.request_preview(ids[0]).expect("image needs a read");

        update(
            &mut manager,
            &mut state,
            Message::PreviewLoaded {
                ticket,
                result: Ok(PreviewContent::Image {
                    bytes: vec![0u8; 4],
                    width: 1,
                    height: 1,
                }),
            },
        );
        assert!(state.preview_image(ids[0]).is_some());

        update(&mut manager, &mut state, Message::ClosePreview);
        assert!(state.preview_image(ids[0]).is_none());
    }

    #[test]
    fn hover_and_leave_toggle_drag_highlight() {
        let mut manager = IntakeManager::default();
        let _ = handle_window_event(
            &mut manager,
            &window::Event::FileHovered(PathBuf::from("a.csv")),
        );
        assert!(manager.is_dragging());
        assert!(manager.is_visible());

        let _ = handle_window_event(&mut manager, &window::Event::FilesHoveredLeft);
        assert!(!manager.is_dragging());
        assert!(!manager.is_visible());
    }

    #[tokio::test]
    async fn settle_from_a_reset_batch_does_not_flush_the_next_one() {
        let dir = tempfile::tempdir().expect("temp dir");
        let old = dir.path().join("old.csv");
        let new = dir.path().join("new.csv");
        std::fs::write(&old, b"a,b\n").expect("write old");
        std::fs::write(&new, b"c,d\n").expect("write new");

        let mut manager = IntakeManager::default();
        let mut state = State::default();
        let _ = handle_window_event(&mut manager, &window::Event::FileDropped(old));
        let stale = manager.drop_generation();
        manager.reset();

        let _ = handle_window_event(&mut manager, &window::Event::FileDropped(new));
        update(&mut manager, &mut state, Message::DropSettled(stale));
        assert!(!manager.has_files());

        let current = manager.drop_generation();
        update(&mut manager, &mut state, Message::DropSettled(current));
        let names: Vec<&str> = manager.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["new.csv"]);
    }
}
