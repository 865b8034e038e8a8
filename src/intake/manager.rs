// SPDX-License-Identifier: MPL-2.0
//! The intake manager: one object owning policy, collection, drag state,
//! preview modal and the transient feedback channel.
//!
//! Every method runs to completion synchronously; the only asynchronous work
//! (preview reads, the drop settle timer) is scheduled by the caller and fed
//! back through [`IntakeManager::complete_preview`] and
//! [`IntakeManager::flush_settled`].

use super::capture::{capture_paths, DragPayload, DragState, DropBatch, SurfaceVisibility};
use super::preview::{Completion, PreviewDispatcher, PreviewState, PreviewTicket};
use super::store::CollectionStore;
use super::validation::{self, Partition};
use crate::domain::intake::{CandidateFile, EntryId, FileEntry, IntakePolicy, Rejection, Verdict};
use crate::error::Result;
use crate::intake::preview::PreviewContent;
use crate::ui::notifications::{self, Notification};
use iced::{Point, Rectangle};
use std::path::PathBuf;

/// Outcome of one add operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Ids of the admitted entries, in batch order.
    pub added: Vec<EntryId>,
    /// Rejected file names with the first failing check.
    pub rejected: Vec<(String, Rejection)>,
    /// Paths that could not be read (directories, missing files).
    pub skipped: usize,
}

impl BatchReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.rejected.is_empty() && self.skipped == 0
    }
}

#[derive(Debug)]
pub struct IntakeManager {
    policy: IntakePolicy,
    store: CollectionStore,
    drag: DragState,
    visibility: SurfaceVisibility,
    drops: DropBatch,
    preview: PreviewDispatcher,
    notifications: notifications::Manager,
}

impl Default for IntakeManager {
    fn default() -> Self {
        Self::with_policy(IntakePolicy::default(), |_| {})
    }
}

impl IntakeManager {
    /// Creates a manager with the default policy. `on_change` receives the
    /// full collection after every mutation.
    pub fn new(on_change: impl FnMut(&[FileEntry]) + 'static) -> Self {
        Self::with_policy(IntakePolicy::default(), on_change)
    }

    pub fn with_policy(policy: IntakePolicy, on_change: impl FnMut(&[FileEntry]) + 'static) -> Self {
        Self {
            policy,
            store: CollectionStore::with_listener(on_change),
            drag: DragState::default(),
            visibility: SurfaceVisibility::default(),
            drops: DropBatch::default(),
            preview: PreviewDispatcher::new(),
            notifications: notifications::Manager::new(),
        }
    }

    // ---------------------------------------------------------------------
    // Policy
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Replaces the whole policy. Accepted files are not re-validated.
    pub fn set_policy(&mut self, policy: IntakePolicy) {
        self.policy = policy;
    }

    pub fn set_allowed_types<I>(&mut self, types: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.policy.set_allowed_types(types);
    }

    pub fn set_allowed_extensions<I>(&mut self, extensions: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.policy.set_allowed_extensions(extensions);
    }

    pub fn set_max_file_size(&mut self, bytes: u64) {
        self.policy.set_max_file_size(bytes);
    }

    /// Validates against the current policy and selection without adding.
    #[must_use]
    pub fn validate(&self, candidate: &CandidateFile) -> Verdict {
        validation::validate(candidate, &self.policy, self.store.entries())
    }

    // ---------------------------------------------------------------------
    // Adding and removing
    // ---------------------------------------------------------------------

    /// Validates a batch, admits the valid files in order and reports the
    /// rest through one aggregated error notification.
    pub fn add_files(&mut self, batch: Vec<CandidateFile>) -> BatchReport {
        let Partition { accepted, rejected } =
            validation::partition(batch, &self.policy, self.store.entries());

        let added = self.store.add(accepted);
        if !added.is_empty() {
            self.visibility.show();
            tracing::info!(count = added.len(), total = self.store.len(), "files added");
            self.notifications.push(
                Notification::success("notification-files-added")
                    .with_arg("count", added.len().to_string()),
            );
        }

        let rejected: Vec<(String, Rejection)> = rejected
            .into_iter()
            .map(|(file, rejection)| (file.name().to_string(), rejection))
            .collect();
        if !rejected.is_empty() {
            for (name, rejection) in &rejected {
                tracing::info!(file = %name, reason = %rejection, "file rejected");
            }
            self.notifications.push(rejection_notification(&rejected));
        }

        BatchReport {
            added,
            rejected,
            skipped: 0,
        }
    }

    /// Adds a single file. Returns whether it passed validation.
    pub fn add_file(&mut self, candidate: CandidateFile) -> bool {
        !self.add_files(vec![candidate]).added.is_empty()
    }

    /// Turns filesystem paths into candidates and adds them as one batch.
    pub fn add_paths(&mut self, paths: Vec<PathBuf>) -> BatchReport {
        let captured = capture_paths(paths);
        for skipped in &captured.skipped {
            self.notifications.push(
                Notification::info("notification-path-skipped")
                    .with_arg("path", skipped.path.display().to_string()),
            );
        }

        let mut report = self.add_files(captured.candidates);
        report.skipped = captured.skipped.len();
        report
    }

    /// Removes the entry at `index`. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<FileEntry> {
        let removed = self.store.remove_at(index)?;
        self.after_removal(&removed);
        Some(removed)
    }

    /// Removes the entry with the given id. Unknown ids are ignored.
    pub fn remove(&mut self, id: EntryId) -> Option<FileEntry> {
        let removed = self.store.remove(id)?;
        self.after_removal(&removed);
        Some(removed)
    }

    fn after_removal(&mut self, removed: &FileEntry) {
        tracing::debug!(id = %removed.id(), file = removed.name(), "file removed");
        if self.preview.state().entry() == Some(removed.id()) {
            self.preview.close();
        }
    }

    /// Empties the collection and hides the intake surface.
    pub fn clear(&mut self) {
        self.store.clear();
        self.visibility.hide();
        if self.preview.state().is_open() {
            self.preview.close();
        }
        tracing::debug!("collection cleared");
    }

    /// Returns to constructor-time state. The policy and listener are kept.
    pub fn reset(&mut self) {
        self.clear();
        self.drag = DragState::default();
        self.drops.take();
        self.preview.close();
        self.notifications.clear();
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Read-only copy of the current collection.
    #[must_use]
    pub fn selected_files(&self) -> Vec<FileEntry> {
        self.store.snapshot()
    }

    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        self.store.entries()
    }

    #[must_use]
    pub fn has_files(&self) -> bool {
        !self.store.is_empty()
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.store.total_size()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ---------------------------------------------------------------------
    // Drag and drop
    // ---------------------------------------------------------------------

    pub fn drag_entered(&mut self, payload: &DragPayload) {
        if self.drag.enter(payload) {
            self.visibility.on_drag_detected();
        }
    }

    pub fn drag_left(&mut self, pointer: Option<Point>, target: Option<Rectangle>) {
        if self.drag.leave(pointer, target) {
            self.visibility.on_drag_finished(self.has_files());
        }
    }

    /// Queues one dropped path. Returns true when it opened a new batch and
    /// the caller must schedule [`Self::flush_settled`] with
    /// [`Self::drop_generation`].
    pub fn file_dropped(&mut self, path: PathBuf) -> bool {
        self.drag.drop_files();
        self.drops.push(path)
    }

    #[must_use]
    pub fn drop_generation(&self) -> u64 {
        self.drops.generation()
    }

    /// Flushes the drop batch `generation` once its settle window elapsed.
    /// A timer outliving its batch (flushed or reset meanwhile) does nothing.
    pub fn flush_settled(&mut self, generation: u64) -> BatchReport {
        match self.drops.take_settled(generation) {
            Some(paths) => self.finish_drop(paths),
            None => {
                tracing::debug!(generation, "ignoring stale drop settle timer");
                BatchReport::default()
            }
        }
    }

    /// Adds every queued dropped path as one batch.
    pub fn flush_drops(&mut self) -> BatchReport {
        let paths = self.drops.take();
        self.finish_drop(paths)
    }

    fn finish_drop(&mut self, paths: Vec<PathBuf>) -> BatchReport {
        let report = if paths.is_empty() {
            BatchReport::default()
        } else {
            self.add_paths(paths)
        };
        self.visibility.on_drag_finished(self.has_files());
        report
    }

    // ---------------------------------------------------------------------
    // Preview
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn preview_state(&self) -> &PreviewState {
        self.preview.state()
    }

    /// Opens the preview for an entry. Returns the read to schedule, if any.
    pub fn request_preview(&mut self, id: EntryId) -> Option<PreviewTicket> {
        let entry = self.store.get(id)?;
        let ticket = self.preview.request(entry);
        tracing::debug!(
            %id,
            generation = self.preview.generation(),
            read = ticket.is_some(),
            "preview requested"
        );
        ticket
    }

    pub fn complete_preview(
        &mut self,
        ticket: &PreviewTicket,
        result: Result<PreviewContent>,
    ) -> Completion {
        let still_present = self.store.contains(ticket.entry());
        let outcome = self.preview.complete(ticket, result, still_present);
        match &outcome {
            Completion::Applied => {}
            Completion::Failed(error) => {
                tracing::info!(file = ticket.file().name(), %error, "preview unavailable");
                self.notifications.push(
                    Notification::info("notification-preview-unavailable")
                        .with_arg("name", ticket.file().name())
                        .with_detail(
                            ticket.file().name(),
                            error.i18n_key(),
                            Vec::<(String, String)>::new(),
                        ),
                );
            }
            Completion::Stale => tracing::debug!(
                generation = ticket.generation(),
                current = self.preview.generation(),
                "discarding stale preview"
            ),
        }
        outcome
    }

    pub fn close_preview(&mut self) {
        self.preview.close();
    }

    // ---------------------------------------------------------------------
    // Feedback channel
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut notifications::Manager {
        &mut self.notifications
    }
}

fn rejection_notification(rejected: &[(String, Rejection)]) -> Notification {
    rejected.iter().fold(
        Notification::error("notification-files-rejected")
            .with_arg("count", rejected.len().to_string()),
        |notification, (name, rejection)| {
            notification.with_detail(name.as_str(), rejection.i18n_key(), rejection.i18n_args())
        },
    )
}
