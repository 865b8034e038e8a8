// SPDX-License-Identifier: MPL-2.0
//! Input capture: turns picker selections and drag-and-drop payloads into
//! candidate batches, and tracks the presentational drag state.
//!
//! Both channels produce the same thing, an ordered `Vec<CandidateFile>`.
//! Drag state only drives the drop highlight and the surface visibility; it
//! never gates validation.

use crate::domain::intake::{CandidateFile, ContentSource};
use crate::error::{Error, Result};
use iced::{Point, Rectangle};
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

/// Transfer type advertised by a drag that carries files.
pub const FILES_TRANSFER_TYPE: &str = "Files";

/// Window during which consecutive drop events are coalesced into one batch.
pub const DROP_SETTLE: Duration = Duration::from_millis(50);

/// Builds a candidate from filesystem metadata.
///
/// The declared type is guessed from the file name, which is also what the
/// platform file dialogs report; it is empty when the name is unknown.
pub fn candidate_from_path(path: &Path) -> Result<CandidateFile> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        return Err(Error::Io(format!("{} is a directory", path.display())));
    }

    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    let mime_type = mime_guess::from_path(path).first_raw().unwrap_or_default();
    let last_modified = metadata
        .modified()
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        });

    Ok(CandidateFile::new(
        name,
        mime_type,
        metadata.len(),
        last_modified,
        ContentSource::Path(path.to_path_buf()),
    ))
}

/// A path that could not be turned into a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: Error,
}

/// Candidates gathered from a list of paths, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedBatch {
    pub candidates: Vec<CandidateFile>,
    pub skipped: Vec<SkippedPath>,
}

/// Converts paths from either input channel into one candidate batch.
#[must_use]
pub fn capture_paths(paths: Vec<PathBuf>) -> CapturedBatch {
    let mut batch = CapturedBatch::default();
    for path in paths {
        match candidate_from_path(&path) {
            Ok(candidate) => batch.candidates.push(candidate),
            Err(reason) => {
                tracing::debug!(path = %path.display(), %reason, "skipping unreadable drop/pick path");
                batch.skipped.push(SkippedPath { path, reason });
            }
        }
    }
    batch
}

/// Advertised type set of an in-progress drag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragPayload {
    types: Vec<String>,
}

impl DragPayload {
    pub fn new<I>(types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Payload of an OS-level file drag.
    #[must_use]
    pub fn files() -> Self {
        Self::new([FILES_TRANSFER_TYPE])
    }

    /// Whether the drag carries files, judged from the advertised types only.
    #[must_use]
    pub fn carries_files(&self) -> bool {
        self.types.iter().any(|t| t == FILES_TRANSFER_TYPE)
    }
}

/// Visual drag phase of the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Tracks whether a file drag is hovering the drop target.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    phase: DragPhase,
}

impl DragState {
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Handles a drag entering the target. Drags without files are ignored.
    ///
    /// Returns true when the payload carries files.
    pub fn enter(&mut self, payload: &DragPayload) -> bool {
        if !payload.carries_files() {
            return false;
        }
        self.phase = DragPhase::Dragging;
        true
    }

    /// Handles a drag-leave notification.
    ///
    /// Leave notifications also fire when crossing into a child of the target,
    /// so the drag only ends once the pointer is outside the target bounds.
    /// A missing pointer or missing bounds means the pointer left entirely.
    /// Returns true when the state went back to idle.
    pub fn leave(&mut self, pointer: Option<Point>, target: Option<Rectangle>) -> bool {
        if let (Some(pointer), Some(target)) = (pointer, target) {
            if target.contains(pointer) {
                return false;
            }
        }
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }

    /// Handles a drop: always returns to idle.
    pub fn drop_files(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

/// Coalesces per-file drop events into a single batch.
///
/// Each opened batch gets a new generation; a settle timer only flushes the
/// batch it was scheduled for.
#[derive(Debug, Clone, Default)]
pub struct DropBatch {
    pending: Vec<PathBuf>,
    generation: u64,
}

impl DropBatch {
    /// Queues a dropped path. Returns true when it opened a new batch, in
    /// which case the caller schedules a flush of [`Self::generation`] after
    /// [`DROP_SETTLE`].
    pub fn push(&mut self, path: PathBuf) -> bool {
        let opened = self.pending.is_empty();
        if opened {
            self.generation += 1;
        }
        self.pending.push(path);
        opened
    }

    /// Generation of the open (or last opened) batch.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Takes every queued path, in drop order, and closes the batch.
    pub fn take(&mut self) -> Vec<PathBuf> {
        if !self.pending.is_empty() {
            self.generation += 1;
        }
        std::mem::take(&mut self.pending)
    }

    /// Takes the queued paths only if `generation` is still the open batch.
    pub fn take_settled(&mut self, generation: u64) -> Option<Vec<PathBuf>> {
        if generation != self.generation || self.pending.is_empty() {
            return None;
        }
        Some(self.take())
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// Visibility of the intake surface.
///
/// The surface appears as soon as a file drag is detected anywhere in the
/// window and hides again when the drag ends without leaving any file behind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceVisibility {
    visible: bool,
}

impl SurfaceVisibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn on_drag_detected(&mut self) {
        self.show();
    }

    /// Called when a drag is cancelled or dropped.
    pub fn on_drag_finished(&mut self, has_files: bool) {
        if !has_files {
            self.hide();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;
    use std::fs;
    use tempfile::tempdir;

    fn target() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(200.0, 100.0))
    }

    #[test]
    fn default_drag_state_is_idle() {
        let state = DragState::default();
        assert_eq!(state.phase(), DragPhase::Idle);
    }

    #[test]
    fn enter_with_files_starts_dragging() {
        let mut state = DragState::default();
        assert!(state.enter(&DragPayload::files()));
        assert!(state.is_dragging());
    }

    #[test]
    fn enter_without_files_is_ignored() {
        let mut state = DragState::default();
        assert!(!state.enter(&DragPayload::new(["text/plain", "text/uri-list"])));
        assert!(!state.is_dragging());
    }

    #[test]
    fn leave_into_child_keeps_dragging() {
        let mut state = DragState::default();
        state.enter(&DragPayload::files());
        assert!(!state.leave(Some(Point::new(50.0, 50.0)), Some(target())));
        assert!(state.is_dragging());
    }

    #[test]
    fn leave_outside_bounds_returns_to_idle() {
        let mut state = DragState::default();
        state.enter(&DragPayload::files());
        assert!(state.leave(Some(Point::new(250.0, 50.0)), Some(target())));
        assert!(!state.is_dragging());
    }

    #[test]
    fn leave_without_pointer_returns_to_idle() {
        let mut state = DragState::default();
        state.enter(&DragPayload::files());
        assert!(state.leave(None, Some(target())));
        assert_eq!(state.phase(), DragPhase::Idle);
    }

    #[test]
    fn drop_always_returns_to_idle() {
        let mut state = DragState::default();
        state.enter(&DragPayload::files());
        state.drop_files();
        assert!(!state.is_dragging());
    }

    #[test]
    fn drop_batch_opens_once_and_drains_in_order() {
        let mut batch = DropBatch::default();
        assert!(batch.push(PathBuf::from("a.csv")));
        assert!(!batch.push(PathBuf::from("b.csv")));
        assert!(batch.is_pending());

        assert_eq!(
            batch.take(),
            vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]
        );
        assert!(!batch.is_pending());
        assert!(batch.push(PathBuf::from("c.csv")));
    }

    #[test]
    fn settle_timer_only_flushes_its_own_batch() {
        let mut batch = DropBatch::default();
        batch.push(PathBuf::from("a.csv"));
        let first = batch.generation();

        // Discarded before the timer fired, then a new drop arrives.
        batch.take();
        batch.push(PathBuf::from("b.csv"));
        let second = batch.generation();
        assert_ne!(first, second);

        assert_eq!(batch.take_settled(first), None);
        assert!(batch.is_pending());
        assert_eq!(batch.take_settled(second), Some(vec![PathBuf::from("b.csv")]));
        assert_eq!(batch.take_settled(second), None);
    }

    #[test]
    fn cancelled_drag_hides_empty_surface() {
        let mut visibility = SurfaceVisibility::default();
        visibility.on_drag_detected();
        assert!(visibility.is_visible());
        visibility.on_drag_finished(false);
        assert!(!visibility.is_visible());
    }

    #[test]
    fn finished_drag_keeps_surface_with_files() {
        let mut visibility = SurfaceVisibility::default();
        visibility.on_drag_detected();
        visibility.on_drag_finished(true);
        assert!(visibility.is_visible());
    }

    #[test]
    fn candidate_from_path_reads_metadata_and_guesses_type() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("prices.csv");
        fs::write(&path, "sku,price\nA,1\n").expect("failed to write file");

        let candidate = candidate_from_path(&path).expect("candidate should load");
        assert_eq!(candidate.name(), "prices.csv");
        assert_eq!(candidate.mime_type(), "text/csv");
        assert_eq!(candidate.size(), 14);
        assert!(candidate.last_modified() > 0);
        assert_eq!(candidate.source().path(), Some(path.as_path()));
    }

    #[test]
    fn unknown_extension_has_empty_declared_type() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("blob.zzqq");
        fs::write(&path, [1u8, 2, 3]).expect("failed to write file");

        let candidate = candidate_from_path(&path).expect("candidate should load");
        assert_eq!(candidate.mime_type(), "");
    }

    #[test]
    fn capture_paths_skips_directories_and_missing_files() {
        let dir = tempdir().expect("failed to create temp dir");
        let file = dir.path().join("a.txt");
        fs::write(&file, "x").expect("failed to write file");

        let batch = capture_paths(vec![
            dir.path().to_path_buf(),
            file.clone(),
            dir.path().join("missing.txt"),
        ]);

        assert_eq!(batch.candidates.len(), 1);
        assert_eq!(batch.candidates[0].name(), "a.txt");
        assert_eq!(batch.skipped.len(), 2);
        assert!(matches!(batch.skipped[0].reason, Error::Io(_)));
    }
}
