// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::intake_panel;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Panel messages are forwarded
/// so the root keeps a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Panel(intake_panel::Message),
    /// A window-level file drag event.
    WindowEvent(iced::window::Event),
    /// Result of the open file dialog; empty when the user cancelled.
    FilesPicked(Vec<PathBuf>),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Files to add to the collection at startup.
    pub files: Vec<PathBuf>,
}
