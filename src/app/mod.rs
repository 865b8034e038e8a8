// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the intake panel.
//!
//! The `App` struct wires together the intake manager, localization and
//! persisted preferences, and translates messages into side effects such as
//! the file picker or the drop settle timer.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::domain::intake::{format_size, FileEntry};
use crate::i18n::fluent::I18n;
use crate::intake::IntakeManager;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::intake_panel::{self, Effect};
use crate::ui::notifications::{Notification, Toast};
use iced::widget::{container, rule, stack, Column, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use tokio::sync::watch;

/// What the upload step would receive right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    pub count: usize,
    pub total_size: u64,
}

impl SelectionSummary {
    #[must_use]
    pub fn of(entries: &[FileEntry]) -> Self {
        Self {
            count: entries.len(),
            total_size: entries.iter().map(FileEntry::size).sum(),
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    manager: IntakeManager,
    panel: intake_panel::State,
    /// Fed by the collection's change listener.
    selection: watch::Receiver<SelectionSummary>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("files", &self.manager.file_count())
            .field("visible", &self.manager.is_visible())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let (selection_tx, selection) = watch::channel(SelectionSummary::default());
        let manager = IntakeManager::new(move |entries| {
            selection_tx.send_replace(SelectionSummary::of(entries));
        });
        Self {
            i18n: I18n::default(),
            manager,
            panel: intake_panel::State::default(),
            selection,
        }
    }
}

impl App {
    /// Loads preferences, applies the intake policy and adds any files given
    /// on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.manager.set_policy(config.intake.policy());

        if let Some(key) = config_warning {
            app.manager
                .notifications_mut()
                .push(Notification::info(&key));
        }

        if !flags.files.is_empty() {
            let report = app.manager.add_paths(flags.files);
            tracing::info!(
                added = report.added.len(),
                rejected = report.rejected.len(),
                skipped = report.skipped,
                "startup files processed"
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        let selection = self.selection();
        if selection.count == 0 {
            app_name
        } else {
            format!("{app_name} ({})", selection.count)
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Latest collection summary published by the change listener.
    #[must_use]
    pub fn selection(&self) -> SelectionSummary {
        *self.selection.borrow()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.manager.notifications().has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Panel(message) => {
                let (effect, task) =
                    intake_panel::update(&mut self.manager, &mut self.panel, message);
                let task = task.map(Message::Panel);
                match effect {
                    Effect::None => task,
                    Effect::OpenFileDialog => Task::batch([task, self.open_file_dialog()]),
                }
            }
            Message::WindowEvent(event) => {
                intake_panel::handle_window_event(&mut self.manager, &event).map(Message::Panel)
            }
            Message::FilesPicked(paths) => {
                if !paths.is_empty() {
                    self.manager.add_paths(paths);
                }
                Task::none()
            }
            Message::Tick(_) => {
                self.manager.notifications_mut().tick();
                Task::none()
            }
        }
    }

    /// Opens the native picker filtered to the current extension set.
    fn open_file_dialog(&self) -> Task<Message> {
        let extensions: Vec<String> = self
            .manager
            .policy()
            .allowed_extensions()
            .map(str::to_string)
            .collect();
        let mut dialog =
            rfd::AsyncFileDialog::new().set_title(self.i18n.tr("picker-title").as_str());
        if !extensions.is_empty() {
            dialog = dialog.add_filter(self.i18n.tr("picker-filter-name"), &extensions);
        }

        Task::perform(dialog.pick_files(), |handles| {
            let paths: Vec<PathBuf> = handles
                .unwrap_or_default()
                .iter()
                .map(|handle| handle.path().to_path_buf())
                .collect();
            Message::FilesPicked(paths)
        })
    }

    fn view(&self) -> Element<'_, Message> {
        let panel = intake_panel::view(intake_panel::ViewContext {
            i18n: &self.i18n,
            manager: &self.manager,
            state: &self.panel,
        })
        .map(Message::Panel);

        let content = Column::new()
            .push(container(panel).width(Length::Fill).height(Length::Fill))
            .push(rule::horizontal(1))
            .push(self.status_bar());

        let toasts = Toast::view_overlay(self.manager.notifications(), &self.i18n)
            .map(|message| Message::Panel(intake_panel::Message::Notification(message)));

        stack![content, toasts].into()
    }

    fn status_bar(&self) -> Element<'_, Message> {
        let selection = self.selection();
        let label = if selection.count == 0 {
            self.i18n.tr("status-empty")
        } else {
            let count = selection.count.to_string();
            let size = format_size(selection.total_size);
            self.i18n.tr_with_args(
                "status-ready",
                &[("count", count.as_str()), ("size", size.as_str())],
            )
        };

        container(Text::new(label).size(typography::CAPTION))
            .width(Length::Fill)
            .padding([spacing::XXS, spacing::SM])
            .into()
    }
}
