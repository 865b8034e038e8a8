// SPDX-License-Identifier: MPL-2.0
//! Notification data: severity, localisable message, optional per-file details.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Rejected files, failed operations (red, 5s).
    Error,
    /// Files added (green, 3s).
    #[default]
    Success,
    /// Neutral feedback such as skipped paths or unavailable previews (blue, 3s).
    Info,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Error => palette::ERROR_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Time after which a toast of this severity removes itself.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Duration {
        match self {
            Severity::Error => Duration::from_millis(5000),
            Severity::Success | Severity::Info => Duration::from_millis(3000),
        }
    }
}

/// One localisable line attached to a notification, e.g. a rejected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    /// Literal prefix shown as-is, typically a file name.
    pub subject: String,
    pub message_key: String,
    pub message_args: Vec<(String, String)>,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Resolved through i18n at render time.
    message_key: String,
    message_args: Vec<(String, String)>,
    details: Vec<Detail>,
    /// Set when the toast becomes visible; queued toasts have no timer yet.
    shown_at: Option<Instant>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            details: Vec::new(),
            shown_at: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Appends a detail line rendered below the main message.
    #[must_use]
    pub fn with_detail<K, V>(
        mut self,
        subject: impl Into<String>,
        message_key: impl Into<String>,
        args: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.details.push(Detail {
            subject: subject.into(),
            message_key: message_key.into(),
            message_args: args
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        });
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    /// Starts the auto-dismiss delay.
    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown_at.is_some()
    }

    /// Whether the delay has elapsed at `now`. Never true before the toast
    /// was shown.
    #[must_use]
    pub fn should_auto_dismiss_at(&self, now: Instant) -> bool {
        self.shown_at.is_some_and(|shown| {
            now.saturating_duration_since(shown) >= self.severity.auto_dismiss_duration()
        })
    }

    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.should_auto_dismiss_at(Instant::now())
    }
}
