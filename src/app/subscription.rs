// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window-level file drag events are routed; everything else is handled
//! by the widgets themselves.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval of the notification tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes hover, leave and drop events to the intake panel.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(
            window_event @ (window::Event::FileHovered(_)
            | window::Event::FilesHoveredLeft
            | window::Event::FileDropped(_)),
        ) => Some(Message::WindowEvent(window_event)),
        _ => None,
    })
}

/// Periodic tick, only while toasts are on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
