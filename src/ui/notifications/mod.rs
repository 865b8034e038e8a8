// SPDX-License-Identifier: MPL-2.0
//! Transient feedback channel.
//!
//! Toasts report batch outcomes, skipped paths and unavailable previews
//! without blocking interaction.
//!
//! - Error: 5 s, Success and Info: 3 s; every toast can also be dismissed
//! - At most three toasts are visible, the rest are queued
//! - Messages are i18n keys resolved at render time
//!
//! ```
//! use pricing_intake::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-files-added").with_arg("count", "2"));
//! assert_eq!(manager.visible_count(), 1);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Detail, Notification, NotificationId, Severity};
pub use toast::Toast;
