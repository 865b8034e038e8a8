// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Elm-style "state down, messages up": components expose `Message`,
//! `update` and `view`, and return an `Effect` when the application must act.
//!
//! - [`intake_panel`] - File list, drop zone, summary and preview modal
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod intake_panel;
pub mod notifications;
pub mod styles;
