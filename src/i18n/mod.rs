// SPDX-License-Identifier: MPL-2.0
//! Localisation of every user-facing string.
//!
//! Messages live in embedded Fluent files under `assets/i18n/`, one per
//! locale. The locale is picked from the `--lang` flag, then the
//! `[general] language` setting, then the OS locale, then `en-US`.

pub mod fluent;
