// SPDX-License-Identifier: MPL-2.0
//! `pricing_intake` is the file intake surface of a pricing workflow, built
//! with the Iced GUI framework.
//!
//! It validates candidate files against a configurable policy, keeps the
//! accepted ones in an ordered collection, and previews them on demand. The
//! intake core ([`intake`], [`domain`]) has no UI dependency; [`app`] and
//! [`ui`] host it in a desktop window.

#![doc(html_root_url = "https://docs.rs/pricing_intake/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod intake;
pub mod ui;
