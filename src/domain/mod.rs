// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core intake rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`intake`]: Candidate files, acceptance policy, verdicts and stored entries
//!   ([`CandidateFile`](intake::CandidateFile), [`IntakePolicy`](intake::IntakePolicy),
//!   [`Verdict`](intake::Verdict), [`FileEntry`](intake::FileEntry))
//! - [`results`]: Display-ready summary of a pricing run
//!   ([`ResultsSummary`](results::ResultsSummary))

pub mod intake;
pub mod results;
