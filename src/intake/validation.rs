// SPDX-License-Identifier: MPL-2.0
//! Validation engine.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. size against the policy maximum,
//! 2. declared type OR extension against the accepted sets,
//! 3. duplicate (name, size, last modified) against already selected files.
//!
//! Validation reads metadata only and never touches file content.

use crate::domain::intake::{CandidateFile, FileEntry, IntakePolicy, Rejection, Verdict};

/// Validates one candidate against the policy and the current selection.
#[must_use]
pub fn validate(candidate: &CandidateFile, policy: &IntakePolicy, selected: &[FileEntry]) -> Verdict {
    if !policy.allows_size(candidate.size()) {
        return Verdict::Invalid(Rejection::TooLarge {
            size: candidate.size(),
            max: policy.max_file_size(),
        });
    }

    if !policy.allows_type(candidate.mime_type())
        && !policy.allows_extension(&candidate.extension())
    {
        return Verdict::Invalid(Rejection::UnsupportedType {
            declared: candidate.mime_type().to_string(),
        });
    }

    if selected
        .iter()
        .any(|entry| entry.file().same_file_as(candidate))
    {
        return Verdict::Invalid(Rejection::Duplicate);
    }

    Verdict::Valid
}

/// Result of partitioning a batch into accepted and rejected candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Accepted candidates, in batch order.
    pub accepted: Vec<CandidateFile>,
    /// Rejected candidates with the first failing check, in batch order.
    pub rejected: Vec<(CandidateFile, Rejection)>,
}

/// Validates a batch in order.
///
/// Files accepted earlier in the same batch count as selected, so a batch
/// containing the same file twice keeps only the first occurrence.
#[must_use]
pub fn partition(
    batch: Vec<CandidateFile>,
    policy: &IntakePolicy,
    selected: &[FileEntry],
) -> Partition {
    let mut result = Partition::default();

    for candidate in batch {
        let verdict = match validate(&candidate, policy, selected) {
            Verdict::Valid
                if result
                    .accepted
                    .iter()
                    .any(|accepted| accepted.same_file_as(&candidate)) =>
            {
                Verdict::Invalid(Rejection::Duplicate)
            }
            verdict => verdict,
        };

        match verdict {
            Verdict::Valid => result.accepted.push(candidate),
            Verdict::Invalid(rejection) => result.rejected.push((candidate, rejection)),
        }
    }

    result
}
