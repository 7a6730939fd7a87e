// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Run history shared across forked test executions.
//!
//! The main type here is [`RunHistoryRegistry`], which records one [`ReportEntry`] per attempt
//! at running a test method, reruns included.

mod entry;
mod registry;

pub use entry::*;
pub use registry::*;

/// A classification of all the attempts made at running a test method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RerunDescription {
    /// The first attempt passed.
    Success {
        /// The passing attempt.
        single: ReportEntry,
    },

    /// A later attempt passed after one or more failures.
    Flaky {
        /// The attempt that passed.
        last: ReportEntry,

        /// Attempts before the one that passed, oldest first.
        prior: Vec<ReportEntry>,
    },

    /// No attempt passed, and at least one failed.
    Failure {
        /// The first failed attempt.
        first: ReportEntry,

        /// Subsequent attempts, oldest first.
        retries: Vec<ReportEntry>,
    },

    /// Every attempt was skipped.
    Skipped {
        /// The last skipped attempt.
        last: ReportEntry,
    },
}

impl RerunDescription {
    /// Classifies `attempts`, given oldest first. Returns `None` if `attempts` is empty.
    pub fn new(mut attempts: Vec<ReportEntry>) -> Option<Self> {
        if let Some(pass_idx) = attempts.iter().position(ReportEntry::is_success) {
            // Attempts after the first pass are not expected, and don't change the outcome.
            attempts.truncate(pass_idx + 1);
            let last = attempts.pop()?;
            return Some(if attempts.is_empty() {
                Self::Success { single: last }
            } else {
                Self::Flaky {
                    last,
                    prior: attempts,
                }
            });
        }

        if let Some(fail_idx) = attempts.iter().position(|entry| entry.status().is_failure()) {
            let retries = attempts.split_off(fail_idx + 1);
            let first = attempts.pop()?;
            return Some(Self::Failure { first, retries });
        }

        attempts.pop().map(|last| Self::Skipped { last })
    }

    /// Returns the attempt that determines the reported status.
    pub fn main_entry(&self) -> &ReportEntry {
        match self {
            Self::Success { single } => single,
            Self::Flaky { last, .. } => last,
            Self::Failure { first, .. } => first,
            Self::Skipped { last } => last,
        }
    }

    /// Returns the attempts reported alongside the main one as reruns.
    pub fn reruns(&self) -> &[ReportEntry] {
        match self {
            Self::Success { .. } | Self::Skipped { .. } => &[],
            Self::Flaky { prior, .. } => prior,
            Self::Failure { retries, .. } => retries,
        }
    }

    /// Returns true if the method is reported as passing (including flaky passes).
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Flaky { .. })
    }
}
