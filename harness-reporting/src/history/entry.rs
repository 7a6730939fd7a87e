// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{fmt, time::Duration};

/// The outcome of a single attempt at running a test method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum ReportEntryStatus {
    /// The test passed.
    Success,

    /// An assertion in the test failed.
    Failure,

    /// The test raised an unexpected error.
    Error,

    /// The test was skipped.
    Skipped,
}

impl ReportEntryStatus {
    /// Returns true if the attempt failed or errored.
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failure | Self::Error)
    }
}

impl fmt::Display for ReportEntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
            Self::Error => write!(f, "error"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// A report entry for one attempt at running a test method.
///
/// Produced by the test executors and recorded in the
/// [`RunHistoryRegistry`](super::RunHistoryRegistry), one per attempt including reruns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    class_name: String,
    method_name: String,
    status: ReportEntryStatus,
    elapsed: Option<Duration>,
    message: Option<String>,
    stack_trace: Option<String>,
}

impl ReportEntry {
    /// Creates a new report entry.
    pub fn new(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        status: ReportEntryStatus,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
            status,
            elapsed: None,
            message: None,
            stack_trace: None,
        }
    }

    /// Sets the time taken by the attempt.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    /// Sets the failure or skip message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the stack trace captured for a failure.
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// Returns the fully-qualified name of the test class.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the test method name.
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Returns the outcome of the attempt.
    pub fn status(&self) -> ReportEntryStatus {
        self.status
    }

    /// Returns true if the attempt passed.
    pub fn is_success(&self) -> bool {
        self.status == ReportEntryStatus::Success
    }

    /// Returns the time taken by the attempt, if known.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Returns the failure or skip message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the full stack trace, if any.
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    /// Returns the stack trace cut after the last frame that mentions this entry's class.
    ///
    /// Frames below the test class (the harness and runtime internals) are dropped. If no frame
    /// mentions the class, the full trace is returned.
    pub fn trimmed_stack_trace(&self) -> Option<&str> {
        let trace = self.stack_trace.as_deref()?;

        let mut end = None;
        let mut offset = 0;
        for line in trace.split_inclusive('\n') {
            offset += line.len();
            if line.contains(self.class_name.as_str()) {
                end = Some(offset);
            }
        }

        match end {
            Some(end) => Some(trace[..end].trim_end_matches(['\r', '\n'])),
            None => Some(trace),
        }
    }
}
