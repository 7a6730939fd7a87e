// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced while provisioning reporters.

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error that occurred while building a
/// [`ReportConfiguration`](crate::config::ReportConfiguration).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportConfigError {
    /// No reports directory was provided.
    #[error("a reports directory is required to build a report configuration")]
    MissingReportsDirectory,

    /// The rerun count for failing tests was negative.
    #[error("rerun-failing-tests-count must be non-negative (got {count})")]
    NegativeRerunCount {
        /// The count that was provided.
        count: i32,
    },
}

/// An error that occurred while writing raw test output to a
/// [`ConsoleOutputSink`](crate::reporter::ConsoleOutputSink).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteOutputError {
    /// An error occurred while writing to a captured standard stream.
    #[error("error writing to captured {stream}")]
    Stream {
        /// The stream that was being written to.
        stream: &'static str,

        /// The underlying error.
        #[source]
        error: std::io::Error,
    },

    /// An error occurred while writing to a file.
    #[error("error writing test output to `{file}`")]
    Fs {
        /// The file being written to.
        file: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: std::io::Error,
    },
}
