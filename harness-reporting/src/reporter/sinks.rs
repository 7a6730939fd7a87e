// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The sinks a test run reports to.
//!
//! Each sink holds the settings it was constructed with. Report formatting belongs to the
//! consumers of these types.

use super::CapturedStream;
use crate::{
    errors::WriteOutputError,
    history::{ReportEntry, RerunDescription, RunHistoryRegistry},
};
use camino::{Utf8Path, Utf8PathBuf};
use std::{fs::OpenOptions, io::Write, sync::Arc};
use tracing::debug;

const OUTPUT_FILE_EXTENSION: &str = "-output.txt";

/// Builds `<prefix><test_set>[-<suffix>]<extension>` under `directory`.
fn report_file(
    directory: &Utf8Path,
    prefix: &str,
    test_set: &str,
    suffix: Option<&str>,
    extension: &str,
) -> Utf8PathBuf {
    let file_name = match suffix {
        Some(suffix) if !suffix.is_empty() => format!("{prefix}{test_set}-{suffix}{extension}"),
        _ => format!("{prefix}{test_set}{extension}"),
    };
    directory.join(file_name)
}

/// Reports results to the console.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    stdout: CapturedStream,
}

impl ConsoleSink {
    pub(super) fn new(stdout: CapturedStream) -> Self {
        Self { stdout }
    }

    /// Returns the stream this sink writes to.
    pub fn stream(&self) -> &CapturedStream {
        &self.stdout
    }

    /// Writes a line of the run summary.
    pub fn write_summary_line(&self, line: &str) -> Result<(), WriteOutputError> {
        let mut bytes = Vec::with_capacity(line.len() + 1);
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(b'\n');
        self.stdout
            .write_all(&bytes)
            .map_err(|error| WriteOutputError::Stream {
                stream: self.stdout.name(),
                error,
            })
    }
}

/// Writes a plain-text report per test set.
#[derive(Clone, Debug)]
pub struct FileSink {
    reports_directory: Utf8PathBuf,
    report_name_suffix: Option<String>,
}

impl FileSink {
    pub(super) fn new(reports_directory: Utf8PathBuf, report_name_suffix: Option<String>) -> Self {
        Self {
            reports_directory,
            report_name_suffix,
        }
    }

    /// Returns the directory reports are written to.
    pub fn reports_directory(&self) -> &Utf8Path {
        &self.reports_directory
    }

    /// Returns the suffix appended to report file names, if any.
    pub fn report_name_suffix(&self) -> Option<&str> {
        self.report_name_suffix.as_deref()
    }

    /// Returns the path of the report for `test_set`.
    pub fn report_path(&self, test_set: &str) -> Utf8PathBuf {
        report_file(
            &self.reports_directory,
            "",
            test_set,
            self.report_name_suffix(),
            ".txt",
        )
    }
}

/// Writes an XML report per test set, aggregating reruns from the shared run history.
#[derive(Clone, Debug)]
pub struct XmlSink {
    reports_directory: Utf8PathBuf,
    report_name_suffix: Option<String>,
    trim_stack_trace: bool,
    rerun_failing_tests_count: u32,
    run_history: Arc<RunHistoryRegistry>,
    xsd_schema_location: Option<String>,
}

impl XmlSink {
    pub(super) fn new(
        reports_directory: Utf8PathBuf,
        report_name_suffix: Option<String>,
        trim_stack_trace: bool,
        rerun_failing_tests_count: u32,
        run_history: Arc<RunHistoryRegistry>,
        xsd_schema_location: Option<String>,
    ) -> Self {
        Self {
            reports_directory,
            report_name_suffix,
            trim_stack_trace,
            rerun_failing_tests_count,
            run_history,
            xsd_schema_location,
        }
    }

    /// Returns the directory reports are written to.
    pub fn reports_directory(&self) -> &Utf8Path {
        &self.reports_directory
    }

    /// Returns the suffix appended to report file names, if any.
    pub fn report_name_suffix(&self) -> Option<&str> {
        self.report_name_suffix.as_deref()
    }

    /// Returns true if stack traces are trimmed to the test class.
    pub fn trim_stack_trace(&self) -> bool {
        self.trim_stack_trace
    }

    /// Returns the number of times a failing test is rerun.
    pub fn rerun_failing_tests_count(&self) -> u32 {
        self.rerun_failing_tests_count
    }

    /// Returns the shared run history.
    pub fn run_history(&self) -> &Arc<RunHistoryRegistry> {
        &self.run_history
    }

    /// Returns the XSD schema location to reference, if any.
    pub fn xsd_schema_location(&self) -> Option<&str> {
        self.xsd_schema_location.as_deref()
    }

    /// Returns the path of the report for `test_set`.
    pub fn report_path(&self, test_set: &str) -> Utf8PathBuf {
        report_file(
            &self.reports_directory,
            "TEST-",
            test_set,
            self.report_name_suffix(),
            ".xml",
        )
    }

    /// Classifies the attempts recorded for a test method.
    ///
    /// With reruns disabled, only the first attempt is considered.
    pub fn describe(&self, class_name: &str, method_name: &str) -> Option<RerunDescription> {
        let mut attempts = self.run_history.history_for(class_name, method_name);
        if self.rerun_failing_tests_count == 0 {
            attempts.truncate(1);
        }
        RerunDescription::new(attempts)
    }

    /// Returns the stack trace to report for `entry`, trimmed if configured.
    pub fn stack_trace_for<'a>(&self, entry: &'a ReportEntry) -> Option<&'a str> {
        if self.trim_stack_trace {
            entry.trimmed_stack_trace()
        } else {
            entry.stack_trace()
        }
    }
}

/// Which standard stream a piece of raw test output was written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputStreamKind {
    /// Standard output.
    Stdout,

    /// Standard error.
    Stderr,
}

/// Receives the raw output of test processes.
///
/// Every run has one of these: output either passes straight through to the captured streams or
/// is redirected to a file per test set.
#[derive(Clone, Debug)]
pub enum ConsoleOutputSink {
    /// Writes output to `<reports_directory>/<test_set>[-<suffix>]-output.txt`.
    File {
        /// The directory output files are written to.
        reports_directory: Utf8PathBuf,

        /// The suffix appended to output file names, if any.
        report_name_suffix: Option<String>,
    },

    /// Writes output to the captured standard streams.
    Direct {
        /// Captured standard output.
        stdout: CapturedStream,

        /// Captured standard error.
        stderr: CapturedStream,
    },
}

impl ConsoleOutputSink {
    /// Returns true if output is redirected to files.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Returns the file output for `test_set` is written to, if redirected.
    pub fn output_path(&self, test_set: &str) -> Option<Utf8PathBuf> {
        match self {
            Self::File {
                reports_directory,
                report_name_suffix,
            } => Some(report_file(
                reports_directory,
                "",
                test_set,
                report_name_suffix.as_deref(),
                OUTPUT_FILE_EXTENSION,
            )),
            Self::Direct { .. } => None,
        }
    }

    /// Writes a chunk of raw output produced by `test_set`.
    ///
    /// Stdout and stderr are interleaved in the same file when redirected.
    pub fn write_output(
        &self,
        test_set: &str,
        kind: OutputStreamKind,
        bytes: &[u8],
    ) -> Result<(), WriteOutputError> {
        match self {
            Self::File {
                reports_directory,
                report_name_suffix,
            } => {
                std::fs::create_dir_all(reports_directory).map_err(|error| {
                    WriteOutputError::Fs {
                        file: reports_directory.clone(),
                        error,
                    }
                })?;

                let path = report_file(
                    reports_directory,
                    "",
                    test_set,
                    report_name_suffix.as_deref(),
                    OUTPUT_FILE_EXTENSION,
                );
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .map_err(|error| WriteOutputError::Fs {
                        file: path.clone(),
                        error,
                    })?;
                file.write_all(bytes)
                    .map_err(|error| WriteOutputError::Fs { file: path, error })
            }
            Self::Direct { stdout, stderr } => {
                let stream = match kind {
                    OutputStreamKind::Stdout => stdout,
                    OutputStreamKind::Stderr => stderr,
                };
                stream
                    .write_all(bytes)
                    .map_err(|error| WriteOutputError::Stream {
                        stream: stream.name(),
                        error,
                    })
            }
        }
    }
}

/// Persists run statistics, used to order later runs.
#[derive(Clone, Debug)]
pub struct StatisticsSink {
    path: Utf8PathBuf,
}

impl StatisticsSink {
    pub(super) fn new(path: Utf8PathBuf) -> Self {
        debug!("run statistics will be stored at `{path}`");
        Self { path }
    }

    /// Returns the statistics file path.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}
