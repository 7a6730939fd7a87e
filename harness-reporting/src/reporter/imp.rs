// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constructs the sinks a test run reports to.
//!
//! The main entry point is [`ReportConfiguration::instantiate_sinks`].

use super::{
    ConsoleOutputSink, ConsoleSink, FileSink, StatisticsSink, XmlSink,
    selector::{should_use_console, should_use_file},
};
use crate::{config::ReportConfiguration, paths::statistics_file_path};
use camino::Utf8PathBuf;
use tracing::debug;

/// The sinks constructed for one forked test run.
///
/// A `None` sink is disabled for this run and must not be invoked. That is not an error.
#[derive(Clone, Debug)]
pub struct ReporterSinks {
    /// Reports results to the console.
    pub console: Option<ConsoleSink>,

    /// Writes plain-text reports.
    pub file: Option<FileSink>,

    /// Writes XML reports.
    pub xml: Option<XmlSink>,

    /// Receives raw test output. Always present.
    pub console_output: ConsoleOutputSink,

    /// Persists run statistics.
    pub statistics: Option<StatisticsSink>,
}

impl ReportConfiguration {
    /// Returns the console sink, if results should be reported to the console.
    pub fn console_sink(&self) -> Option<ConsoleSink> {
        should_use_console(
            self.use_file(),
            self.print_summary(),
            self.redirect_output_to_file(),
            self.report_format(),
        )
        .then(|| ConsoleSink::new(self.captured_stdout().clone()))
    }

    /// Returns the plain-text file sink, if file output is enabled in a brief or plain format.
    pub fn file_sink(&self) -> Option<FileSink> {
        should_use_file(self.use_file(), self.report_format()).then(|| {
            FileSink::new(
                self.reports_directory().to_owned(),
                self.report_name_suffix().map(str::to_owned),
            )
        })
    }

    /// Returns the XML sink, unless XML reports are disabled.
    ///
    /// The sink shares this configuration's run history.
    pub fn xml_sink(&self) -> Option<XmlSink> {
        (!self.disable_xml_report()).then(|| {
            XmlSink::new(
                self.reports_directory().to_owned(),
                self.report_name_suffix().map(str::to_owned),
                self.trim_stack_trace(),
                self.rerun_failing_tests_count(),
                self.run_history().clone(),
                self.xsd_schema_location().map(str::to_owned),
            )
        })
    }

    /// Returns the sink for raw test output.
    ///
    /// Output is written to files under the reports directory if it is redirected, and to the
    /// captured standard streams otherwise.
    pub fn console_output_sink(&self) -> ConsoleOutputSink {
        if self.redirect_output_to_file() {
            ConsoleOutputSink::File {
                reports_directory: self.reports_directory().to_owned(),
                report_name_suffix: self.report_name_suffix().map(str::to_owned),
            }
        } else {
            ConsoleOutputSink::Direct {
                stdout: self.captured_stdout().clone(),
                stderr: self.captured_stderr().clone(),
            }
        }
    }

    /// Returns the statistics sink, if run history is persisted.
    pub fn statistics_sink(&self) -> Option<StatisticsSink> {
        self.requires_run_history()
            .then(|| StatisticsSink::new(self.statistics_file()))
    }

    /// Returns the path of the run statistics file for this configuration.
    pub fn statistics_file(&self) -> Utf8PathBuf {
        statistics_file_path(self.reports_directory(), self.configuration_hash())
    }

    /// Constructs every sink for one forked test run.
    pub fn instantiate_sinks(&self) -> ReporterSinks {
        let sinks = ReporterSinks {
            console: self.console_sink(),
            file: self.file_sink(),
            xml: self.xml_sink(),
            console_output: self.console_output_sink(),
            statistics: self.statistics_sink(),
        };

        debug!(
            console = sinks.console.is_some(),
            file = sinks.file.is_some(),
            xml = sinks.xml.is_some(),
            redirect_output = sinks.console_output.is_file(),
            statistics = sinks.statistics.is_some(),
            report_format = %self.report_format(),
            "instantiated sinks for reports directory `{}`",
            self.reports_directory(),
        );

        sinks
    }
}
