// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{ReportFormat, TestVmProperties};
use crate::{errors::ReportConfigError, history::RunHistoryRegistry, reporter::CapturedStream};
use camino::{Utf8Path, Utf8PathBuf};
use std::sync::Arc;

/// All the parameters used to decide which reporters a test run gets, and to construct them.
///
/// Built once per test run with a [`ReportConfigurationBuilder`]. The scalar settings are fixed
/// after construction. The [test VM properties](Self::test_vm_system_properties) and the
/// [run history](Self::run_history) are shared, mutable state that may be accessed concurrently.
///
/// The sink factory methods (`console_sink`, `xml_sink`, and so on) are defined in
/// [`crate::reporter`].
#[derive(Debug)]
pub struct ReportConfiguration {
    use_file: bool,
    print_summary: bool,
    report_format: ReportFormat,
    redirect_output_to_file: bool,
    disable_xml_report: bool,
    reports_directory: Utf8PathBuf,
    trim_stack_trace: bool,
    report_name_suffix: Option<String>,
    configuration_hash: String,
    requires_run_history: bool,
    rerun_failing_tests_count: u32,
    xsd_schema_location: Option<String>,
    captured_stdout: CapturedStream,
    captured_stderr: CapturedStream,
    test_vm_system_properties: TestVmProperties,
    run_history: Arc<RunHistoryRegistry>,
}

impl ReportConfiguration {
    /// Returns true if per-test-set reports are written to files.
    pub fn use_file(&self) -> bool {
        self.use_file
    }

    /// Returns true if a summary is printed to the console when file output is enabled.
    pub fn print_summary(&self) -> bool {
        self.print_summary
    }

    /// Returns the console and file report format.
    pub fn report_format(&self) -> &ReportFormat {
        &self.report_format
    }

    /// Returns true if raw test output is redirected to files rather than the console.
    pub fn redirect_output_to_file(&self) -> bool {
        self.redirect_output_to_file
    }

    /// Returns true if XML reports are disabled.
    pub fn disable_xml_report(&self) -> bool {
        self.disable_xml_report
    }

    /// Returns the directory reports are written to.
    pub fn reports_directory(&self) -> &Utf8Path {
        &self.reports_directory
    }

    /// Returns true if stack traces are trimmed to the test class.
    pub fn trim_stack_trace(&self) -> bool {
        self.trim_stack_trace
    }

    /// Returns the suffix appended to report file names, if any.
    pub fn report_name_suffix(&self) -> Option<&str> {
        self.report_name_suffix.as_deref()
    }

    /// Returns the hash identifying this build configuration.
    pub fn configuration_hash(&self) -> &str {
        &self.configuration_hash
    }

    /// Returns true if run statistics are persisted across runs.
    pub fn requires_run_history(&self) -> bool {
        self.requires_run_history
    }

    /// Returns the number of times a failing test is rerun.
    pub fn rerun_failing_tests_count(&self) -> u32 {
        self.rerun_failing_tests_count
    }

    /// Returns the XSD schema location written into XML reports, if any.
    pub fn xsd_schema_location(&self) -> Option<&str> {
        self.xsd_schema_location.as_deref()
    }

    /// Returns the standard output captured when this configuration was built.
    pub fn captured_stdout(&self) -> &CapturedStream {
        &self.captured_stdout
    }

    /// Returns the standard error captured when this configuration was built.
    pub fn captured_stderr(&self) -> &CapturedStream {
        &self.captured_stderr
    }

    /// Returns the properties forwarded to forked test VMs.
    ///
    /// The returned handle shares state with this configuration.
    pub fn test_vm_system_properties(&self) -> &TestVmProperties {
        &self.test_vm_system_properties
    }

    /// Returns the run history shared by all reporters built from this configuration.
    pub fn run_history(&self) -> &Arc<RunHistoryRegistry> {
        &self.run_history
    }
}

/// Builder for a [`ReportConfiguration`].
///
/// Settings left unset are false or empty, and the report format is an unrecognized one. The
/// captured streams default to the process's standard output and error at the time
/// [`build`](Self::build) is called.
#[derive(Debug, Default)]
pub struct ReportConfigurationBuilder {
    use_file: bool,
    print_summary: bool,
    report_format: Option<ReportFormat>,
    redirect_output_to_file: bool,
    disable_xml_report: bool,
    reports_directory: Option<Utf8PathBuf>,
    trim_stack_trace: bool,
    report_name_suffix: Option<String>,
    configuration_hash: String,
    requires_run_history: bool,
    rerun_failing_tests_count: i32,
    xsd_schema_location: Option<String>,
    captured_stdout: Option<CapturedStream>,
    captured_stderr: Option<CapturedStream>,
}

impl ReportConfigurationBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether per-test-set reports are written to files.
    pub fn set_use_file(&mut self, use_file: bool) -> &mut Self {
        self.use_file = use_file;
        self
    }

    /// Sets whether a summary is printed to the console when file output is enabled.
    pub fn set_print_summary(&mut self, print_summary: bool) -> &mut Self {
        self.print_summary = print_summary;
        self
    }

    /// Sets the console and file report format.
    pub fn set_report_format(&mut self, report_format: ReportFormat) -> &mut Self {
        self.report_format = Some(report_format);
        self
    }

    /// Sets whether raw test output is redirected to files.
    pub fn set_redirect_output_to_file(&mut self, redirect_output_to_file: bool) -> &mut Self {
        self.redirect_output_to_file = redirect_output_to_file;
        self
    }

    /// Sets whether XML reports are disabled.
    pub fn set_disable_xml_report(&mut self, disable_xml_report: bool) -> &mut Self {
        self.disable_xml_report = disable_xml_report;
        self
    }

    /// Sets the directory reports are written to. Required.
    pub fn set_reports_directory(&mut self, reports_directory: impl Into<Utf8PathBuf>) -> &mut Self {
        self.reports_directory = Some(reports_directory.into());
        self
    }

    /// Sets whether stack traces are trimmed to the test class.
    pub fn set_trim_stack_trace(&mut self, trim_stack_trace: bool) -> &mut Self {
        self.trim_stack_trace = trim_stack_trace;
        self
    }

    /// Sets the suffix appended to report file names.
    pub fn set_report_name_suffix(&mut self, suffix: Option<&str>) -> &mut Self {
        self.report_name_suffix = suffix.map(str::to_owned);
        self
    }

    /// Sets the hash identifying this build configuration.
    pub fn set_configuration_hash(&mut self, configuration_hash: impl Into<String>) -> &mut Self {
        self.configuration_hash = configuration_hash.into();
        self
    }

    /// Sets whether run statistics are persisted across runs.
    pub fn set_requires_run_history(&mut self, requires_run_history: bool) -> &mut Self {
        self.requires_run_history = requires_run_history;
        self
    }

    /// Sets the number of times a failing test is rerun. Must not be negative.
    pub fn set_rerun_failing_tests_count(&mut self, count: i32) -> &mut Self {
        self.rerun_failing_tests_count = count;
        self
    }

    /// Sets the XSD schema location written into XML reports.
    pub fn set_xsd_schema_location(&mut self, location: Option<&str>) -> &mut Self {
        self.xsd_schema_location = location.map(str::to_owned);
        self
    }

    /// Sets the streams console reporters write to, instead of the process's standard streams.
    pub fn set_captured_streams(
        &mut self,
        stdout: CapturedStream,
        stderr: CapturedStream,
    ) -> &mut Self {
        self.captured_stdout = Some(stdout);
        self.captured_stderr = Some(stderr);
        self
    }

    /// Builds the configuration, validating required settings.
    pub fn build(&self) -> Result<ReportConfiguration, ReportConfigError> {
        let reports_directory = self
            .reports_directory
            .clone()
            .ok_or(ReportConfigError::MissingReportsDirectory)?;
        let rerun_failing_tests_count = u32::try_from(self.rerun_failing_tests_count).map_err(
            |_| ReportConfigError::NegativeRerunCount {
                count: self.rerun_failing_tests_count,
            },
        )?;

        Ok(ReportConfiguration {
            use_file: self.use_file,
            print_summary: self.print_summary,
            report_format: self
                .report_format
                .clone()
                .unwrap_or_else(|| ReportFormat::Other(String::new())),
            redirect_output_to_file: self.redirect_output_to_file,
            disable_xml_report: self.disable_xml_report,
            reports_directory,
            trim_stack_trace: self.trim_stack_trace,
            report_name_suffix: self.report_name_suffix.clone(),
            configuration_hash: self.configuration_hash.clone(),
            requires_run_history: self.requires_run_history,
            rerun_failing_tests_count,
            xsd_schema_location: self.xsd_schema_location.clone(),
            captured_stdout: self
                .captured_stdout
                .clone()
                .unwrap_or_else(CapturedStream::stdout),
            captured_stderr: self
                .captured_stderr
                .clone()
                .unwrap_or_else(CapturedStream::stderr),
            test_vm_system_properties: TestVmProperties::new(),
            run_history: Arc::new(RunHistoryRegistry::new()),
        })
    }
}
