// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preset configurations used to seed tests.

use super::{ReportConfiguration, ReportConfigurationBuilder, ReportFormat};
use crate::reporter::CapturedStream;

/// Plain format, file output and summary on, XML enabled, no reruns.
pub(crate) fn default_value() -> ReportConfiguration {
    preset("TESTHASH", false)
}

/// Like [`default_value`], but with XML reports disabled.
pub(crate) fn default_no_xml() -> ReportConfiguration {
    preset("TESTHASHxXML", true)
}

fn preset(configuration_hash: &str, disable_xml_report: bool) -> ReportConfiguration {
    preset_builder(configuration_hash, disable_xml_report)
        .build()
        .expect("preset configuration is valid")
}

/// Returns the builder behind the presets, for tests that vary one setting.
pub(crate) fn preset_builder(
    configuration_hash: &str,
    disable_xml_report: bool,
) -> ReportConfigurationBuilder {
    let mut builder = ReportConfigurationBuilder::new();
    builder
        .set_use_file(true)
        .set_print_summary(true)
        .set_report_format(ReportFormat::Plain)
        .set_redirect_output_to_file(false)
        .set_disable_xml_report(disable_xml_report)
        .set_reports_directory("./target")
        .set_trim_stack_trace(false)
        .set_report_name_suffix(None)
        .set_configuration_hash(configuration_hash)
        .set_requires_run_history(false)
        .set_rerun_failing_tests_count(0)
        .set_xsd_schema_location(None)
        .set_captured_streams(
            CapturedStream::buffer("stdout"),
            CapturedStream::buffer("stderr"),
        );
    builder
}
