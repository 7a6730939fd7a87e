// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8Path;
use harness_reporting::{
    config::{ReportConfigurationBuilder, ReportFormat},
    reporter::CapturedStream,
};
use std::sync::Once;

pub(crate) fn test_init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Ignore the error if another subscriber is already installed.
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// A builder with buffered streams and every flag in its most common position.
pub(crate) fn builder(reports_directory: &Utf8Path) -> ReportConfigurationBuilder {
    let mut builder = ReportConfigurationBuilder::new();
    builder
        .set_use_file(true)
        .set_print_summary(true)
        .set_report_format(ReportFormat::Plain)
        .set_redirect_output_to_file(false)
        .set_disable_xml_report(false)
        .set_reports_directory(reports_directory)
        .set_configuration_hash("CONFIGHASH")
        .set_requires_run_history(false)
        .set_rerun_failing_tests_count(0)
        .set_captured_streams(
            CapturedStream::buffer("stdout"),
            CapturedStream::buffer("stderr"),
        );
    builder
}
