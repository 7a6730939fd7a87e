// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::fixtures::{builder, test_init};
use camino::Utf8Path;
use camino_tempfile::Utf8TempDir;
use harness_reporting::{
    config::{ReportConfigurationBuilder, ReportFormat},
    errors::ReportConfigError,
    reporter::{ConsoleOutputSink, OutputStreamKind},
};
use pretty_assertions::assert_eq;

#[test]
fn plain_file_report_without_redirect() {
    test_init();

    let config = builder(Utf8Path::new("module/target/surefire-reports"))
        .build()
        .expect("configuration is valid");
    let sinks = config.instantiate_sinks();

    assert!(sinks.console.is_some());
    assert!(sinks.file.is_some());
    assert!(sinks.xml.is_some());
    assert!(sinks.statistics.is_none());
    assert!(matches!(
        sinks.console_output,
        ConsoleOutputSink::Direct { .. }
    ));

    sinks
        .console_output
        .write_output("com.example.FooTest", OutputStreamKind::Stderr, b"oops\n")
        .expect("buffer write succeeds");
    assert_eq!(config.captured_stderr().contents(), Some(b"oops\n".to_vec()));
    assert_eq!(config.captured_stdout().contents(), Some(Vec::new()));

    let console = sinks.console.expect("console is present");
    console
        .write_summary_line("Tests run: 1, Failures: 0")
        .expect("buffer write succeeds");
    assert_eq!(
        config.captured_stdout().contents(),
        Some(b"Tests run: 1, Failures: 0\n".to_vec()),
    );
}

#[test]
fn redirected_output_with_other_format() {
    test_init();

    let dir = Utf8TempDir::new().expect("created temp dir");
    let reports_directory = dir.path().join("target").join("surefire-reports");
    let config = builder(&reports_directory)
        .set_use_file(false)
        .set_redirect_output_to_file(true)
        .set_report_format(ReportFormat::Other("xml".to_owned()))
        .set_report_name_suffix(Some("jdk17"))
        .build()
        .expect("configuration is valid");
    let sinks = config.instantiate_sinks();

    assert!(sinks.console.is_some(), "redirect flag enables the console");
    assert!(sinks.file.is_none());
    assert!(sinks.console_output.is_file());

    let output = &sinks.console_output;
    output
        .write_output("com.example.FooTest", OutputStreamKind::Stdout, b"first\n")
        .expect("file write succeeds");
    output
        .write_output("com.example.FooTest", OutputStreamKind::Stderr, b"second\n")
        .expect("file write succeeds");

    let path = output
        .output_path("com.example.FooTest")
        .expect("output is redirected");
    assert_eq!(
        path,
        reports_directory.join("com.example.FooTest-jdk17-output.txt"),
    );
    let contents = std::fs::read_to_string(&path).expect("output file exists");
    assert_eq!(contents, "first\nsecond\n");
    assert_eq!(config.captured_stdout().contents(), Some(Vec::new()));
}

#[test]
fn statistics_file_sits_beside_module() {
    test_init();

    let config = builder(Utf8Path::new("module/target/surefire-reports"))
        .set_requires_run_history(true)
        .build()
        .expect("configuration is valid");
    let statistics = config
        .instantiate_sinks()
        .statistics
        .expect("run history is required");

    assert_eq!(statistics.path().as_str(), "module/.surefire-CONFIGHASH");
    assert_eq!(statistics.path(), config.statistics_file().as_path());
}

#[test]
fn invalid_configurations_are_rejected() {
    test_init();

    let err = ReportConfigurationBuilder::new()
        .build()
        .expect_err("reports directory is missing");
    assert_eq!(err, ReportConfigError::MissingReportsDirectory);

    let err = builder(Utf8Path::new("target/surefire-reports"))
        .set_rerun_failing_tests_count(-2)
        .build()
        .expect_err("rerun count is negative");
    assert_eq!(err, ReportConfigError::NegativeRerunCount { count: -2 });
}
