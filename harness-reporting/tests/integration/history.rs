// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::fixtures::{builder, test_init};
use camino::Utf8Path;
use harness_reporting::history::{ReportEntry, ReportEntryStatus, RerunDescription};
use pretty_assertions::assert_eq;
use std::{thread, time::Duration};

const CLASS: &str = "com.example.FlakyTest";
const THREADS: u64 = 8;
const ATTEMPTS: u64 = 1000;

#[test]
fn concurrent_reporters_share_history() {
    test_init();

    let config = builder(Utf8Path::new("target/surefire-reports"))
        .set_rerun_failing_tests_count(2)
        .build()
        .expect("configuration is valid");

    thread::scope(|scope| {
        for thread_id in 0..THREADS {
            let xml = config.xml_sink().expect("xml is enabled");
            scope.spawn(move || {
                for attempt in 0..ATTEMPTS {
                    let id = thread_id * ATTEMPTS + attempt;
                    let entry = ReportEntry::new(CLASS, "shared", ReportEntryStatus::Failure)
                        .with_elapsed(Duration::from_nanos(id));
                    xml.run_history().record(CLASS, "shared", entry);
                }
            });
        }
    });

    let history = config.run_history().history_for(CLASS, "shared");
    assert_eq!(history.len() as u64, THREADS * ATTEMPTS);

    let mut ids: Vec<u64> = history
        .iter()
        .map(|entry| {
            let elapsed = entry.elapsed().expect("elapsed is set");
            u64::try_from(elapsed.as_nanos()).expect("fits in u64")
        })
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len() as u64, THREADS * ATTEMPTS, "no duplicates");
}

#[test]
fn xml_sink_classifies_reruns() {
    test_init();

    let config = builder(Utf8Path::new("target/surefire-reports"))
        .set_rerun_failing_tests_count(2)
        .set_trim_stack_trace(true)
        .build()
        .expect("configuration is valid");
    let xml = config.xml_sink().expect("xml is enabled");
    let history = config.run_history();

    let trace = "java.lang.AssertionError: boom\n\
                 \tat com.example.FlakyTest.flaky(FlakyTest.java:12)\n\
                 \tat org.junit.Runner.run(Runner.java:99)\n";
    history.record(
        CLASS,
        "flaky",
        ReportEntry::new(CLASS, "flaky", ReportEntryStatus::Failure).with_stack_trace(trace),
    );
    history.record(
        CLASS,
        "flaky",
        ReportEntry::new(CLASS, "flaky", ReportEntryStatus::Success),
    );

    let description = xml.describe(CLASS, "flaky").expect("attempts were recorded");
    let RerunDescription::Flaky { last, prior } = &description else {
        panic!("expected a flaky description, found {description:?}");
    };
    assert!(last.is_success());
    assert_eq!(prior.len(), 1);
    assert_eq!(
        xml.stack_trace_for(&prior[0]),
        Some(
            "java.lang.AssertionError: boom\n\
             \tat com.example.FlakyTest.flaky(FlakyTest.java:12)"
        ),
    );

    assert_eq!(xml.describe(CLASS, "unknown"), None);
}
