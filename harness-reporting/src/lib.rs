// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Reporter provisioning for a forked test harness.
//!
//! A [`ReportConfiguration`](config::ReportConfiguration) is built once per test run. For each
//! forked execution, the harness asks it which sinks (console, plain-text file, XML, raw output,
//! statistics) should receive results, and gets back either a constructed sink or `None`.
//!
//! The configuration also owns a [`RunHistoryRegistry`](history::RunHistoryRegistry), shared by
//! every producer and sink, which accumulates the attempts made for each test method so that
//! reruns of failing tests can be aggregated.

pub mod config;
pub mod errors;
pub mod history;
pub mod paths;
pub mod reporter;
