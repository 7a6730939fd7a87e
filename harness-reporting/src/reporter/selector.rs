// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decisions about which sinks a test run gets. Nothing here performs I/O.

use crate::config::ReportFormat;

/// Returns true if `format` is understood by the console and file sinks.
pub fn is_brief_or_plain(format: &ReportFormat) -> bool {
    format.is_brief_or_plain()
}

/// Returns true if results should be reported to the console.
///
/// With file output enabled, the console only carries a summary, and only if one was requested.
/// Without file output, the console is the main channel: it is used if output is redirected (to
/// announce where it went) or if the format is one the console sink understands.
pub fn should_use_console(
    use_file: bool,
    print_summary: bool,
    redirect_output_to_file: bool,
    format: &ReportFormat,
) -> bool {
    if use_file {
        print_summary
    } else {
        redirect_output_to_file || is_brief_or_plain(format)
    }
}

/// Returns true if per-test-set reports should be written to plain-text files.
pub fn should_use_file(use_file: bool, format: &ReportFormat) -> bool {
    use_file && is_brief_or_plain(format)
}
