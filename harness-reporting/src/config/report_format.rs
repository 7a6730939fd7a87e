// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{convert::Infallible, fmt, str::FromStr};

/// The format of per-test-set console and file reports.
///
/// Only `brief` and `plain` are understood by the console and file sinks. Any other value is kept
/// as-is so that it can be passed through to other reporters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    /// One line per test set, plus details for failures.
    Brief,

    /// One line per test.
    Plain,

    /// A format this layer doesn't know about.
    Other(String),
}

impl ReportFormat {
    /// The build-tool value for [`Self::Brief`].
    pub const BRIEF: &'static str = "brief";

    /// The build-tool value for [`Self::Plain`].
    pub const PLAIN: &'static str = "plain";

    /// Returns true if this is [`Self::Brief`] or [`Self::Plain`].
    pub fn is_brief_or_plain(&self) -> bool {
        matches!(self, Self::Brief | Self::Plain)
    }

    /// Returns the build-tool value for this format.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Brief => Self::BRIEF,
            Self::Plain => Self::PLAIN,
            Self::Other(other) => other,
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = if s.eq_ignore_ascii_case(Self::BRIEF) {
            Self::Brief
        } else if s.eq_ignore_ascii_case(Self::PLAIN) {
            Self::Plain
        } else {
            Self::Other(s.to_owned())
        };
        Ok(format)
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
