// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for reporter provisioning.
//!
//! The main type here is [`ReportConfiguration`], constructed via a
//! [`ReportConfigurationBuilder`].

mod imp;
mod properties;
mod report_format;
#[cfg(test)]
pub(crate) mod test_helpers;

pub use imp::*;
pub use properties::*;
pub use report_format::*;
