// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Selection and construction of the sinks a test run reports to.
//!
//! The sink factory methods live on [`ReportConfiguration`](crate::config::ReportConfiguration);
//! [`ReportConfiguration::instantiate_sinks`](crate::config::ReportConfiguration::instantiate_sinks)
//! builds all of them at once into a [`ReporterSinks`].

mod imp;
pub mod selector;
mod sinks;
mod stream;

pub use imp::*;
pub use sinks::*;
pub use stream::*;
