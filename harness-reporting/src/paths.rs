// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Locations of files shared across executions of a build.

use camino::{Utf8Path, Utf8PathBuf};

/// Prefix of the statistics file name. The configuration hash follows it.
pub const STATISTICS_FILE_PREFIX: &str = ".surefire-";

/// Returns the path of the run statistics file for a configuration.
///
/// The reports directory is expected to sit two levels below a root shared by every module and
/// execution of the build (e.g. `<module>/target/surefire-reports`). This depth is a convention
/// of the layer that computes the reports directory. The configuration hash keeps unrelated
/// configurations from sharing a file.
///
/// If the reports directory has fewer than two ancestors, the missing ancestor is treated as the
/// empty relative path, so both `target` and `./target` resolve to `.surefire-<hash>`.
///
/// This performs no I/O.
pub fn statistics_file_path(
    reports_directory: &Utf8Path,
    configuration_hash: &str,
) -> Utf8PathBuf {
    let root = reports_directory
        .parent()
        .and_then(Utf8Path::parent)
        .unwrap_or(Utf8Path::new(""));
    root.join(format!("{STATISTICS_FILE_PREFIX}{configuration_hash}"))
}
