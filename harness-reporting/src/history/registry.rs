// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{ReportEntry, RerunDescription};
use dashmap::DashMap;
use std::collections::HashMap;

/// The attempts made for each test method, keyed by class and method name.
///
/// One registry is shared by every producer and sink that uses a given
/// [`ReportConfiguration`](crate::config::ReportConfiguration). It only grows: entries are
/// appended and never removed or mutated.
///
/// Storage is sharded by class name. Each append holds the lock for its class's shard for the
/// duration of the push, so concurrent [`record`](Self::record) calls on the same key are
/// serialized and none are lost.
#[derive(Debug, Default)]
pub struct RunHistoryRegistry {
    classes: DashMap<String, HashMap<String, Vec<ReportEntry>>>,
}

impl RunHistoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attempt to the history of `class_name::method_name`.
    pub fn record(&self, class_name: &str, method_name: &str, entry: ReportEntry) {
        // Avoid allocating the class key when the class is already known.
        let mut methods = match self.classes.get_mut(class_name) {
            Some(methods) => methods,
            None => self.classes.entry(class_name.to_owned()).or_default(),
        };
        match methods.get_mut(method_name) {
            Some(attempts) => attempts.push(entry),
            None => {
                methods.insert(method_name.to_owned(), vec![entry]);
            }
        }
    }

    /// Returns the attempts recorded so far for `class_name::method_name`, oldest first.
    ///
    /// The returned vector is a snapshot. It is empty if nothing was recorded for the method.
    pub fn history_for(&self, class_name: &str, method_name: &str) -> Vec<ReportEntry> {
        self.classes
            .get(class_name)
            .and_then(|methods| methods.get(method_name).cloned())
            .unwrap_or_default()
    }

    /// Returns the number of attempts recorded for `class_name::method_name`.
    pub fn attempt_count(&self, class_name: &str, method_name: &str) -> usize {
        self.classes
            .get(class_name)
            .and_then(|methods| methods.get(method_name).map(Vec::len))
            .unwrap_or(0)
    }

    /// Returns the names of all classes with recorded attempts, sorted.
    pub fn class_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .classes
            .iter()
            .map(|class| class.key().clone())
            .collect();
        names.sort_unstable();
        names
    }

    /// Returns the names of all methods of `class_name` with recorded attempts, sorted.
    pub fn method_names(&self, class_name: &str) -> Vec<String> {
        let mut names: Vec<_> = self
            .classes
            .get(class_name)
            .map(|methods| methods.keys().cloned().collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Classifies the attempts recorded for `class_name::method_name`.
    ///
    /// Returns `None` if nothing was recorded for the method.
    pub fn describe(&self, class_name: &str, method_name: &str) -> Option<RerunDescription> {
        RerunDescription::new(self.history_for(class_name, method_name))
    }
}
