// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use dashmap::DashMap;
use std::{collections::BTreeMap, sync::Arc};

/// System properties to forward to forked test VMs.
///
/// This is a handle: clones share the same underlying properties. It may be mutated concurrently
/// by the harness and by sinks without further synchronization.
#[derive(Clone, Debug, Default)]
pub struct TestVmProperties {
    inner: Arc<DashMap<String, String>>,
}

impl TestVmProperties {
    /// Creates an empty property bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the previous value if there was one.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(key.into(), value.into())
    }

    /// Returns the value of a property.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|value| value.value().clone())
    }

    /// Removes a property, returning its value if it was set.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.inner.remove(key).map(|(_, value)| value)
    }

    /// Returns the number of properties set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a sorted copy of the current properties.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.inner
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}
