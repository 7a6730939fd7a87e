// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{
    fmt,
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

/// A standard output or error stream, captured once when the report configuration is built.
///
/// Console sinks write through this handle rather than looking up the process's streams, so
/// output still reaches the original destination if the harness later redirects them.
///
/// Clones share the same destination. A panic while writing leaves the destination usable, so
/// lock poisoning is ignored.
#[derive(Clone)]
pub struct CapturedStream {
    name: &'static str,
    inner: StreamInner,
}

#[derive(Clone)]
enum StreamInner {
    Writer(Arc<Mutex<Box<dyn Write + Send>>>),
    Buffer(Arc<Mutex<Vec<u8>>>),
}

impl CapturedStream {
    /// Captures the process's standard output.
    pub fn stdout() -> Self {
        Self::from_writer("stdout", io::stdout())
    }

    /// Captures the process's standard error.
    pub fn stderr() -> Self {
        Self::from_writer("stderr", io::stderr())
    }

    /// Wraps an arbitrary writer.
    pub fn from_writer(name: &'static str, writer: impl Write + Send + 'static) -> Self {
        Self {
            name,
            inner: StreamInner::Writer(Arc::new(Mutex::new(Box::new(writer)))),
        }
    }

    /// Creates an in-memory stream, typically for tests.
    pub fn buffer(name: &'static str) -> Self {
        Self {
            name,
            inner: StreamInner::Buffer(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Returns the name this stream was captured under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Writes all of `bytes` and flushes.
    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        match &self.inner {
            StreamInner::Writer(writer) => {
                let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
                writer.write_all(bytes)?;
                writer.flush()
            }
            StreamInner::Buffer(buffer) => {
                buffer
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .extend_from_slice(bytes);
                Ok(())
            }
        }
    }

    /// Returns everything written so far, for in-memory streams.
    pub fn contents(&self) -> Option<Vec<u8>> {
        match &self.inner {
            StreamInner::Writer(_) => None,
            StreamInner::Buffer(buffer) => Some(
                buffer
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone(),
            ),
        }
    }

    /// Returns true if both handles write to the same captured destination.
    pub fn same_destination(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (StreamInner::Writer(a), StreamInner::Writer(b)) => Arc::ptr_eq(a, b),
            (StreamInner::Buffer(a), StreamInner::Buffer(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for CapturedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.inner {
            StreamInner::Writer(_) => "writer",
            StreamInner::Buffer(_) => "buffer",
        };
        f.debug_struct("CapturedStream")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}
