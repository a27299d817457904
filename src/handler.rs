//! The log handler: renders entries and serializes writes to a shared sink.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::entry::Entry;
use crate::formatter::{self, Layout, StyleMode};

/// Renders [`Entry`] values onto one output sink.
///
/// `handle` takes `&self`, so a single handler can be shared across threads
/// (e.g. in an `Arc`). Every line is written while holding the sink's lock,
/// so concurrent calls never interleave bytes.
#[derive(Debug)]
pub struct Handler<W> {
    sink: Mutex<W>,
    mode: StyleMode,
    layout: Layout,
}

impl<W: Write> Handler<W> {
    /// Bind a handler to `sink`, styling according to the host platform.
    pub fn new(sink: W) -> Self {
        Self::with_mode(sink, StyleMode::detect())
    }

    /// Bind a handler to `sink` with an explicit style mode.
    pub fn with_mode(sink: W, mode: StyleMode) -> Self {
        Self {
            sink: Mutex::new(sink),
            mode,
            layout: Layout::default(),
        }
    }

    /// Override the column widths.
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub const fn mode(&self) -> StyleMode {
        self.mode
    }

    /// Render `entry` and write it as one line.
    ///
    /// The line is fully rendered before the lock is taken. A failed write
    /// is returned as-is and not retried.
    pub fn handle(&self, entry: &Entry) -> io::Result<()> {
        let mut line = String::with_capacity(128);
        formatter::format_entry(entry, self.mode, self.layout, &mut line);
        self.write_line(line.as_bytes())
    }

    /// Write a raw line (a newline is appended) under the same lock as
    /// rendered entries.
    pub fn passthrough(&self, text: &str) -> io::Result<()> {
        self.passthrough_bytes(text.as_bytes())
    }

    /// Like [`passthrough`](Self::passthrough), for input that is not UTF-8.
    pub fn passthrough_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        let mut line = Vec::with_capacity(bytes.len() + 1);
        line.extend_from_slice(bytes);
        line.push(b'\n');
        self.write_line(&line)
    }

    /// Flush the sink.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    /// Consume the handler and return its sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, bytes: &[u8]) -> io::Result<()> {
        let mut sink = self.lock();
        sink.write_all(bytes)?;
        sink.flush()
    }

    // A panic while holding the lock can only come from the sink itself;
    // the sink is still the right place for the next line.
    fn lock(&self) -> MutexGuard<'_, W> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
