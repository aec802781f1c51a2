use std::fmt;
use std::io::{self, Write};
use std::mem;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::call_site::CallSite;
use crate::destination::Destination;
use crate::line::{current_timestamp, render_line};

/// Thread-safe line writer bound to a [`Destination`].
///
/// Lines are rendered outside the lock and written with a single
/// `write_all` while it is held. A poisoned lock is recovered rather than
/// propagated: a panic in one logging thread must not silence the others.
#[derive(Debug, Default)]
pub struct LineSink {
    destination: Mutex<Destination>,
}

impl LineSink {
    /// Creates a sink writing to `destination`.
    #[must_use]
    pub fn new(destination: Destination) -> Self {
        Self {
            destination: Mutex::new(destination),
        }
    }

    /// Creates a sink writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Destination::Stderr)
    }

    /// Replaces the destination, returning the previous one.
    pub fn rebind(&self, destination: Destination) -> Destination {
        mem::replace(&mut *self.lock(), destination)
    }

    /// Reports whether lines currently go to standard error.
    #[must_use]
    pub fn is_stderr(&self) -> bool {
        self.lock().is_stderr()
    }

    /// Renders and writes one line stamped with the current time.
    pub fn write_line(
        &self,
        site: CallSite<'_>,
        prefix: &str,
        message: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        let mut line = Vec::with_capacity(128);
        render_line(&mut line, current_timestamp(), site, prefix, message)?;

        let mut destination = self.lock();
        destination.write_all(&line)?;
        destination.flush()
    }

    fn lock(&self) -> MutexGuard<'_, Destination> {
        self.destination
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
