//! crates/compose/src/filter.rs
//! Noise-dropping decorator over the real status sink.

use std::io;

use logging::{LogLevel, should_suppress};

use crate::sink::StatusSink;

/// Decorator that suppresses the ignored status verbs above INFO.
///
/// Wraps the real sink by composition and forwards every call the
/// suppression rule lets through. The decorator is immutable after
/// construction: it holds only the inner sink and the resolved level, so a
/// single instance can serve every concurrent worker.
pub struct FilteringSink<S> {
    inner: S,
    level: LogLevel,
}

impl<S> FilteringSink<S> {
    /// Creates a decorator over `inner` with the resolved level.
    #[must_use]
    pub fn new(inner: S, level: LogLevel) -> Self {
        Self { inner, level }
    }

    /// Returns the resolved level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Borrows the wrapped sink.
    #[must_use]
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Consumes the decorator and returns the wrapped sink.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: StatusSink> StatusSink for FilteringSink<S> {
    fn add_object(&self, message: Option<&str>, object: &str) -> io::Result<()> {
        if should_suppress(self.level, message) {
            return Ok(());
        }
        self.inner.add_object(message, object)
    }

    fn write_initial(&self, message: Option<&str>, object: &str) -> io::Result<()> {
        if should_suppress(self.level, message) {
            return Ok(());
        }
        self.inner.write_initial(message, object)
    }

    fn write(
        &self,
        message: Option<&str>,
        object: &str,
        status: &str,
        color: &dyn Fn(&str) -> String,
    ) -> io::Result<()> {
        if should_suppress(self.level, message) {
            return Ok(());
        }
        self.inner.write(message, object, status, color)
    }
}
