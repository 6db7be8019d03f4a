//! crates/compose/src/sink.rs
//! The status-reporting protocol the orchestrator requires of a sink.

use std::io;
use std::sync::Arc;

/// Output sink for the orchestrator's per-object status protocol.
///
/// The orchestrator drives one concurrent worker per managed object and
/// every worker calls into the single installed sink, so implementations
/// must tolerate concurrent callers. Each method mirrors one callback of
/// the protocol; `message` carries the status verb (`Creating`, `Pulling`,
/// ...) and `object` names the container, network, or volume being acted
/// on.
pub trait StatusSink: Send + Sync {
    /// Registers a tracked object when work on it begins.
    fn add_object(&self, message: Option<&str>, object: &str) -> io::Result<()>;

    /// Renders the first-line status for a tracked object.
    fn write_initial(&self, message: Option<&str>, object: &str) -> io::Result<()>;

    /// Renders a status transition for a tracked object.
    ///
    /// `color` is the text-colouring function the orchestrator selected for
    /// terminal rendering; it is applied to the status column only.
    fn write(
        &self,
        message: Option<&str>,
        object: &str,
        status: &str,
        color: &dyn Fn(&str) -> String,
    ) -> io::Result<()>;
}

impl<S: StatusSink + ?Sized> StatusSink for Arc<S> {
    fn add_object(&self, message: Option<&str>, object: &str) -> io::Result<()> {
        (**self).add_object(message, object)
    }

    fn write_initial(&self, message: Option<&str>, object: &str) -> io::Result<()> {
        (**self).write_initial(message, object)
    }

    fn write(
        &self,
        message: Option<&str>,
        object: &str,
        status: &str,
        color: &dyn Fn(&str) -> String,
    ) -> io::Result<()> {
        (**self).write(message, object, status, color)
    }
}

/// Identity colour function for monochrome streams.
#[must_use]
pub fn monochrome(text: &str) -> String {
    text.to_owned()
}
