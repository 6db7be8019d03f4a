//! crates/compose/src/plain.rs
//! The non-filtering terminal writer the status protocol assumes.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::sink::StatusSink;

/// Line-oriented status writer over an arbitrary output stream.
///
/// This is the "real" sink the filtering decorator wraps: it renders one
/// line per status callback and keeps the registration order of tracked
/// objects. Writes and bookkeeping are serialised behind mutexes so the
/// orchestrator's workers can share one instance.
pub struct PlainSink<W> {
    writer: Mutex<W>,
    objects: Mutex<Vec<String>>,
}

impl<W> PlainSink<W> {
    /// Creates a sink over the given output stream.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            objects: Mutex::new(Vec::new()),
        }
    }

    /// Returns the tracked objects in registration order.
    #[must_use]
    pub fn tracked_objects(&self) -> Vec<String> {
        self.objects
            .lock()
            .expect("status sink object lock poisoned")
            .clone()
    }

    /// Consumes the sink and returns the wrapped stream.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .expect("status sink writer lock poisoned")
    }
}

impl PlainSink<io::Stderr> {
    /// Creates a sink bound to the process error stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

fn render(message: Option<&str>, object: &str) -> String {
    match message {
        Some(text) => format!("{text} {object}"),
        None => object.to_owned(),
    }
}

impl<W: Write + Send> StatusSink for PlainSink<W> {
    fn add_object(&self, _message: Option<&str>, object: &str) -> io::Result<()> {
        let mut objects = self
            .objects
            .lock()
            .expect("status sink object lock poisoned");
        if !objects.iter().any(|tracked| tracked == object) {
            objects.push(object.to_owned());
        }
        Ok(())
    }

    fn write_initial(&self, message: Option<&str>, object: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .expect("status sink writer lock poisoned");
        writeln!(writer, "{} ...", render(message, object))?;
        writer.flush()
    }

    fn write(
        &self,
        message: Option<&str>,
        object: &str,
        status: &str,
        color: &dyn Fn(&str) -> String,
    ) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .expect("status sink writer lock poisoned");
        writeln!(writer, "{} ... {}", render(message, object), color(status))?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::monochrome;

    #[test]
    fn renders_initial_and_transition_lines() {
        let sink = PlainSink::new(Vec::new());
        sink.write_initial(Some("Creating"), "network front")
            .expect("write succeeds");
        sink.write(Some("Creating"), "network front", "done", &monochrome)
            .expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Creating network front ..."));
        assert_eq!(lines.next(), Some("Creating network front ... done"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn applies_the_colour_function_to_the_status_column() {
        let sink = PlainSink::new(Vec::new());
        let shout = |text: &str| text.to_uppercase();
        sink.write(Some("Starting"), "web_1", "done", &shout)
            .expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output, "Starting web_1 ... DONE\n");
    }

    #[test]
    fn tracks_objects_once_in_registration_order() {
        let sink = PlainSink::new(Vec::new());
        sink.add_object(Some("Creating"), "web_1").expect("add");
        sink.add_object(Some("Creating"), "db_1").expect("add");
        sink.add_object(Some("Starting"), "web_1").expect("add");

        assert_eq!(sink.tracked_objects(), ["web_1", "db_1"]);
    }

    #[test]
    fn renders_without_a_message_when_none_is_given() {
        let sink = PlainSink::new(Vec::new());
        sink.write_initial(None, "web_1").expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output, "web_1 ...\n");
    }
}
