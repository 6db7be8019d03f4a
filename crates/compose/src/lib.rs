#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `compose` models the boundary between the wrapper and the orchestration
//! tool it interposes on. It provides the status-reporting protocol the
//! orchestrator requires of an output sink ([`StatusSink`]), the plain
//! terminal writer that protocol assumes ([`PlainSink`]), the noise-dropping
//! decorator installed in its place ([`FilteringSink`]), the process-wide
//! active-sink registry, and the [`Entrypoint`] abstraction through which
//! the orchestrator itself is invoked.
//!
//! # Design
//!
//! The filtering layer decorates by composition: [`FilteringSink`] wraps a
//! reference to the real sink and forwards non-suppressed calls explicitly
//! instead of inheriting from it. Suppression decisions come from the
//! `logging` crate and the decorator holds no state beyond the inner sink
//! and the resolved level, so it adds no synchronisation obligations of its
//! own.
//!
//! Orchestrators that run in process look the active sink up through
//! [`active_sink`] on every status-emitting call; orchestrators that run out
//! of process are reached through [`ExternalTool`], which applies the same
//! suppression rule line-wise to the child's stderr.
//!
//! # Invariants
//!
//! - At most one sink is ever installed per process. [`install_sink`] is an
//!   init-once step executed before any concurrent worker starts; a second
//!   installation attempt is rejected, never applied.
//! - Every sink implementation is safe for concurrent callers. The plain
//!   writer serialises output and bookkeeping behind mutexes.
//! - Suppressed calls have no side effects at all: nothing is written and no
//!   object bookkeeping happens.
//!
//! # Errors
//!
//! Sink operations surface [`std::io::Error`] values from the underlying
//! writer unchanged. Delegate invocation surfaces [`ToolError`] when the
//! external orchestrator cannot be located or spawned; failures of the
//! orchestrator itself are reported through its exit status, not translated.
//!
//! # Examples
//!
//! Filter the lifecycle chatter out of an in-memory status stream:
//!
//! ```
//! use compose::{FilteringSink, PlainSink, StatusSink};
//! use logging::LogLevel;
//!
//! let sink = FilteringSink::new(PlainSink::new(Vec::new()), LogLevel::Error);
//! sink.write_initial(Some("Creating"), "network foo")?;
//! sink.write_initial(Some("ERROR:"), "network foo")?;
//!
//! let output = String::from_utf8(sink.into_inner().into_inner()).unwrap();
//! assert_eq!(output, "ERROR: network foo ...\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod filter;
mod plain;
mod registry;
mod sink;
mod tool;

pub use filter::FilteringSink;
pub use plain::PlainSink;
pub use registry::{SinkInstallError, active_sink, install_sink};
pub use sink::{StatusSink, monochrome};
pub use tool::{DEFAULT_TOOL, Entrypoint, ExternalTool, FnEntrypoint, TOOL_ENV, ToolError};
