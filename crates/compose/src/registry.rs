//! crates/compose/src/registry.rs
//! Process-wide active-sink registry with an init-once lifecycle.

use std::sync::{Arc, OnceLock};

use crate::sink::StatusSink;

static ACTIVE_SINK: OnceLock<Arc<dyn StatusSink>> = OnceLock::new();

/// Error returned when a second sink installation is attempted.
#[derive(Debug, thiserror::Error)]
#[error("a status sink is already installed for this process")]
pub struct SinkInstallError;

/// Installs the process-wide active sink.
///
/// The orchestrator looks the sink up on every status-emitting call, so
/// installation must happen strictly before its first worker starts. The
/// registry exists only because the collaborator contract requires a
/// process-wide lookup; the lifecycle is init-once and re-installation is
/// rejected rather than applied.
pub fn install_sink(sink: Arc<dyn StatusSink>) -> Result<(), SinkInstallError> {
    ACTIVE_SINK.set(sink).map_err(|_| SinkInstallError)
}

/// Returns the installed sink, if any.
#[must_use]
pub fn active_sink() -> Option<Arc<dyn StatusSink>> {
    ACTIVE_SINK.get().map(Arc::clone)
}
