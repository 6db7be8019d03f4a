//! crates/logging/src/noise.rs
//! The ignored-message set and the suppression predicates built on it.

use crate::LogLevel;

/// Status verbs suppressed when the resolved level filters noise.
///
/// These are the high-frequency, low-information lifecycle messages the
/// orchestrator emits once per container, network, or volume. Error and
/// warning reporting uses a different vocabulary and always passes through.
pub const IGNORED_STATUS_MESSAGES: [&str; 4] = ["Creating", "Starting", "Stopping", "Removing"];

/// Reports whether `message` is exactly one of the ignored status verbs.
#[must_use]
pub fn is_ignored_status(message: &str) -> bool {
    IGNORED_STATUS_MESSAGES.contains(&message)
}

/// The suppression rule applied to every status-sink callback.
///
/// A call is suppressed when the message is absent, or when the resolved
/// level filters noise and the message text is one of the ignored verbs.
/// Everything else is forwarded unchanged.
#[must_use]
pub fn should_suppress(level: LogLevel, message: Option<&str>) -> bool {
    match message {
        None => true,
        Some(text) => level.filters_status_noise() && is_ignored_status(text),
    }
}

/// Line-wise form of the rule for orchestrators running out of process.
///
/// A stderr line counts as noise when its first whitespace-separated token
/// is one of the ignored verbs and the level filters noise. Blank lines are
/// never noise.
#[must_use]
pub fn line_is_noise(level: LogLevel, line: &str) -> bool {
    let Some(first) = line.split_whitespace().next() else {
        return false;
    };
    level.filters_status_noise() && is_ignored_status(first)
}
