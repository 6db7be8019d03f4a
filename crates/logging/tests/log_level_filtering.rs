//! Integration tests for log level filtering.
//!
//! These tests verify that the suppression rule keeps the ignored status
//! verbs visible at DEBUG and INFO, hides them at every level above INFO,
//! and never touches messages outside the ignored set.

use logging::{IGNORED_STATUS_MESSAGES, LogLevel, line_is_noise, should_suppress};

const FILTERING_LEVELS: [LogLevel; 3] = [LogLevel::Warning, LogLevel::Error, LogLevel::Critical];
const VERBOSE_LEVELS: [LogLevel; 2] = [LogLevel::Debug, LogLevel::Info];

/// Every ignored verb is suppressed at every level above INFO.
#[test]
fn ignored_verbs_are_suppressed_above_info() {
    for level in FILTERING_LEVELS {
        for verb in IGNORED_STATUS_MESSAGES {
            assert!(
                should_suppress(level, Some(verb)),
                "{verb} should be suppressed at {level}"
            );
        }
    }
}

/// DEBUG and INFO show every ignored verb.
#[test]
fn ignored_verbs_pass_through_at_or_below_info() {
    for level in VERBOSE_LEVELS {
        for verb in IGNORED_STATUS_MESSAGES {
            assert!(
                !should_suppress(level, Some(verb)),
                "{verb} should be forwarded at {level}"
            );
        }
    }
}

/// Messages outside the ignored set are forwarded at any level.
#[test]
fn other_messages_are_never_suppressed() {
    let messages = ["Recreating", "Pulling", "ERROR:", "Creating network", "done"];
    for level in FILTERING_LEVELS.iter().chain(VERBOSE_LEVELS.iter()) {
        for message in messages {
            assert!(
                !should_suppress(*level, Some(message)),
                "{message} should be forwarded at {level}"
            );
        }
    }
}

/// The line-wise rule keys on the first token only.
#[test]
fn line_rule_inspects_the_first_token() {
    assert!(line_is_noise(LogLevel::Warning, "Starting web_1 ..."));
    assert!(line_is_noise(LogLevel::Critical, "Stopping db_1 ... done"));
    assert!(!line_is_noise(LogLevel::Warning, "web_1 Starting"));
    assert!(!line_is_noise(LogLevel::Info, "Starting web_1 ..."));
}
