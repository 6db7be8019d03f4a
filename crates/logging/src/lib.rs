#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` holds the verbosity model shared by every filtering surface in
//! the `quiet-compose` workspace: the ordered [`LogLevel`] enumeration, the
//! fixed set of ignored status verbs, and the suppression predicates built
//! from the two.
//!
//! # Design
//!
//! The crate is deliberately free of I/O. Sinks and delegates in the
//! `compose` crate consult [`should_suppress`] (per status callback) or
//! [`line_is_noise`] (per stderr line of a spawned orchestrator) and perform
//! the writes themselves. Keeping the decision pure makes the threshold
//! behaviour trivially testable.
//!
//! # Invariants
//!
//! - [`LogLevel`] orders `DEBUG < INFO < WARNING < ERROR < CRITICAL` by
//!   integer rank.
//! - The ignored set is a process-wide constant of exactly four verbs and is
//!   matched by full string equality, never by prefix or case folding.
//! - Filtering starts strictly above `INFO`: both `DEBUG` and `INFO` show
//!   every status message.
//!
//! # Examples
//!
//! ```
//! use logging::{should_suppress, LogLevel};
//!
//! assert!(should_suppress(LogLevel::Warning, Some("Creating")));
//! assert!(!should_suppress(LogLevel::Info, Some("Creating")));
//! assert!(!should_suppress(LogLevel::Critical, Some("network timeout")));
//! assert!(should_suppress(LogLevel::Debug, None));
//! ```

mod level;
mod noise;

pub use level::{LogLevel, ParseLevelError};
pub use noise::{IGNORED_STATUS_MESSAGES, is_ignored_status, line_is_noise, should_suppress};
