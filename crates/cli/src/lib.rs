#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the `quiet-compose`
//! wrapper. The crate is intentionally small: it recognises exactly one
//! switch of its own (`--log-level`), installs the filtering status sink,
//! and delegates to the wrapped orchestrator with the argument vector
//! untouched. Every other token, including `--help`, belongs to the
//! orchestrator and passes straight through.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function
//! accepts an iterator of arguments together with handles for standard
//! output and error, so tests can drive the full pipeline against in-memory
//! buffers. `--log-level` is located by a linear scan (it may appear before
//! or after the orchestrator's own tokens, and the last occurrence wins)
//! and validated through a [`clap`](https://docs.rs/clap/) command
//! definition, keeping diagnostics and usage rendering on the standard
//! parser. [`run_with`] is the dependency-injected variant: it takes a
//! constructor for the [`Entrypoint`] to delegate to once the level is
//! resolved.
//!
//! # Invariants
//!
//! - The forwarded argument vector is byte-identical to the one received;
//!   `--log-level` is recognised, never consumed.
//! - The filtering sink is installed strictly before the delegate is
//!   invoked, and at most once per process.
//! - The delegate's integer result is returned unmodified; this layer adds
//!   no error handling around the delegated call.
//!
//! # Errors
//!
//! An unrecognised `--log-level` value yields a `clap` diagnostic on the
//! error stream and exit code `1`. A delegate that cannot be started is
//! reported the same way. Failures inside the orchestrator surface through
//! its own exit status.
//!
//! # Examples
//!
//! ```
//! use std::ffi::OsString;
//! use std::io::Write;
//!
//! use compose::FnEntrypoint;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run_with(
//!     ["quiet-compose", "--log-level", "ERROR", "up", "-d"],
//!     &mut stdout,
//!     &mut stderr,
//!     |_level| {
//!         FnEntrypoint(|_args: &[OsString], _stderr: &mut dyn Write| {
//!             Ok::<i32, compose::ToolError>(0)
//!         })
//!     },
//! );
//!
//! assert_eq!(status, 0);
//! assert!(stdout.is_empty());
//! ```

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser, error::ErrorKind};
use compose::{Entrypoint, ExternalTool, FilteringSink, PlainSink, install_sink};
use logging::LogLevel;
use tracing_subscriber::EnvFilter;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Program name used when the argument vector carries no invocation name.
const FALLBACK_PROGRAM_NAME: &str = "quiet-compose";

/// Runs the wrapper: resolve the level, install the sink, delegate to the
/// orchestrator found through the `QUIET_COMPOSE_TOOL` override or `PATH`.
///
/// Returns the delegate's integer status, which [`exit_code_from`] maps to
/// the process exit code.
pub fn run<I, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    Out: Write,
    Err: Write,
{
    run_with(arguments, stdout, stderr, ExternalTool::from_env)
}

/// [`run`] with an injected delegate constructor.
///
/// `delegate` receives the resolved [`LogLevel`] and returns the
/// [`Entrypoint`] to invoke. Tests pass closures wrapped in
/// [`compose::FnEntrypoint`]; production code wires in
/// [`compose::ExternalTool`].
pub fn run_with<I, Out, Err, E, F>(
    arguments: I,
    stdout: &mut Out,
    stderr: &mut Err,
    delegate: F,
) -> i32
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    Out: Write,
    Err: Write,
    E: Entrypoint,
    F: FnOnce(LogLevel) -> E,
{
    let arguments: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    let program = program_name(arguments.first());
    let forwarded: Vec<OsString> = arguments
        .get(1..)
        .map(<[OsString]>::to_vec)
        .unwrap_or_default();

    let mut command = clap_command(&program);
    let level = match resolve_log_level(&mut command, &forwarded) {
        Ok(level) => level,
        Err(error) => return render_parse_error(&error, stdout, stderr),
    };

    init_tracing(level);
    install_filtering_sink(level);

    let entrypoint = delegate(level);
    match entrypoint.run(&forwarded, stderr) {
        Ok(status) => status,
        Err(error) => {
            let _ = writeln!(stderr, "{program}: {error}");
            1
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
///
/// Negative statuses signal failure and map to `1`; values above the Unix
/// range saturate at `255`.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    if status < 0 {
        return std::process::ExitCode::from(1);
    }
    std::process::ExitCode::from(status.min(MAX_EXIT_CODE) as u8)
}

/// Normalises the invocation name for display purposes only.
///
/// Strips the directory portion and the `.exe` packaging suffix; the result
/// feeds usage banners and diagnostics, never semantics.
fn program_name(argv0: Option<&OsString>) -> String {
    let Some(argv0) = argv0 else {
        return FALLBACK_PROGRAM_NAME.to_owned();
    };

    let base = Path::new(argv0)
        .file_name()
        .unwrap_or(argv0.as_os_str())
        .to_string_lossy()
        .into_owned();

    match base.strip_suffix(".exe") {
        Some(stripped) if !stripped.is_empty() => stripped.to_owned(),
        _ => base,
    }
}

/// Builds the `clap` command used for validation and diagnostics.
///
/// Help and version flags are disabled deliberately: both belong to the
/// wrapped orchestrator and must pass through like any other token.
fn clap_command(program: &str) -> Command {
    Command::new(program.to_owned())
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Status verbosity threshold (default INFO).")
                .value_parser(LogLevel::NAMES)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .help("Arguments forwarded untouched to the orchestrator.")
                .action(ArgAction::Append)
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true)
                .value_parser(OsStringValueParser::new()),
        )
}

/// Scans for the last `--log-level` occurrence in the argument vector.
///
/// Returns `None` when the flag is absent, `Some(None)` for a dangling flag
/// with no value, and `Some(Some(value))` otherwise. Both the separated and
/// the `=` spellings are recognised.
fn find_log_level(arguments: &[OsString]) -> Option<Option<OsString>> {
    let mut found = None;
    let mut iter = arguments.iter();
    while let Some(argument) = iter.next() {
        match argument.to_str() {
            Some("--log-level") => found = Some(iter.next().cloned()),
            Some(text) => {
                if let Some(value) = text.strip_prefix("--log-level=") {
                    found = Some(Some(OsString::from(value)));
                }
            }
            None => {}
        }
    }
    found
}

/// Resolves the log level from the argument vector, defaulting to INFO.
///
/// Validation and error rendering stay on `clap`: the located value is
/// re-parsed through `command` so unknown names produce the standard
/// invalid-value diagnostic with a usage line.
fn resolve_log_level(
    command: &mut Command,
    arguments: &[OsString],
) -> Result<LogLevel, clap::Error> {
    let Some(occurrence) = find_log_level(arguments) else {
        return Ok(LogLevel::default());
    };

    let mut synthesized: Vec<OsString> = vec![
        OsString::from(command.get_name().to_owned()),
        OsString::from("--log-level"),
    ];
    if let Some(value) = occurrence {
        synthesized.push(value);
    }

    let matches = command.try_get_matches_from_mut(synthesized)?;
    let name = matches
        .get_one::<String>("log-level")
        .map_or_else(|| LogLevel::default().as_str().to_owned(), Clone::clone);

    name.parse::<LogLevel>()
        .map_err(|error| command.error(ErrorKind::InvalidValue, error.to_string()))
}

fn render_parse_error<Out, Err>(error: &clap::Error, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    let rendered = error.render();
    if error.use_stderr() {
        let _ = write!(stderr, "{rendered}");
    } else {
        let _ = write!(stdout, "{rendered}");
    }
    1
}

/// Initialises the wrapper's own diagnostics.
///
/// The subscriber writes to the process error stream and derives its filter
/// from the resolved level, so wrapper tracing appears only when the user
/// asked for DEBUG. An explicit `RUST_LOG` wins over the derived filter.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.tracing_directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

/// Installs the filtering sink over the process error stream.
///
/// Runs strictly before the delegate so the orchestrator's first status
/// lookup already sees the decorated writer. A sink installed earlier in
/// the process (tests drive [`run_with`] repeatedly) is kept as is.
fn install_filtering_sink(level: LogLevel) {
    let sink = FilteringSink::new(PlainSink::stderr(), level);
    if install_sink(Arc::new(sink)).is_err() {
        tracing::debug!("status sink already installed; keeping the existing instance");
    }
}
