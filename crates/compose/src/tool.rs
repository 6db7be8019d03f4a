//! crates/compose/src/tool.rs
//! Entrypoint abstraction and the external orchestrator delegate.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use logging::{LogLevel, line_is_noise};

/// Environment variable overriding the orchestrator executable.
pub const TOOL_ENV: &str = "QUIET_COMPOSE_TOOL";

/// Orchestrator executable searched on `PATH` when no override is set.
pub const DEFAULT_TOOL: &str = "docker-compose";

/// Errors raised while locating or spawning the orchestrator.
///
/// Failures of the orchestrator itself are not represented here; they are
/// reported through its exit status and propagated unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The orchestrator executable could not be found or is not runnable.
    #[error(
        "orchestrator '{tool}' is not available on PATH or is not executable; \
         install it or set QUIET_COMPOSE_TOOL to an explicit path"
    )]
    Unavailable {
        /// The executable name or path that was searched for.
        tool: String,
    },
    /// Spawning the child or forwarding its stderr failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// An invocable orchestrator entrypoint returning an integer status.
///
/// The production implementation is [`ExternalTool`]; tests and embedders
/// inject their own through [`FnEntrypoint`] or a custom implementation.
pub trait Entrypoint {
    /// Runs the orchestrator with the forwarded argument vector.
    ///
    /// `stderr` receives whatever diagnostics survive filtering. The
    /// returned integer becomes the wrapper's process exit code.
    fn run(&self, args: &[OsString], stderr: &mut dyn Write) -> Result<i32, ToolError>;
}

/// Adapter turning a closure into an [`Entrypoint`].
pub struct FnEntrypoint<F>(pub F);

impl<F> Entrypoint for FnEntrypoint<F>
where
    F: Fn(&[OsString], &mut dyn Write) -> Result<i32, ToolError>,
{
    fn run(&self, args: &[OsString], stderr: &mut dyn Write) -> Result<i32, ToolError> {
        (self.0)(args, stderr)
    }
}

/// Delegate that spawns the orchestrator as a child process.
///
/// stdin and stdout are inherited untouched; stderr is piped through the
/// line-wise suppression rule so the child's status chatter obeys the
/// resolved level even though its writer cannot be replaced in process.
#[derive(Clone, Debug)]
pub struct ExternalTool {
    program: OsString,
    level: LogLevel,
}

impl ExternalTool {
    /// Creates a delegate for an explicit program name or path.
    #[must_use]
    pub fn new(program: impl Into<OsString>, level: LogLevel) -> Self {
        Self {
            program: program.into(),
            level,
        }
    }

    /// Creates a delegate honouring the `QUIET_COMPOSE_TOOL` override.
    #[must_use]
    pub fn from_env(level: LogLevel) -> Self {
        let program = env::var_os(TOOL_ENV).unwrap_or_else(|| OsString::from(DEFAULT_TOOL));
        Self::new(program, level)
    }

    /// Returns the configured program name or path.
    #[must_use]
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    fn locate(&self) -> Result<PathBuf, ToolError> {
        candidates(&self.program)
            .into_iter()
            .find(|candidate| is_executable(candidate))
            .ok_or_else(|| ToolError::Unavailable {
                tool: self.program.to_string_lossy().into_owned(),
            })
    }
}

impl Entrypoint for ExternalTool {
    fn run(&self, args: &[OsString], stderr: &mut dyn Write) -> Result<i32, ToolError> {
        let program = self.locate()?;
        tracing::debug!(program = %program.display(), level = %self.level, "spawning orchestrator");

        let mut child = Command::new(&program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()?;

        let forwarded = match child.stderr.take() {
            Some(pipe) => forward_stderr(pipe, self.level, stderr),
            None => Ok(()),
        };
        // Reap the child before surfacing any forwarding error.
        let status = child.wait()?;
        forwarded?;

        Ok(status.code().unwrap_or(1))
    }
}

/// Copies the child's stderr to `stderr`, dropping noise lines.
///
/// Forwarding is byte-wise: surviving lines are written exactly as read,
/// including their original termination, and non-UTF-8 output passes
/// through untouched. Only the noise check itself decodes, lossily.
fn forward_stderr<R: Read>(pipe: R, level: LogLevel, stderr: &mut dyn Write) -> io::Result<()> {
    let mut reader = BufReader::new(pipe);
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if !line_is_noise(level, &String::from_utf8_lossy(&line)) {
            stderr.write_all(&line)?;
        }
    }
    stderr.flush()
}

/// Returns the candidate executable paths derived from `program`.
///
/// A value containing path separators is taken literally; a bare name is
/// expanded across the directories of the current `PATH`, mirroring the
/// lookup [`std::process::Command`] performs when spawning.
fn candidates(program: &OsStr) -> Vec<PathBuf> {
    let direct = Path::new(program);
    if direct.is_absolute() || direct.components().count() > 1 {
        return vec![direct.to_path_buf()];
    }

    let Some(path_env) = env::var_os("PATH") else {
        return Vec::new();
    };

    env::split_paths(&path_env)
        .map(|dir| {
            if dir.as_os_str().is_empty() {
                direct.to_path_buf()
            } else {
                dir.join(direct)
            }
        })
        .collect()
}

fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };

    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        metadata.mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    {
        true
    }
}
