//! src/bin/quiet-compose.rs
//! Binary entry point for the quiet-compose wrapper.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let status = cli::run(env::args_os(), &mut out, &mut err);
    let _ = out.flush();
    let _ = err.flush();
    cli::exit_code_from(status)
}
