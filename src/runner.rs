/// Process runner: launches the inspector with inherited stdio and relays its exit code.
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::cli::output::print_command_line;
use crate::config::RunnerConfig;
use crate::errors::WrapperError;

/// Offset added to a terminating signal number, as shells report it.
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// Run `config.program` with `args` and wait for it.
///
/// stdin, stdout and stderr are inherited untouched. When `verbose` is set
/// the full command line is echoed first.
///
/// # Errors
///
/// Returns `WrapperError::Spawn` if the program could not be started.
pub fn run(config: &RunnerConfig, args: &[String], verbose: bool) -> Result<i32, WrapperError> {
    if verbose {
        print_command_line(&config.program, args);
    }

    debug!(program = %config.program, ?args, "spawning inspector");
    let status = Command::new(&config.program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| WrapperError::Spawn {
            program: config.program.clone(),
            source,
        })?;

    let code = exit_code(status);
    debug!(%status, code, "inspector exited");
    Ok(code)
}

/// Map a child's exit status to the code this process should exit with.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            warn!(signal, "inspector terminated by signal");
            return SIGNAL_EXIT_BASE + signal;
        }
    }

    warn!(%status, "inspector exited without a status code");
    1
}
