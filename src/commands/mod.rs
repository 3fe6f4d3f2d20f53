/// Entry orchestration: parse → decide → build → run.
///
/// Each tool first turns its arguments into a [`Plan`] without side effects,
/// then [`execute`] carries the plan out and returns the process exit code.
pub mod button;
pub mod list;

use clap::CommandFactory;
use tracing::debug;

use crate::cli::output::{print_usage, print_version};
use crate::config::RunnerConfig;
use crate::errors::WrapperError;
use crate::runner;

/// What an invocation will do.
#[derive(Debug, PartialEq, Eq)]
pub enum Plan {
    /// Print usage, exit 0.
    Usage,
    /// Print version, exit 0.
    Version,
    /// Point the user at `mcp-list-tools`, exit 0, spawn nothing.
    Guidance {
        /// Server command to repeat in the suggested listing command.
        server_command: Vec<String>,
    },
    /// Launch the inspector with these runner arguments.
    Spawn {
        /// Arguments following the runner program.
        args: Vec<String>,
        /// Echo the command line first.
        verbose: bool,
    },
}

/// Carry out `plan` for the tool described by `C`.
///
/// # Errors
///
/// Returns `WrapperError::Spawn` if the inspector could not be launched.
pub fn execute<C: CommandFactory>(plan: Plan, config: &RunnerConfig) -> Result<i32, WrapperError> {
    match plan {
        Plan::Usage => {
            print_usage::<C>();
            Ok(0)
        }
        Plan::Version => {
            print_version::<C>();
            Ok(0)
        }
        Plan::Guidance { server_command } => {
            button::print_guidance(&server_command);
            Ok(0)
        }
        Plan::Spawn { args, verbose } => {
            debug!(?args, "built inspector command");
            runner::run(config, &args, verbose)
        }
    }
}
