/// `mcp-list-tools`: list the tools, resources, or prompts of an MCP server.
use tracing::debug;

use super::{Plan, execute};
use crate::builder::build_list_command;
use crate::cli::{ListCli, Parsed, parse_list};
use crate::config::RunnerConfig;
use crate::errors::WrapperError;

/// Decide what `mcp-list-tools <args>` should do.
///
/// # Errors
///
/// Returns `WrapperError` on any argument error.
pub fn plan(args: &[String], config: &RunnerConfig) -> Result<Plan, WrapperError> {
    let opts = match parse_list(args)? {
        Parsed::Help => return Ok(Plan::Usage),
        Parsed::Version => return Ok(Plan::Version),
        Parsed::Run(opts) => opts,
    };
    debug!(?opts, "parsed list options");

    Ok(Plan::Spawn {
        args: build_list_command(config, &opts),
        verbose: opts.common.verbose,
    })
}

/// Run `mcp-list-tools`.
///
/// # Errors
///
/// Returns `WrapperError` on argument errors or if the inspector cannot be launched.
pub fn run(args: &[String], config: &RunnerConfig) -> Result<i32, WrapperError> {
    execute::<ListCli>(plan(args, config)?, config)
}
