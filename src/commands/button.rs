/// `mcp-button-handler`: call a named tool (button) on an MCP server.
use tracing::debug;

use super::{Plan, execute};
use crate::builder::build_button_command;
use crate::cli::{ButtonCli, Parsed, parse_button};
use crate::config::RunnerConfig;
use crate::errors::WrapperError;

/// Companion tool suggested when no button is given.
const LIST_TOOL: &str = "mcp-list-tools";

/// Decide what `mcp-button-handler <args>` should do.
///
/// # Errors
///
/// Returns `WrapperError` on any argument error.
pub fn plan(args: &[String], config: &RunnerConfig) -> Result<Plan, WrapperError> {
    let opts = match parse_button(args)? {
        Parsed::Help => return Ok(Plan::Usage),
        Parsed::Version => return Ok(Plan::Version),
        Parsed::Run(opts) => opts,
    };
    debug!(?opts, "parsed button options");

    if opts.button.is_none() {
        return Ok(Plan::Guidance {
            server_command: opts.common.server_command,
        });
    }

    Ok(Plan::Spawn {
        args: build_button_command(config, &opts),
        verbose: opts.common.verbose,
    })
}

/// Run `mcp-button-handler`.
///
/// # Errors
///
/// Returns `WrapperError` on argument errors or if the inspector cannot be launched.
pub fn run(args: &[String], config: &RunnerConfig) -> Result<i32, WrapperError> {
    execute::<ButtonCli>(plan(args, config)?, config)
}

/// Text explaining how to discover button names.
#[must_use]
pub fn guidance_text(server_command: &[String]) -> String {
    format!(
        "No button specified. Available buttons can be listed with:\n\
         {LIST_TOOL} {}\n\
         \n\
         Then use --button <name> to press a specific button.",
        server_command.join(" ")
    )
}

/// Explain how to discover button names.
pub fn print_guidance(server_command: &[String]) {
    println!("{}", guidance_text(server_command));
}
