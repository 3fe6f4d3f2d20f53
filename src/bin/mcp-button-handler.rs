#![deny(clippy::all, clippy::pedantic)]
//! mcp-button-handler — press a button (call a tool) on an MCP server via the inspector CLI.

use mcp_inspector_wrappers::cli::{ButtonCli, write_error};
use mcp_inspector_wrappers::{RunnerConfig, commands, logging};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let config = RunnerConfig::from_env();

    let code = match commands::button::run(&args, &config) {
        Ok(code) => code,
        Err(err) => {
            write_error::<ButtonCli>(&err);
            err.exit_code()
        }
    };
    std::process::exit(code);
}
