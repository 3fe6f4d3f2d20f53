#![deny(clippy::all, clippy::pedantic)]
//! mcp-list-tools — list tools, resources, or prompts of an MCP server via the inspector CLI.

use mcp_inspector_wrappers::cli::{ListCli, write_error};
use mcp_inspector_wrappers::{RunnerConfig, commands, logging};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let config = RunnerConfig::from_env();

    let code = match commands::list::run(&args, &config) {
        Ok(code) => code,
        Err(err) => {
            write_error::<ListCli>(&err);
            err.exit_code()
        }
    };
    std::process::exit(code);
}
