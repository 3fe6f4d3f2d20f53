/// Wrapper flag definitions via clap derive.
///
/// clap only ever sees the wrapper-flag segment found by [`super::scan`]; the
/// server command is appended after a `--` so it is never interpreted.
use clap::{ArgAction, Args, CommandFactory, Parser};
use serde_json::{Map, Value};

use super::scan::{FlagSet, Scan, scan};
use crate::errors::WrapperError;
use crate::invocation::{
    ButtonOptions, DEFAULT_TRANSPORT, InvocationOptions, ListMethod, ListOptions,
};

/// Outcome of parsing one tool's arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum Parsed<T> {
    /// Print usage and exit 0.
    Help,
    /// Print the version and exit 0.
    Version,
    /// Proceed with these options.
    Run(T),
}

/// Flags shared by both wrappers.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Show this help message.
    #[arg(short = 'h', long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Show version information.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Transport type for remote servers.
    /// Only forwarded when the target is a URL.
    #[arg(
        long,
        value_name = "TYPE",
        default_value = DEFAULT_TRANSPORT,
        allow_hyphen_values = true
    )]
    pub transport: String,

    /// Show verbose output including the full inspector command.
    #[arg(long)]
    pub verbose: bool,

    /// Server command with its arguments, or the URL of a remote server.
    #[arg(
        value_name = "SERVER_COMMAND|URL",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub server_command: Vec<String>,
}

impl CommonArgs {
    fn into_options(self) -> Result<InvocationOptions, WrapperError> {
        if self.server_command.is_empty() {
            return Err(WrapperError::MissingServerCommand);
        }
        Ok(InvocationOptions {
            server_command: self.server_command,
            transport: self.transport,
            verbose: self.verbose,
        })
    }
}

const BUTTON_AFTER_HELP: &str = "\
EXAMPLES:
  # Handle button presses from a local Node.js server
  mcp-button-handler --button refresh node build/index.js

  # Handle button presses from an NPM package server
  mcp-button-handler --button read_file npx @modelcontextprotocol/server-filesystem /path/to/directory

  # Handle button presses from a Python server
  mcp-button-handler --button press --params '{\"x\":1}' python -m my_mcp_server

  # Handle button presses from a remote server
  mcp-button-handler --button press https://my-mcp-server.example.com

DESCRIPTION:
  Handles button presses in MCP (Model Context Protocol) servers by wrapping
  the @modelcontextprotocol/inspector CLI with sensible defaults.";

/// mcp-button-handler — call a tool (button) on an MCP server.
#[derive(Debug, Parser)]
#[command(
    name = "mcp-button-handler",
    about = "Handle button presses from MCP servers",
    version,
    override_usage = "mcp-button-handler [OPTIONS] <server_command> [args...]\n       mcp-button-handler [OPTIONS] <url>",
    after_long_help = BUTTON_AFTER_HELP,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct ButtonCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Button (tool) name to press.
    #[arg(long, value_name = "NAME", allow_hyphen_values = true)]
    pub button: Option<String>,

    /// Parameters to pass to the button, as a JSON object.
    #[arg(long, value_name = "JSON", allow_hyphen_values = true)]
    pub params: Option<String>,
}

const BUTTON_FLAGS: FlagSet = FlagSet {
    valued: &["--transport", "--button", "--params"],
    switches: &["--verbose"],
};

const LIST_AFTER_HELP: &str = "\
EXAMPLES:
  # List tools from a local Node.js server
  mcp-list-tools node build/index.js

  # List resources from an NPM package server
  mcp-list-tools --resources npx @modelcontextprotocol/server-filesystem /path/to/directory

  # List prompts from a Python server
  mcp-list-tools --prompts python -m my_mcp_server

  # List tools from a remote server over streamable HTTP
  mcp-list-tools --transport http https://my-mcp-server.example.com

DESCRIPTION:
  Lists the tools, resources, or prompts of an MCP (Model Context Protocol)
  server by wrapping the @modelcontextprotocol/inspector CLI with sensible defaults.";

/// mcp-list-tools — list what an MCP server offers.
#[derive(Debug, Parser)]
#[command(
    name = "mcp-list-tools",
    about = "List tools, resources, or prompts from MCP servers",
    version,
    override_usage = "mcp-list-tools [OPTIONS] <server_command> [args...]\n       mcp-list-tools [OPTIONS] <url>",
    after_long_help = LIST_AFTER_HELP,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct ListCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// List resources instead of tools.
    #[arg(long, overrides_with = "prompts")]
    pub resources: bool,

    /// List prompts instead of tools.
    #[arg(long, overrides_with = "resources")]
    pub prompts: bool,
}

const LIST_FLAGS: FlagSet = FlagSet {
    valued: &["--transport"],
    switches: &["--verbose", "--resources", "--prompts"],
};

/// Scan `args`, then let clap type the wrapper-flag segment.
fn parse_with<C: Parser>(args: &[String], flag_set: &FlagSet) -> Result<Parsed<C>, WrapperError> {
    let (flags, server_command) = match scan(args, flag_set)? {
        Scan::Help => return Ok(Parsed::Help),
        Scan::Version => return Ok(Parsed::Version),
        Scan::Split {
            flags,
            server_command,
        } => (flags, server_command),
    };

    let name = C::command().get_name().to_owned();
    let argv = std::iter::once(name.as_str())
        .chain(flags.iter().map(String::as_str))
        .chain(std::iter::once("--"))
        .chain(server_command.iter().map(String::as_str));

    Ok(Parsed::Run(C::try_parse_from(argv)?))
}

/// Decode `--params`. Only JSON objects are accepted.
fn parse_params(raw: &str) -> Result<Map<String, Value>, WrapperError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => Err(WrapperError::ParamsNotObject {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse `mcp-button-handler` arguments (program name excluded).
///
/// # Errors
///
/// Returns `WrapperError` for a trailing value flag, malformed `--params`,
/// or a missing server command, in that order of detection.
pub fn parse_button(args: &[String]) -> Result<Parsed<ButtonOptions>, WrapperError> {
    let cli = match parse_with::<ButtonCli>(args, &BUTTON_FLAGS)? {
        Parsed::Help => return Ok(Parsed::Help),
        Parsed::Version => return Ok(Parsed::Version),
        Parsed::Run(cli) => cli,
    };

    let params = cli
        .params
        .as_deref()
        .map(parse_params)
        .transpose()?
        .unwrap_or_default();

    Ok(Parsed::Run(ButtonOptions {
        common: cli.common.into_options()?,
        button: cli.button,
        params,
    }))
}

/// Parse `mcp-list-tools` arguments (program name excluded).
///
/// # Errors
///
/// Returns `WrapperError` for a trailing `--transport` or a missing server command.
pub fn parse_list(args: &[String]) -> Result<Parsed<ListOptions>, WrapperError> {
    let cli = match parse_with::<ListCli>(args, &LIST_FLAGS)? {
        Parsed::Help => return Ok(Parsed::Help),
        Parsed::Version => return Ok(Parsed::Version),
        Parsed::Run(cli) => cli,
    };

    let method = if cli.resources {
        ListMethod::Resources
    } else if cli.prompts {
        ListMethod::Prompts
    } else {
        ListMethod::Tools
    };

    Ok(Parsed::Run(ListOptions {
        common: cli.common.into_options()?,
        method,
    }))
}
