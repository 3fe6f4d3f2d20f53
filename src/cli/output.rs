/// User-facing text: usage, version, guidance, and error reporting.
use std::io::Write;

use clap::CommandFactory;

use crate::errors::WrapperError;

/// Render the long usage text for `C`.
#[must_use]
pub fn usage<C: CommandFactory>() -> String {
    C::command().render_long_help().to_string()
}

/// Version line, e.g. `mcp-list-tools v0.1.0`.
#[must_use]
pub fn version_line<C: CommandFactory>() -> String {
    let cmd = C::command();
    format!(
        "{} v{}",
        cmd.get_name(),
        cmd.get_version().unwrap_or(env!("CARGO_PKG_VERSION"))
    )
}

/// Print usage to stdout.
pub fn print_usage<C: CommandFactory>() {
    println!("{}", usage::<C>());
}

/// Print the version line to stdout.
pub fn print_version<C: CommandFactory>() {
    println!("{}", version_line::<C>());
}

/// Verbose echo: the space-joined command line, then a `---` separator.
#[must_use]
pub fn format_command_line(program: &str, args: &[String]) -> String {
    format!("Running: {program} {}\n---", args.join(" "))
}

/// Echo the command about to run (verbose mode).
pub fn print_command_line(program: &str, args: &[String]) {
    println!("{}", format_command_line(program, args));
}

/// Write an error to stderr, followed by usage on stdout when the error calls for it.
pub fn write_error<C: CommandFactory>(err: &WrapperError) {
    {
        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        let _ = match err {
            // clap formats its own errors, prefix included.
            WrapperError::Flags(e) => write!(out, "{e}"),
            // Already carry their own context prefix.
            WrapperError::InvalidParams(_)
            | WrapperError::ParamsNotObject { .. }
            | WrapperError::Spawn { .. } => writeln!(out, "{err}"),
            WrapperError::MissingServerCommand | WrapperError::MissingValue { .. } => {
                writeln!(out, "Error: {err}")
            }
        };
    }

    if err.shows_usage() {
        print_usage::<C>();
    }
}
