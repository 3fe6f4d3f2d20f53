/// Raw token scanning: help/version short-circuits and the server-command boundary.
///
/// Scanning rules, left to right:
///
/// 1. No tokens, or `--help` / `-h` anywhere → [`Scan::Help`].
/// 2. `--version` / `-v` anywhere → [`Scan::Version`].
/// 3. A known value flag consumes itself and the next token, whatever it looks like.
/// 4. A known switch consumes itself.
/// 5. Any other token, including an unknown `--flag`, starts the server command;
///    it and every token after it are passed through untouched.
use crate::errors::WrapperError;

/// The flags a wrapper recognises before the server command starts.
#[derive(Debug, Clone, Copy)]
pub struct FlagSet {
    /// Flags followed by exactly one value token.
    pub valued: &'static [&'static str],
    /// Flags that take no value.
    pub switches: &'static [&'static str],
}

/// Result of scanning the raw argument list.
#[derive(Debug, PartialEq, Eq)]
pub enum Scan<'a> {
    /// Usage was requested (or nothing was given).
    Help,
    /// Version was requested.
    Version,
    /// Tokens split at the server-command boundary.
    Split {
        /// Recognised wrapper flags and their values, in order.
        flags: &'a [String],
        /// Everything from the boundary on. May be empty.
        server_command: &'a [String],
    },
}

/// Scan `args` (program name excluded) against `flag_set`.
///
/// # Errors
///
/// Returns `WrapperError::MissingValue` when a value flag is the last token.
pub fn scan<'a>(args: &'a [String], flag_set: &FlagSet) -> Result<Scan<'a>, WrapperError> {
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        return Ok(Scan::Help);
    }
    if args.iter().any(|a| a == "--version" || a == "-v") {
        return Ok(Scan::Version);
    }

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if flag_set.valued.contains(&arg) {
            if i + 1 >= args.len() {
                return Err(WrapperError::MissingValue {
                    flag: arg.to_owned(),
                });
            }
            i += 2;
        } else if flag_set.switches.contains(&arg) {
            i += 1;
        } else {
            break;
        }
    }

    let (flags, server_command) = args.split_at(i);
    Ok(Scan::Split {
        flags,
        server_command,
    })
}
