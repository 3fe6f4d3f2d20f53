/// CLI layer: token scanning, flag parsing, and user-facing output.
pub mod args;
pub mod output;
pub mod scan;

pub use args::{ButtonCli, ListCli, Parsed, parse_button, parse_list};
pub use output::write_error;
