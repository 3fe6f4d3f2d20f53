/// Typed invocation options produced by the parser and consumed by the builder.
///
/// One record is built per process run and never mutated afterwards.
use serde_json::{Map, Value};

/// Transport the inspector assumes when none is forwarded.
pub const DEFAULT_TRANSPORT: &str = "sse";

/// Prefix a first server-command token must carry to count as a URL.
///
/// Matches anything starting with `http`, including `https://` targets.
pub const URL_PREFIX: &str = "http";

/// Options shared by both wrappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOptions {
    /// Server binary plus arguments, or a single URL. Never empty.
    pub server_command: Vec<String>,
    /// Transport tag, only forwarded for URL targets.
    pub transport: String,
    /// Echo the assembled command line before running it.
    pub verbose: bool,
}

impl InvocationOptions {
    /// Whether the first server-command token looks like a URL.
    #[must_use]
    pub fn targets_url(&self) -> bool {
        self.server_command
            .first()
            .is_some_and(|first| first.starts_with(URL_PREFIX))
    }

    /// The transport to pass through to the inspector, if any.
    ///
    /// A non-default transport is dropped for non-URL targets, even when it
    /// was set explicitly.
    #[must_use]
    pub fn forwarded_transport(&self) -> Option<&str> {
        (self.transport != DEFAULT_TRANSPORT && self.targets_url()).then_some(self.transport.as_str())
    }
}

/// Options for `mcp-button-handler`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonOptions {
    pub common: InvocationOptions,
    /// Tool (button) name to call. `None` means "show guidance, spawn nothing".
    pub button: Option<String>,
    /// Arguments for the call, only sent when `button` is set.
    pub params: Map<String, Value>,
}

/// Listing method requested by `mcp-list-tools`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMethod {
    #[default]
    Tools,
    Resources,
    Prompts,
}

impl ListMethod {
    /// Protocol method name passed to `--method`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tools => "tools/list",
            Self::Resources => "resources/list",
            Self::Prompts => "prompts/list",
        }
    }
}

impl std::fmt::Display for ListMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for `mcp-list-tools`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub common: InvocationOptions,
    pub method: ListMethod,
}
