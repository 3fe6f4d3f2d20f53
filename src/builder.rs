/// Inspector command-line assembly.
///
/// Pure functions: the same options and config always yield the same vector,
/// and nothing here touches the network, filesystem, or environment.
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::RunnerConfig;
use crate::invocation::{ButtonOptions, InvocationOptions, ListOptions};

/// Flag putting the inspector into non-interactive mode.
pub const CLI_MODE_FLAG: &str = "--cli";

/// Inspector method used to invoke a button.
pub const CALL_METHOD: &str = "call";

/// Payload sent with `--params` when a button is pressed.
#[derive(Debug, Serialize)]
struct CallPayload<'a> {
    method: &'a str,
    params: &'a Map<String, Value>,
}

/// Package prefix, server command, and (for URL targets) the transport.
fn base_args(config: &RunnerConfig, common: &InvocationOptions) -> Vec<String> {
    let mut args = Vec::with_capacity(common.server_command.len() + 6);
    args.push(config.package.clone());
    args.push(CLI_MODE_FLAG.to_owned());
    args.extend(common.server_command.iter().cloned());

    if let Some(transport) = common.forwarded_transport() {
        args.push("--transport".to_owned());
        args.push(transport.to_owned());
    }
    args
}

/// Build the runner arguments for `mcp-list-tools`.
#[must_use]
pub fn build_list_command(config: &RunnerConfig, opts: &ListOptions) -> Vec<String> {
    let mut args = base_args(config, &opts.common);
    args.push("--method".to_owned());
    args.push(opts.method.as_str().to_owned());
    args
}

/// Build the runner arguments for `mcp-button-handler`.
#[must_use]
pub fn build_button_command(config: &RunnerConfig, opts: &ButtonOptions) -> Vec<String> {
    let mut args = base_args(config, &opts.common);
    args.push("--method".to_owned());
    args.push(CALL_METHOD.to_owned());

    if let Some(button) = opts.button.as_deref() {
        let payload = CallPayload {
            method: button,
            params: &opts.params,
        };
        args.push("--params".to_owned());
        args.push(call_payload_json(&payload));
    }
    args
}

fn call_payload_json(payload: &CallPayload<'_>) -> String {
    // Only string keys and `Value`s; serialization cannot fail.
    serde_json::to_string(payload).unwrap_or_else(|_| String::from("{}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::ListMethod;

    fn common(server: &[&str], transport: &str) -> InvocationOptions {
        InvocationOptions {
            server_command: server.iter().map(|s| (*s).to_owned()).collect(),
            transport: transport.to_owned(),
            verbose: false,
        }
    }

    fn strs(v: &[String]) -> Vec<&str> {
        v.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_list_default_command() {
        let opts = ListOptions {
            common: common(&["node", "build/index.js"], "sse"),
            method: ListMethod::Tools,
        };
        let args = build_list_command(&RunnerConfig::default(), &opts);
        assert_eq!(
            strs(&args),
            [
                "@modelcontextprotocol/inspector",
                "--cli",
                "node",
                "build/index.js",
                "--method",
                "tools/list"
            ]
        );
    }

    #[test]
    fn test_transport_not_added_for_local_server() {
        let opts = ListOptions {
            common: common(&["node", "build/index.js"], "http"),
            method: ListMethod::Resources,
        };
        let args = build_list_command(&RunnerConfig::default(), &opts);
        assert!(!args.iter().any(|a| a == "--transport"));
        assert_eq!(strs(&args[4..]), ["--method", "resources/list"]);
    }

    #[test]
    fn test_transport_added_for_url() {
        let opts = ListOptions {
            common: common(&["https://x.example.com"], "http"),
            method: ListMethod::Prompts,
        };
        let args = build_list_command(&RunnerConfig::default(), &opts);
        assert_eq!(
            strs(&args[2..]),
            [
                "https://x.example.com",
                "--transport",
                "http",
                "--method",
                "prompts/list"
            ]
        );
    }

    #[test]
    fn test_button_payload() {
        let mut params = Map::new();
        params.insert("x".to_owned(), Value::from(1));
        let opts = ButtonOptions {
            common: common(&["node", "build/index.js"], "sse"),
            button: Some("press".to_owned()),
            params,
        };
        let args = build_button_command(&RunnerConfig::default(), &opts);
        assert_eq!(
            strs(&args[..6]),
            [
                "@modelcontextprotocol/inspector",
                "--cli",
                "node",
                "build/index.js",
                "--method",
                "call"
            ]
        );
        assert_eq!(args[6], "--params");
        let decoded: Value = serde_json::from_str(&args[7]).unwrap();
        assert_eq!(decoded, serde_json::json!({"method": "press", "params": {"x": 1}}));
        assert_eq!(args.len(), 8);
    }

    #[test]
    fn test_button_empty_params_serialized() {
        let opts = ButtonOptions {
            common: common(&["node", "x.js"], "sse"),
            button: Some("refresh".to_owned()),
            params: Map::new(),
        };
        let args = build_button_command(&RunnerConfig::default(), &opts);
        assert_eq!(
            args.last().map(String::as_str),
            Some(r#"{"method":"refresh","params":{}}"#)
        );
    }

    #[test]
    fn test_no_button_means_no_params() {
        let mut params = Map::new();
        params.insert("ignored".to_owned(), Value::Bool(true));
        let opts = ButtonOptions {
            common: common(&["node", "x.js"], "sse"),
            button: None,
            params,
        };
        let args = build_button_command(&RunnerConfig::default(), &opts);
        assert_eq!(strs(&args[2..]), ["node", "x.js", "--method", "call"]);
    }

    #[test]
    fn test_builder_is_deterministic() {
        let opts = ListOptions {
            common: common(&["http://localhost:8080/mcp", "extra"], "http"),
            method: ListMethod::Tools,
        };
        let config = RunnerConfig::default();
        assert_eq!(
            build_list_command(&config, &opts),
            build_list_command(&config, &opts.clone())
        );
    }

    #[test]
    fn test_package_override_used_as_prefix() {
        let config = RunnerConfig {
            program: "bunx".to_owned(),
            package: "@modelcontextprotocol/inspector@latest".to_owned(),
        };
        let opts = ListOptions {
            common: common(&["node", "x.js"], "sse"),
            method: ListMethod::Tools,
        };
        let args = build_list_command(&config, &opts);
        assert_eq!(args[0], "@modelcontextprotocol/inspector@latest");
        assert_eq!(args[1], "--cli");
    }
}
