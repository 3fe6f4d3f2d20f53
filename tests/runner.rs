//! Spawns real child processes to check exit-code relay and launch failures.
#![cfg(unix)]

use mcp_inspector_wrappers::commands::{self, Plan};
use mcp_inspector_wrappers::{RunnerConfig, WrapperError, runner};

fn sh() -> RunnerConfig {
    RunnerConfig {
        program: "sh".to_owned(),
        package: "unused".to_owned(),
    }
}

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn test_child_exit_code_propagated() {
    assert_eq!(runner::run(&sh(), &argv(&["-c", "exit 0"]), false).unwrap(), 0);
    assert_eq!(runner::run(&sh(), &argv(&["-c", "exit 3"]), false).unwrap(), 3);
    assert_eq!(runner::run(&sh(), &argv(&["-c", "exit 42"]), true).unwrap(), 42);
}

#[test]
fn test_signal_terminated_child() {
    let code = runner::run(&sh(), &argv(&["-c", "kill -TERM $$"]), false).unwrap();
    assert_eq!(code, 128 + 15);
}

#[test]
fn test_launch_failure_reported() {
    let config = RunnerConfig {
        program: "/nonexistent/mcp-inspector-runner".to_owned(),
        ..RunnerConfig::default()
    };
    let err = runner::run(&config, &argv(&["--cli"]), false).unwrap_err();
    assert!(matches!(err, WrapperError::Spawn { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().starts_with("Error running inspector: "));
}

#[test]
fn test_execute_spawn_plan() {
    let plan = Plan::Spawn {
        args: argv(&["-c", "exit 7"]),
        verbose: false,
    };
    let code = commands::execute::<mcp_inspector_wrappers::cli::ListCli>(plan, &sh()).unwrap();
    assert_eq!(code, 7);
}

#[test]
fn test_list_tool_end_to_end_with_stub_runner() {
    // `sh <package> --cli node x.js ...` runs the package path as a script; a
    // missing script makes sh fail, and that failure must come back as-is.
    let config = RunnerConfig {
        program: "sh".to_owned(),
        package: "/nonexistent/inspector-script".to_owned(),
    };
    let code = commands::list::run(&argv(&["node", "x.js"]), &config).unwrap();
    assert_ne!(code, 0);
}
