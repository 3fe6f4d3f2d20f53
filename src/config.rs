/// Runner configuration: which package runner to invoke and which inspector package it runs.
use std::env;

/// Environment variable overriding the package-runner program.
pub const RUNNER_ENV: &str = "MCP_INSPECTOR_RUNNER";

/// Environment variable overriding the inspector package spec.
pub const PACKAGE_ENV: &str = "MCP_INSPECTOR_PACKAGE";

/// Inspector package launched through the runner.
pub const DEFAULT_PACKAGE: &str = "@modelcontextprotocol/inspector";

/// Package runner used to fetch and execute the inspector.
#[cfg(windows)]
pub const DEFAULT_RUNNER: &str = "npx.cmd";
#[cfg(not(windows))]
pub const DEFAULT_RUNNER: &str = "npx";

/// Where the inspector comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Executable spawned as the child process.
    pub program: String,
    /// Package name handed to the runner as its first argument.
    pub package: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_RUNNER.to_owned(),
            package: DEFAULT_PACKAGE.to_owned(),
        }
    }
}

impl RunnerConfig {
    /// Defaults overridden by [`RUNNER_ENV`] / [`PACKAGE_ENV`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the override keys.
    ///
    /// Blank values are ignored.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        if let Some(program) = non_blank(RUNNER_ENV) {
            config.program = program;
        }
        if let Some(package) = non_blank(PACKAGE_ENV) {
            config.package = package;
        }
        config
    }
}
