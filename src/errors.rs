/// Errors from parsing wrapper flags and launching the inspector.
use thiserror::Error;

/// Everything that can end an invocation before the inspector's own exit code is known.
#[derive(Debug, Error)]
pub enum WrapperError {
    /// Scanning finished without any server command or URL tokens.
    #[error("No server command or URL provided")]
    MissingServerCommand,

    /// A value-taking flag was the last token.
    #[error("Missing value for {flag}")]
    MissingValue {
        /// The flag as typed, e.g. `--button`.
        flag: String,
    },

    /// `--params` was not valid JSON.
    #[error("Error parsing params JSON: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// `--params` was valid JSON but not an object.
    #[error("Error parsing params JSON: expected a JSON object, got {found}")]
    ParamsNotObject {
        /// JSON type name of the rejected value.
        found: &'static str,
    },

    /// clap rejected the wrapper-flag segment.
    #[error("Invalid options: {}", .0.kind())]
    Flags(#[from] clap::Error),

    /// The package runner could not be started.
    #[error("Error running inspector: {source}")]
    Spawn {
        /// Program that failed to launch.
        program: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

impl WrapperError {
    /// Return the process exit code for this error.
    ///
    /// Every wrapper-side failure is terminal and reported as `1`; non-zero
    /// codes other than `1` only ever come from the inspector itself.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingServerCommand
            | Self::MissingValue { .. }
            | Self::InvalidParams(_)
            | Self::ParamsNotObject { .. }
            | Self::Flags(_)
            | Self::Spawn { .. } => 1,
        }
    }

    /// Whether usage text should follow the error message.
    #[must_use]
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::MissingServerCommand | Self::MissingValue { .. })
    }
}
