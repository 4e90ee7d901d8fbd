//! Errors surfaced by the `argscan` binary.

use std::path::PathBuf;

use argscan_core::UsageError;
use thiserror::Error;

/// Exit status for usage errors in the scanned tokens.
pub const EXIT_USAGE: i32 = 2;

/// Exit status for every other failure.
pub const EXIT_FAILURE: i32 = 1;

/// Everything that can go wrong while running the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The flag table file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The scanned tokens are not valid for the flag table.
    #[error(transparent)]
    Usage(#[from] UsageError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
