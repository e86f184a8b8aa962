//! Failures of a generation run and the exit codes they map to

use std::path::PathBuf;
use std::time::Duration;

/// Exit code for invalid or unknown configuration
pub const INVALID_OPTIONS_EXIT_CODE: i32 = -1;
/// Exit code for git failures that do not carry an exit code of their own
pub const GIT_UNUSABLE_EXIT_CODE: i32 = -2;
/// Exit code for output write failures
pub const WRITE_FAILED_EXIT_CODE: i32 = -3;
/// Exit code for any other internal failure
pub const INTERNAL_EXIT_CODE: i32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Invalid '{key}' argument. '{value}' [valid values: {allowed}]")]
    InvalidOption {
        key: &'static str,
        value: String,
        allowed: &'static str,
    },
    #[error("Unknown argument '{0}'.")]
    UnknownOption(String),
    #[error("git failed and returned exit code {0}")]
    GitFailed(i32),
    #[error("git could not be started: {0}")]
    GitUnavailable(#[source] std::io::Error),
    #[error("git was terminated before reporting an exit code")]
    GitTerminated,
    #[error("git did not finish within {} seconds", .0.as_secs())]
    GitTimedOut(Duration),
    #[error("git returned a malformed commit hash '{0}'")]
    MalformedHash(String),
    #[error("{source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenerateError {
    pub fn invalid_option(key: &'static str, value: &str, allowed: &'static str) -> Self {
        GenerateError::InvalidOption {
            key,
            value: value.to_string(),
            allowed,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateError::InvalidOption { .. } | GenerateError::UnknownOption(_) => {
                INVALID_OPTIONS_EXIT_CODE
            }
            GenerateError::GitFailed(code) => *code,
            GenerateError::GitUnavailable(_)
            | GenerateError::GitTerminated
            | GenerateError::GitTimedOut(_)
            | GenerateError::MalformedHash(_) => GIT_UNUSABLE_EXIT_CODE,
            GenerateError::Write { .. } => WRITE_FAILED_EXIT_CODE,
            GenerateError::Other(_) => INTERNAL_EXIT_CODE,
        }
    }
}
