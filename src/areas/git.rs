//! Access to the `git` executable
//!
//! Only one question is ever asked: what is the hash of the latest commit
//! reachable from HEAD? The answer comes from
//! `git log -n 1 --pretty=format:%h` (or `%H` for the full hash), run in the
//! repository directory with stdout captured and stderr passed through.

use crate::artifacts::hash::commit_hash::CommitHash;
use crate::artifacts::options::choice::HashLength;
use crate::errors::GenerateError;
use derive_new::new;
use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

const DEFAULT_GIT_EXECUTABLE: &str = "git";

#[derive(Debug, new)]
pub struct Git {
    /// Directory git is run in
    path: Box<Path>,
    #[new(value = "DEFAULT_GIT_EXECUTABLE.into()")]
    executable: OsString,
}

impl Git {
    pub fn with_executable(mut self, executable: impl Into<OsString>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Hash of the current HEAD commit.
    ///
    /// A non-zero git exit is reported as [`GenerateError::GitFailed`] carrying
    /// git's own exit code. When `timeout` elapses the child is killed.
    pub async fn head_commit_hash(
        &self,
        length: HashLength,
        timeout: Option<Duration>,
    ) -> Result<CommitHash, GenerateError> {
        let pretty = format!("--pretty={}", length.pretty_format());

        let mut command = Command::new(&self.executable);
        command
            .args(["log", "-n", "1", pretty.as_str()])
            .current_dir(&self.path)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        tracing::debug!(
            executable = ?self.executable,
            path = %self.path.display(),
            format = length.pretty_format(),
            "running git log"
        );

        let output = match timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| GenerateError::GitTimedOut(limit))?,
            None => command.output().await,
        }
        .map_err(GenerateError::GitUnavailable)?;

        if !output.status.success() {
            return Err(match output.status.code() {
                Some(code) => GenerateError::GitFailed(code),
                None => GenerateError::GitTerminated,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let hash = CommitHash::try_parse(&stdout).map_err(|err| {
            tracing::debug!(error = %err, "rejected git output");
            GenerateError::MalformedHash(stdout.trim().to_string())
        })?;

        tracing::debug!(hash = %hash, "resolved HEAD commit");
        Ok(hash)
    }
}
