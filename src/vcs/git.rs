//! Git CLI wrapper for listing commits.
//!
//! Shells out to `git log` via `std::process::Command`. The call blocks
//! until git exits; there is no timeout.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{CommitSource, DayRange, VcsError};

/// Date format git accepts for `--since` / `--until`, read as local time.
const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Commit source backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    repo_dir: PathBuf,
}

impl GitCli {
    /// Query the repository containing `repo_dir` using `program`.
    pub fn new(program: impl Into<String>, repo_dir: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            repo_dir: repo_dir.as_ref().to_path_buf(),
        }
    }
}

impl CommitSource for GitCli {
    fn commits_in_range(&self, range: &DayRange) -> Result<Vec<String>, VcsError> {
        let since = format!("--since={}", range.start.format(GIT_DATE_FORMAT));
        let until = format!("--until={}", range.end.format(GIT_DATE_FORMAT));
        tracing::debug!(program = %self.program, dir = %self.repo_dir.display(), %since, %until, "running git log");

        let output = Command::new(&self.program)
            .args(["log", "--format=%H", &since, &until])
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|e| VcsError::Unavailable(format!("failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VcsError::CommandFailed(format!(
                "git log failed ({}): {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| VcsError::InvalidOutput(format!("git output is not valid UTF-8: {e}")))?;
        Ok(parse_log_output(&stdout))
    }
}

/// One commit hash per non-blank line.
fn parse_log_output(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
