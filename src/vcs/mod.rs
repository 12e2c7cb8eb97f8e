//! Commit counting: the version-control capability and the counter built on it.
//!
//! The counter only sees the [`CommitSource`] trait, so tests substitute an
//! in-memory source for the real `git` client in [`git::GitCli`].

pub mod git;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::progress::Reporter;

/// Count substituted when the version-control query cannot run.
pub const DEFAULT_COMMIT_COUNT: u32 = 1;

/// Errors from the version-control query.
#[derive(Error, Debug)]
pub enum VcsError {
    #[error("version control unavailable: {0}")]
    Unavailable(String),

    #[error("version control query failed: {0}")]
    CommandFailed(String),

    #[error("unreadable version control output: {0}")]
    InvalidOutput(String),
}

/// Inclusive local-time bounds of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DayRange {
    /// `date 00:00:00` through `date 23:59:59`.
    pub fn of(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN);
        let end = date.and_hms_opt(23, 59, 59).unwrap_or(start);
        Self { start, end }
    }
}

/// Anything that can list the commits recorded within a time range.
pub trait CommitSource {
    /// Identifiers of the commits whose timestamps fall inside `range`.
    fn commits_in_range(&self, range: &DayRange) -> Result<Vec<String>, VcsError>;
}

/// Number of commits recorded on `today`, never less than 1.
///
/// A failed query is reported as a warning and counts as
/// [`DEFAULT_COMMIT_COUNT`]. Blank entries are ignored, so an empty result
/// counts as zero before the floor is applied.
pub fn count_commits_today(
    source: &dyn CommitSource,
    today: NaiveDate,
    reporter: &dyn Reporter,
) -> u32 {
    let range = DayRange::of(today);
    let raw = match source.commits_in_range(&range) {
        Ok(commits) => {
            let n = commits.iter().filter(|c| !c.trim().is_empty()).count();
            u32::try_from(n).unwrap_or(u32::MAX)
        }
        Err(e) => {
            tracing::warn!(error = %e, "commit count unavailable");
            reporter.warn(&format!(
                "Could not count today's commits ({e}); using {DEFAULT_COMMIT_COUNT}"
            ));
            DEFAULT_COMMIT_COUNT
        }
    };
    tracing::debug!(%today, raw, "counted commits");
    raw.max(1)
}
