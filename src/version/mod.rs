//! Version formatting: `YY.MM.DD-<type>.<N>`.

use chrono::{Datelike, NaiveDate};

use crate::clock::Clock;
use crate::models::{ReleaseType, VersionString};
use crate::progress::Reporter;
use crate::vcs::{self, CommitSource};

/// Two-digit year, month and day joined by dots.
fn date_stem(date: NaiveDate) -> String {
    format!(
        "{:02}.{:02}.{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    )
}

/// Build the version string for a given day, channel and commit count.
pub fn format_version(release: ReleaseType, date: NaiveDate, commits: u32) -> VersionString {
    VersionString::from(format!("{}-{release}.{commits}", date_stem(date)))
}

/// Degraded version used when the date cannot be resolved normally.
///
/// Note the layout: `YY.MM.DD.1-commit`, not `YY.MM.DD-<type>.1`.
pub fn fallback_version(date: NaiveDate) -> VersionString {
    VersionString::from(format!("{}.1-commit", date_stem(date)))
}

/// Compute today's version for `release`.
///
/// Unknown release names become `dev`. Version-control failures are
/// absorbed by the commit counter; a clock failure yields
/// [`fallback_version`] for the wall-clock date. Never fails.
pub fn generate_version(
    release: &str,
    clock: &Clock,
    source: &dyn CommitSource,
    reporter: &dyn Reporter,
) -> VersionString {
    let release = ReleaseType::normalize(release);
    match clock.now() {
        Ok(now) => {
            let today = now.date_naive();
            let commits = vcs::count_commits_today(source, today, reporter);
            format_version(release, today, commits)
        }
        Err(e) => {
            tracing::warn!(error = %e, "falling back to degraded version");
            let version = fallback_version(clock.wall().date_naive());
            reporter.warn(&format!("Could not determine build date ({e}); using {version}"));
            version
        }
    }
}
