//! Build metadata captured when the build-info module is written.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::Serialize;

use super::VersionString;

/// Version plus the instant the build-info file was generated.
///
/// `date` and `timestamp` come from the same sample. That sample is taken
/// after the version string was formatted, so near midnight the date in
/// `version` can lag the date in `date` by a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: VersionString,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub date: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl BuildInfo {
    pub fn at(version: VersionString, instant: DateTime<Local>) -> Self {
        let utc = instant.with_timezone(&Utc);
        Self {
            version,
            date: utc.to_rfc3339_opts(SecondsFormat::Millis, true),
            timestamp: utc.timestamp_millis(),
        }
    }

    /// The build instant rendered in the local timezone's preferred format.
    pub fn formatted_date(&self) -> String {
        DateTime::from_timestamp_millis(self.timestamp)
            .map(|utc| utc.with_timezone(&Local).format("%c").to_string())
            .unwrap_or_default()
    }

    pub fn display_version(&self) -> String {
        self.version.display_string()
    }
}
