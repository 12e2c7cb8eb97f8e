//! The generated version string.

use serde::Serialize;
use std::fmt;

/// A build version such as `25.09.03-dev.4`.
///
/// Immutable once built; equality is textual. Construction goes through
/// [`crate::version`], or `From<&str>` for values read back from disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionString(String);

impl VersionString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form shown to users: the part before the first `-`, prefixed
    /// with `v` (`25.09.03-dev.1` becomes `v25.09.03`).
    pub fn display_string(&self) -> String {
        let head = self.0.split('-').next().unwrap_or_default();
        format!("v{head}")
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for VersionString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VersionString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<VersionString> for String {
    fn from(v: VersionString) -> Self {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_string_strips_channel_and_count() {
        let v = VersionString::from("25.09.03-dev.1");
        assert_eq!(v.display_string(), "v25.09.03");
    }

    #[test]
    fn display_string_splits_on_first_dash_only() {
        let v = VersionString::from("25.12.31-release.12-hotfix");
        assert_eq!(v.display_string(), "v25.12.31");
    }

    #[test]
    fn display_string_of_fallback_version() {
        let v = VersionString::from("25.09.03.1-commit");
        assert_eq!(v.display_string(), "v25.09.03.1");
    }

    #[test]
    fn display_string_without_dash_keeps_everything() {
        assert_eq!(VersionString::from("1.2.3").display_string(), "v1.2.3");
    }

    #[test]
    fn serializes_as_plain_string() {
        let v = VersionString::from("25.09.03-beta.3");
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"25.09.03-beta.3\"");
        assert_eq!(v.to_string(), "25.09.03-beta.3");
    }
}
