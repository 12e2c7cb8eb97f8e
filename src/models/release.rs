//! Release channel tags embedded in version strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Build channel: `dev`, `beta` or `release`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    /// Day-to-day development builds.
    #[default]
    Dev,
    /// Pre-release builds handed to testers.
    Beta,
    /// Production builds.
    Release,
}

/// Rejected release type, raised by strict parsing only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid release type '{given}'. Valid types: {}", ReleaseType::valid_names())]
pub struct ReleaseTypeError {
    pub given: String,
}

impl ReleaseType {
    /// Every release type, in channel order.
    pub const ALL: [ReleaseType; 3] = [ReleaseType::Dev, ReleaseType::Beta, ReleaseType::Release];

    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseType::Dev => "dev",
            ReleaseType::Beta => "beta",
            ReleaseType::Release => "release",
        }
    }

    /// Lenient conversion: anything unrecognised becomes [`ReleaseType::Dev`].
    ///
    /// The CLI validates with [`str::parse`] before this is ever reached;
    /// library callers that skip validation still get a well-formed version.
    pub fn normalize(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    /// Comma-separated list of accepted names, for help and error text.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReleaseType {
    type Err = ReleaseTypeError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ReleaseTypeError {
                given: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_tag() {
        assert_eq!(ReleaseType::Dev.to_string(), "dev");
        assert_eq!(ReleaseType::Beta.to_string(), "beta");
        assert_eq!(ReleaseType::Release.to_string(), "release");
    }

    #[test]
    fn parse_accepts_exact_names() {
        for t in ReleaseType::ALL {
            assert_eq!(t.as_str().parse::<ReleaseType>().unwrap(), t);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Beta".parse::<ReleaseType>().is_err());
        assert!("RELEASE".parse::<ReleaseType>().is_err());
    }

    #[test]
    fn parse_error_lists_valid_types() {
        let err = "alpha".parse::<ReleaseType>().unwrap_err();
        assert_eq!(err.given, "alpha");
        let msg = err.to_string();
        assert!(msg.contains("'alpha'"), "got: {msg}");
        assert!(msg.contains("dev, beta, release"), "got: {msg}");
    }

    #[test]
    fn normalize_falls_back_to_dev() {
        assert_eq!(ReleaseType::normalize("beta"), ReleaseType::Beta);
        assert_eq!(ReleaseType::normalize("alpha"), ReleaseType::Dev);
        assert_eq!(ReleaseType::normalize(""), ReleaseType::Dev);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ReleaseType::Release).unwrap();
        assert_eq!(json, "\"release\"");
        let parsed: ReleaseType = serde_json::from_str("\"beta\"").unwrap();
        assert_eq!(parsed, ReleaseType::Beta);
    }
}
