//! App-wide constants.
//!
//! Centralises the tool name, default file locations and environment
//! variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "buildstamp";

/// Tool version, as printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.buildstamp.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".buildstamp.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "buildstamp";

/// Manifest whose `version` field is maintained.
pub const MANIFEST_FILENAME: &str = "package.json";

/// Default location of the generated build-info module.
pub const BUILD_INFO_PATH: &str = "src/version.ts";

/// Version-control client invoked for commit counting.
pub const GIT_PROGRAM: &str = "git";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_MANIFEST: &str = "BUILDSTAMP_MANIFEST";
pub const ENV_OUTPUT: &str = "BUILDSTAMP_OUTPUT";
pub const ENV_GIT: &str = "BUILDSTAMP_GIT";
pub const ENV_LOG: &str = "BUILDSTAMP_LOG";

/// Reproducible-builds convention: seconds since the Unix epoch.
pub const ENV_SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";
