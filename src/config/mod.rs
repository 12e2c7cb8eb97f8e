//! Configuration loading and layering.
//!
//! Handles `.buildstamp.toml` loading, environment variable resolution,
//! and the defaults CLI flags are merged over.

pub mod loader;

pub use loader::{BuildInfoConfig, Config, ConfigError, GitConfig, ManifestConfig};
