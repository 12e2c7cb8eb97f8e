//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `.buildstamp.toml` in the working directory
//! 4. `~/.config/buildstamp/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub manifest: ManifestConfig,
    pub build_info: BuildInfoConfig,
    pub git: GitConfig,
}

/// Location of the JSON manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Relative paths resolve against the working directory.
    pub path: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(constants::MANIFEST_FILENAME),
        }
    }
}

/// Location of the generated build-info module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildInfoConfig {
    /// Relative paths resolve against the working directory.
    pub path: PathBuf,
}

impl Default for BuildInfoConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(constants::BUILD_INFO_PATH),
        }
    }
}

/// Version-control client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Executable name or path.
    pub program: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: constants::GIT_PROGRAM.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `work_dir`'s local config, then
    /// applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        Self::load_layers(Self::global_config_path().as_deref(), work_dir, env)
    }

    fn load_layers(
        global_path: Option<&Path>,
        work_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                let global = Self::load_file(global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        if other.manifest != ManifestConfig::default() {
            self.manifest = other.manifest;
        }
        if other.build_info != BuildInfoConfig::default() {
            self.build_info = other.build_info;
        }
        if other.git != GitConfig::default() {
            self.git = other.git;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(constants::ENV_MANIFEST) {
            self.manifest.path = PathBuf::from(val);
        }
        if let Some(val) = env.non_empty(constants::ENV_OUTPUT) {
            self.build_info.path = PathBuf::from(val);
        }
        if let Some(val) = env.non_empty(constants::ENV_GIT) {
            self.git.program = val;
        }
    }

    /// Manifest location resolved against `work_dir`.
    pub fn manifest_path(&self, work_dir: &Path) -> PathBuf {
        work_dir.join(&self.manifest.path)
    }

    /// Build-info location resolved against `work_dir`.
    pub fn build_info_path(&self, work_dir: &Path) -> PathBuf {
        work_dir.join(&self.build_info.path)
    }
}
