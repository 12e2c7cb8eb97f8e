//! Generated build-info module: version, build date and helper functions.
//!
//! The target language is picked from the output file extension:
//! `.ts` for TypeScript, `.js` / `.mjs` for a JavaScript ES module.

pub mod render;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::clock::{Clock, ClockError};
use crate::models::{BuildInfo, VersionString};

/// Errors writing the build-info module.
#[derive(Error, Debug)]
pub enum BuildInfoError {
    #[error("unsupported build-info file type: {path} (expected .ts, .js or .mjs)")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write build info {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read build time: {0}")]
    Clock(#[from] ClockError),
}

/// Output language of the build-info module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    TypeScript,
    JavaScript,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, BuildInfoError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ts") => Ok(Format::TypeScript),
            Some("js" | "mjs") => Ok(Format::JavaScript),
            _ => Err(BuildInfoError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Write the build-info module for `version` to `path`.
///
/// Missing parent directories are created and any existing file is
/// overwritten. The build instant is sampled once, here.
pub fn write_build_info(
    path: &Path,
    version: &VersionString,
    clock: &Clock,
) -> Result<BuildInfo, BuildInfoError> {
    let format = Format::from_path(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BuildInfoError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let info = BuildInfo::at(version.clone(), clock.now()?);
    fs::write(path, render::render(&info, format)).map_err(|e| BuildInfoError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), %version, timestamp = info.timestamp, "build info written");

    Ok(info)
}
