//! `package.json` version field maintenance.
//!
//! The whole document is parsed and written back; only the top-level
//! `version` key changes. Key order survives because `serde_json` is built
//! with `preserve_order`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::VersionString;

/// Errors reading or rewriting the manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("manifest not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read manifest {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("manifest {} is not a JSON object", .0.display())]
    NotAnObject(PathBuf),

    #[error("failed to serialize manifest {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write manifest {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Result of a successful [`update_version`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestUpdate {
    pub path: PathBuf,
    /// The `version` value before the update, if the field existed.
    pub previous: Option<String>,
}

fn load(path: &Path) -> Result<Map<String, Value>, ManifestError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ManifestError::Missing(path.to_path_buf()),
        _ => ManifestError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    let doc: Value = serde_json::from_str(&content).map_err(|e| ManifestError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    match doc {
        Value::Object(map) => Ok(map),
        _ => Err(ManifestError::NotAnObject(path.to_path_buf())),
    }
}

fn version_text(value: &Value) -> String {
    value
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// Current `version` of the manifest at `path`, if any.
pub fn read_version(path: &Path) -> Result<Option<String>, ManifestError> {
    Ok(load(path)?.get("version").map(version_text))
}

/// Set the top-level `version` field (adding it if absent) and rewrite the
/// file with 2-space indentation and a trailing newline.
pub fn update_version(path: &Path, version: &VersionString) -> Result<ManifestUpdate, ManifestError> {
    let mut doc = load(path)?;
    let previous = doc
        .insert("version".to_string(), Value::String(version.to_string()))
        .map(|old| version_text(&old));

    let mut rendered =
        serde_json::to_string_pretty(&Value::Object(doc)).map_err(|e| ManifestError::Serialize {
            path: path.to_path_buf(),
            source: e,
        })?;
    rendered.push('\n');

    fs::write(path, rendered).map_err(|e| ManifestError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), %version, ?previous, "manifest updated");

    Ok(ManifestUpdate {
        path: path.to_path_buf(),
        previous,
    })
}
