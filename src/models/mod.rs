//! Shared types used across all modules.
//!
//! The release channel, the generated version string and the build-info
//! record live here so the formatter, the writers and the CLI agree on a
//! single representation.

pub mod build_info;
pub mod release;
pub mod version;

pub use build_info::BuildInfo;
pub use release::{ReleaseType, ReleaseTypeError};
pub use version::VersionString;
