//! buildstamp: date and commit-count based build versions (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod build_info;
pub mod clock;
pub mod config;
pub mod constants;
pub mod env;
pub mod generate;
pub mod manifest;
pub mod models;
pub mod progress;
pub mod vcs;
pub mod version;
