//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for argument definitions. `--help` and
//! `--version` are plain flags handled in `main` so that help always wins
//! when both are given.

pub mod args;

use clap::CommandFactory;

use args::Cli;

/// Appended to `--help` output.
pub const RELEASE_TYPES_HELP: &str = "\
Release types:
  dev      Development build (default)
  beta     Pre-release build for testers
  release  Production build

Version format: YY.MM.DD-<type>.<commits today>, e.g. 25.09.03-beta.3";

/// Print usage to stdout.
pub fn print_help() -> std::io::Result<()> {
    Cli::command().print_help()
}

/// One-line tool name and version.
pub fn version_line() -> String {
    format!(
        "{} {}",
        buildstamp::constants::APP_NAME,
        buildstamp::constants::VERSION
    )
}
