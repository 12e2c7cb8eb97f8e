//! Clap argument types.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Stamp a date and commit-count based version into package.json and a
/// generated build-info module.
#[derive(Parser, Debug)]
#[command(
    name = "buildstamp",
    disable_help_flag = true,
    disable_version_flag = true,
    after_help = super::RELEASE_TYPES_HELP,
)]
pub struct Cli {
    /// Release type: dev, beta or release [default: dev].
    #[arg(value_name = "TYPE")]
    pub release: Option<String>,

    /// Working directory: where package.json, the config file and the git
    /// repository are looked up.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Manifest to update, relative to --path.
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Build-info module to write (.ts, .js or .mjs), relative to --path.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the version without writing any file.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Suppress progress output on stderr.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Print help.
    #[arg(short = 'h', long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::SetTrue)]
    pub version: bool,
}
