//! buildstamp: date and commit-count based build versions.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use buildstamp::clock::Clock;
use buildstamp::config::Config;
use buildstamp::constants;
use buildstamp::env::Env;
use buildstamp::generate::{self, GenerateOptions};
use buildstamp::models::ReleaseType;
use buildstamp::progress::TerminalReporter;
use buildstamp::vcs::git::GitCli;

use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::args::Cli;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    if cli.help {
        cli::print_help().context("failed to print help")?;
        return Ok(());
    }
    if cli.version {
        println!("{}", cli::version_line());
        return Ok(());
    }

    let release: ReleaseType = cli
        .release
        .as_deref()
        .unwrap_or(ReleaseType::Dev.as_str())
        .parse()?;

    let env = Env::real();
    init_tracing(&env);

    let work_dir = std::fs::canonicalize(&cli.path)
        .with_context(|| format!("--path directory not found: {}", cli.path.display()))?;

    let mut config =
        Config::load(Some(&work_dir), &env).context("failed to load configuration")?;
    if let Some(manifest) = cli.manifest {
        config.manifest.path = manifest;
    }
    if let Some(output) = cli.output {
        config.build_info.path = output;
    }

    let options = GenerateOptions {
        release,
        manifest_path: config.manifest_path(&work_dir),
        build_info_path: config.build_info_path(&work_dir),
        dry_run: cli.dry_run,
    };
    let clock = Clock::from_env(&env);
    let git = GitCli::new(config.git.program.as_str(), &work_dir);
    let reporter = TerminalReporter::new(!cli.quiet);

    let outcome = generate::generate(&options, &clock, &git, &reporter);
    if !outcome.is_success() {
        bail!("version {} generated, but not every file was written", outcome.version);
    }

    // The only line on stdout, for calling scripts.
    println!("{}", outcome.version);
    Ok(())
}

/// Diagnostics on stderr, filtered by `BUILDSTAMP_LOG` (off by default).
fn init_tracing(env: &Env) {
    let filter = env
        .non_empty(constants::ENV_LOG)
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
