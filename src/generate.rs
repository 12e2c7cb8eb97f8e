//! One generation run: count commits, format the version, then update the
//! manifest and write the build-info module.
//!
//! The two writes are independent. A failure in one is recorded in the
//! [`GenerateOutcome`] and reported, and the other still runs. Nothing is
//! rolled back.

use std::path::PathBuf;

use crate::build_info::{self, BuildInfoError};
use crate::clock::Clock;
use crate::manifest::{self, ManifestError, ManifestUpdate};
use crate::models::{BuildInfo, ReleaseType, VersionString};
use crate::progress::Reporter;
use crate::vcs::CommitSource;
use crate::version;

/// Inputs of a run. Paths are used as given.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub release: ReleaseType,
    pub manifest_path: PathBuf,
    pub build_info_path: PathBuf,
    /// Compute and report the version without touching any file.
    pub dry_run: bool,
}

/// What a run produced.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub version: VersionString,
    /// `None` on a dry run.
    pub manifest: Option<Result<ManifestUpdate, ManifestError>>,
    /// `None` on a dry run.
    pub build_info: Option<Result<BuildInfo, BuildInfoError>>,
}

impl GenerateOutcome {
    /// True unless a write step was attempted and failed.
    pub fn is_success(&self) -> bool {
        !matches!(self.manifest, Some(Err(_))) && !matches!(self.build_info, Some(Err(_)))
    }
}

/// Run the whole pipeline.
pub fn generate(
    options: &GenerateOptions,
    clock: &Clock,
    source: &dyn CommitSource,
    reporter: &dyn Reporter,
) -> GenerateOutcome {
    reporter.step(&format!("Generating {} version", options.release));
    let version = version::generate_version(options.release.as_str(), clock, source, reporter);
    reporter.success(&format!("Version: {version}"));

    if options.dry_run {
        match manifest::read_version(&options.manifest_path) {
            Ok(Some(current)) => reporter.step(&format!(
                "Dry run: {} is at {current}; nothing written",
                options.manifest_path.display()
            )),
            Ok(None) => reporter.step("Dry run: nothing written"),
            Err(e) => {
                reporter.warn(&format!("Manifest would not be updated: {e}"));
                reporter.step("Dry run: nothing written");
            }
        }
        return GenerateOutcome {
            version,
            manifest: None,
            build_info: None,
        };
    }

    let manifest = update_manifest(options, &version, reporter);
    let build_info = write_build_info(options, &version, clock, reporter);

    GenerateOutcome {
        version,
        manifest: Some(manifest),
        build_info: Some(build_info),
    }
}

fn update_manifest(
    options: &GenerateOptions,
    version: &VersionString,
    reporter: &dyn Reporter,
) -> Result<ManifestUpdate, ManifestError> {
    let path = &options.manifest_path;
    let result = manifest::update_version(path, version);
    match &result {
        Ok(update) => {
            let change = match &update.previous {
                Some(prev) => format!("{prev} -> {version}"),
                None => version.to_string(),
            };
            reporter.success(&format!("Updated {}: {change}", path.display()));
        }
        Err(
            e @ (ManifestError::Missing(_)
            | ManifestError::Parse { .. }
            | ManifestError::NotAnObject(_)),
        ) => {
            tracing::warn!(error = %e, "manifest update skipped");
            reporter.warn(&format!("Skipped manifest update: {e}"));
        }
        Err(e) => {
            tracing::error!(error = %e, "manifest update failed");
            reporter.error(&format!("Manifest update failed: {e}"));
        }
    }
    result
}

fn write_build_info(
    options: &GenerateOptions,
    version: &VersionString,
    clock: &Clock,
    reporter: &dyn Reporter,
) -> Result<BuildInfo, BuildInfoError> {
    let path = &options.build_info_path;
    let at = match clock.now() {
        Ok(at) => at,
        Err(e) => {
            tracing::warn!(error = %e, "build time falls back to wall clock");
            reporter.warn(&format!("Could not determine build time ({e}); using the system clock"));
            clock.wall()
        }
    };
    let result = build_info::write_build_info(path, version, &Clock::fixed(at));
    match &result {
        Ok(_) => reporter.success(&format!("Wrote {}", path.display())),
        Err(e) => {
            tracing::error!(error = %e, "build info write failed");
            reporter.error(&format!("Build info write failed: {e}"));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Env;
    use crate::progress::{Level, MemoryReporter};
    use crate::vcs::{DayRange, VcsError};
    use chrono::{Local, TimeZone};
    use std::fs;
    use std::path::Path;

    struct TwoCommits;

    impl CommitSource for TwoCommits {
        fn commits_in_range(&self, _range: &DayRange) -> Result<Vec<String>, VcsError> {
            Ok(vec!["a".to_string(), "b".to_string()])
        }
    }

    fn clock() -> Clock {
        Clock::fixed(Local.with_ymd_and_hms(2025, 9, 3, 16, 45, 0).unwrap())
    }

    fn options(dir: &Path, dry_run: bool) -> GenerateOptions {
        GenerateOptions {
            release: ReleaseType::Beta,
            manifest_path: dir.join("package.json"),
            build_info_path: dir.join("src").join("version.ts"),
            dry_run,
        }
    }

    #[test]
    fn writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name":"app","version":"1.0.0"}"#).unwrap();
        let reporter = MemoryReporter::new();

        let outcome = generate(&options(dir.path(), false), &clock(), &TwoCommits, &reporter);
        assert_eq!(outcome.version.as_str(), "25.09.03-beta.2");
        assert!(outcome.is_success());
        let update = outcome.manifest.unwrap().unwrap();
        assert_eq!(update.previous.as_deref(), Some("1.0.0"));
        assert!(dir.path().join("src/version.ts").exists());

        let successes = reporter.messages(Level::Success);
        assert!(successes.iter().any(|m| m.contains("1.0.0 -> 25.09.03-beta.2")), "got: {successes:?}");
    }

    #[test]
    fn missing_manifest_does_not_block_build_info() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = MemoryReporter::new();

        let outcome = generate(&options(dir.path(), false), &clock(), &TwoCommits, &reporter);
        assert!(!outcome.is_success());
        assert!(matches!(outcome.manifest, Some(Err(ManifestError::Missing(_)))));
        assert!(matches!(outcome.build_info, Some(Ok(_))));
        assert!(dir.path().join("src/version.ts").exists());
        assert_eq!(reporter.messages(Level::Warning).len(), 1);
    }

    #[test]
    fn build_info_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        let mut opts = options(dir.path(), false);
        opts.build_info_path = dir.path().join("version.txt");
        let reporter = MemoryReporter::new();

        let outcome = generate(&opts, &clock(), &TwoCommits, &reporter);
        assert!(!outcome.is_success());
        assert!(matches!(outcome.manifest, Some(Ok(_))));
        assert_eq!(reporter.messages(Level::Error).len(), 1);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = r#"{"version":"25.09.02-dev.9"}"#;
        fs::write(dir.path().join("package.json"), manifest).unwrap();
        let reporter = MemoryReporter::new();

        let outcome = generate(&options(dir.path(), true), &clock(), &TwoCommits, &reporter);
        assert_eq!(outcome.version.as_str(), "25.09.03-beta.2");
        assert!(outcome.is_success());
        assert!(outcome.manifest.is_none());
        assert!(outcome.build_info.is_none());
        assert_eq!(fs::read_to_string(dir.path().join("package.json")).unwrap(), manifest);
        assert!(!dir.path().join("src").exists());
        assert!(
            reporter
                .messages(Level::Step)
                .iter()
                .any(|m| m.contains("25.09.02-dev.9")),
        );
    }

    #[test]
    fn invalid_epoch_still_writes_matching_build_info() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"version":"1.0.0"}"#).unwrap();
        let clock = Clock::from_env(&Env::mock([("SOURCE_DATE_EPOCH", "last-tuesday")]));
        let reporter = MemoryReporter::new();

        let outcome = generate(&options(dir.path(), false), &clock, &TwoCommits, &reporter);
        assert!(outcome.is_success(), "errors: {:?}", reporter.messages(Level::Error));
        assert!(outcome.version.as_str().ends_with(".1-commit"), "got: {}", outcome.version);

        let manifest = manifest::read_version(&dir.path().join("package.json")).unwrap();
        assert_eq!(manifest.as_deref(), Some(outcome.version.as_str()));
        let module = fs::read_to_string(dir.path().join("src/version.ts")).unwrap();
        assert!(module.contains(&format!("export const VERSION = \"{}\";", outcome.version)));
        assert_eq!(reporter.messages(Level::Warning).len(), 2);
        assert!(reporter.messages(Level::Error).is_empty());
    }

    #[test]
    fn dry_run_warns_about_unreadable_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "{ \"name\": ").unwrap();
        let reporter = MemoryReporter::new();

        let outcome = generate(&options(dir.path(), true), &clock(), &TwoCommits, &reporter);
        assert!(outcome.is_success());
        let warnings = reporter.messages(Level::Warning);
        assert_eq!(warnings.len(), 1, "got: {warnings:?}");
        assert!(warnings[0].contains("failed to parse manifest"), "got: {warnings:?}");
    }

    #[test]
    fn dry_run_warns_about_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = MemoryReporter::new();

        generate(&options(dir.path(), true), &clock(), &TwoCommits, &reporter);
        let warnings = reporter.messages(Level::Warning);
        assert!(warnings.iter().any(|m| m.contains("manifest not found")), "got: {warnings:?}");
    }
}
