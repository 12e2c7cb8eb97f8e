//! Source of "now" for version dates and build timestamps.
//!
//! Production code uses [`Clock::from_env`], which honours the
//! `SOURCE_DATE_EPOCH` reproducible-builds convention and otherwise reads
//! the wall clock. Tests pin time with [`Clock::fixed`].

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::constants::ENV_SOURCE_DATE_EPOCH;
use crate::env::Env;

/// Errors resolving the current instant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("invalid SOURCE_DATE_EPOCH value '{0}': expected integer seconds")]
    InvalidEpoch(String),

    #[error("SOURCE_DATE_EPOCH value {0} is out of range")]
    OutOfRange(i64),
}

#[derive(Debug, Clone)]
enum Source {
    System,
    Fixed(DateTime<Local>),
    Epoch(String),
}

/// Injectable time source.
#[derive(Debug, Clone)]
pub struct Clock {
    source: Source,
}

impl Clock {
    /// Read the local wall clock.
    pub fn system() -> Self {
        Self {
            source: Source::System,
        }
    }

    /// Always report the given instant.
    pub fn fixed(at: DateTime<Local>) -> Self {
        Self {
            source: Source::Fixed(at),
        }
    }

    /// Use `SOURCE_DATE_EPOCH` when set, the wall clock otherwise.
    ///
    /// The raw value is validated lazily by [`Clock::now`] so that a bad
    /// value degrades version formatting instead of aborting startup.
    pub fn from_env(env: &Env) -> Self {
        match env.non_empty(ENV_SOURCE_DATE_EPOCH) {
            Some(raw) => Self {
                source: Source::Epoch(raw),
            },
            None => Self::system(),
        }
    }

    /// Sample the current instant.
    pub fn now(&self) -> Result<DateTime<Local>, ClockError> {
        match &self.source {
            Source::System => Ok(Local::now()),
            Source::Fixed(at) => Ok(*at),
            Source::Epoch(raw) => {
                let secs: i64 = raw
                    .parse()
                    .map_err(|_| ClockError::InvalidEpoch(raw.clone()))?;
                DateTime::from_timestamp(secs, 0)
                    .map(|utc| utc.with_timezone(&Local))
                    .ok_or(ClockError::OutOfRange(secs))
            }
        }
    }

    /// Best-effort instant that never fails: the pinned time for a fixed
    /// clock, the wall clock for everything else.
    pub fn wall(&self) -> DateTime<Local> {
        match &self.source {
            Source::Fixed(at) => *at,
            _ => Local::now(),
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let at = Local.with_ymd_and_hms(2025, 9, 3, 14, 30, 0).unwrap();
        let clock = Clock::fixed(at);
        assert_eq!(clock.now().unwrap(), at);
        assert_eq!(clock.wall(), at);
    }

    #[test]
    fn source_date_epoch_is_used_when_set() {
        let env = Env::mock([(ENV_SOURCE_DATE_EPOCH, "1756900000")]);
        let now = Clock::from_env(&env).now().unwrap();
        assert_eq!(now.with_timezone(&Utc), Utc.timestamp_opt(1756900000, 0).unwrap());
    }

    #[test]
    fn blank_source_date_epoch_falls_back_to_system() {
        let env = Env::mock([(ENV_SOURCE_DATE_EPOCH, "  ")]);
        assert!(Clock::from_env(&env).now().is_ok());
    }

    #[test]
    fn non_numeric_epoch_is_rejected() {
        let env = Env::mock([(ENV_SOURCE_DATE_EPOCH, "yesterday")]);
        let err = Clock::from_env(&env).now().unwrap_err();
        assert_eq!(err, ClockError::InvalidEpoch("yesterday".to_string()));
        assert!(err.to_string().contains("SOURCE_DATE_EPOCH"));
    }

    #[test]
    fn out_of_range_epoch_is_rejected() {
        let env = Env::mock([(ENV_SOURCE_DATE_EPOCH, i64::MAX.to_string())]);
        let err = Clock::from_env(&env).now().unwrap_err();
        assert_eq!(err, ClockError::OutOfRange(i64::MAX));
    }
}
