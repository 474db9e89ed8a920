//! Logging infrastructure for the courtside library.
//!
//! Library code logs through the `log` macros. [`init_logger`] installs a
//! stderr [`Logger`] as the `log` backend at the level picked from CLI flags
//! or the `COURTSIDE_LOG_MODE` environment variable.

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable selecting the log level when no flag is given.
pub const LOG_MODE_ENV: &str = "COURTSIDE_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// # Examples
///
/// ```
/// use courtside::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all log output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything down to debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses "quiet", "normal" or "verbose", case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use courtside::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// Returns the most verbose `log` level shown at this setting.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A stderr logger backing the `log` facade.
///
/// # Examples
///
/// ```
/// use courtside::{LogLevel, Logger};
/// use log::Log;
///
/// let logger = Logger::new(LogLevel::Normal);
/// let warn = log::Metadata::builder().level(log::Level::Warn).build();
/// let info = log::Metadata::builder().level(log::Level::Info).build();
/// assert!(logger.enabled(&warn));
/// assert!(!logger.enabled(&info));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Picks the log level from CLI flags, then `COURTSIDE_LOG_MODE`, then the
/// default.
///
/// `verbose` wins when both flags are set. An unrecognized environment
/// value is ignored.
#[must_use]
pub fn resolve_log_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal)
}

/// Installs the stderr logger at the resolved level and returns the level.
///
/// Only the first call installs the backend; later calls just adjust the
/// maximum level.
///
/// # Examples
///
/// ```
/// use courtside::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(false, true), LogLevel::Quiet);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = resolve_log_level(verbose, quiet);
    // Already installed by an earlier call.
    let _ = log::set_boxed_logger(Box::new(Logger::new(level)));
    log::set_max_level(level.filter());
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_log_mode<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        let result = f();
        match saved {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        result
    }

    #[test]
    fn test_log_level_display_and_parse() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(LogLevel::parse(&level.to_string()).unwrap(), level);
        }
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_filters() {
        assert_eq!(LogLevel::Quiet.filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_logger_enabled() {
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let error = Metadata::builder().level(log::Level::Error).build();

        assert!(Logger::new(LogLevel::Verbose).enabled(&debug));
        assert!(!Logger::new(LogLevel::Normal).enabled(&debug));
        assert!(Logger::default().enabled(&error));
        assert!(!Logger::new(LogLevel::Quiet).enabled(&error));
    }

    #[test]
    #[serial]
    fn test_resolve_defaults_to_normal() {
        let level = with_log_mode(None, || resolve_log_level(false, false));
        assert_eq!(level, LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_resolve_from_env() {
        assert_eq!(
            with_log_mode(Some("verbose"), || resolve_log_level(false, false)),
            LogLevel::Verbose
        );
        assert_eq!(
            with_log_mode(Some("quiet"), || resolve_log_level(false, false)),
            LogLevel::Quiet
        );
        assert_eq!(
            with_log_mode(Some("shouting"), || resolve_log_level(false, false)),
            LogLevel::Normal
        );
    }

    #[test]
    #[serial]
    fn test_flags_override_env() {
        let level = with_log_mode(Some("quiet"), || resolve_log_level(true, false));
        assert_eq!(level, LogLevel::Verbose);

        let level = with_log_mode(Some("verbose"), || resolve_log_level(false, true));
        assert_eq!(level, LogLevel::Quiet);

        assert_eq!(resolve_log_level(true, true), LogLevel::Verbose);
    }
}
