//! # Logging
//!
//! Library code logs through the `log` facade. The CLI installs
//! [`StderrLogger`], whose level comes from `-v` flags or the
//! `THAIPRINT_LOG` environment variable:
//!
//! | Value | Level |
//! |-------|-------|
//! | `off` | nothing |
//! | `error` | errors only (default) |
//! | `warn` | lines wider than the paper |
//! | `info` | device opened |
//! | `debug` | per-line and per-write details |
//! | `trace` | every unmapped character |
//!
//! Output goes to stderr so raw printer bytes on stdout stay clean.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable read by [`level_from_env`]
pub const ENV_VAR: &str = "THAIPRINT_LOG";

/// Writes `[LEVEL] target: message` lines to stderr.
pub struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{:<5}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parse a level name as used in `THAIPRINT_LOG`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Level from `THAIPRINT_LOG`, if set and valid.
pub fn level_from_env() -> Option<LevelFilter> {
    std::env::var(ENV_VAR).ok().as_deref().and_then(parse_level)
}

/// Level for a number of `-v` flags.
pub fn level_from_verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install [`StderrLogger`] as the global logger.
///
/// Only the first call has any effect.
pub fn init(level: LevelFilter) {
    let logger = Box::new(StderrLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_from_verbosity(0), LevelFilter::Error);
        assert_eq!(level_from_verbosity(1), LevelFilter::Warn);
        assert_eq!(level_from_verbosity(3), LevelFilter::Debug);
        assert_eq!(level_from_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = StderrLogger {
            level: LevelFilter::Warn,
        };
        let warn = Metadata::builder().level(log::Level::Warn).build();
        let debug = Metadata::builder().level(log::Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }
}
