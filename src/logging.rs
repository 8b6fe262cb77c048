#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "BULLS_LOG";

/// Parse a level name, falling back to `info` when missing or invalid.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging with a level taken from the `BULLS_LOG` environment variable.
/// Lines are written to stderr. Returns `false` if a logger was already set.
pub fn init_logging() -> bool {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(level);
            log::debug!("logger installed at level {}", level);
            true
        }
        Err(_) => false,
    }
}
