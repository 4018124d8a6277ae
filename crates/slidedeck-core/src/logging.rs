//! File logging
//!
//! The presenter owns the terminal, so logs go to a daily rolling file under
//! the user's data directory. `SLIDEDECK_LOG` takes an `EnvFilter` directive:
//!
//! ```bash
//! SLIDEDECK_LOG=debug slidedeck talk.md
//! SLIDEDECK_LOG=slidedeck_app=trace slidedeck talk.md
//! ```

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

const LOG_ENV: &str = "SLIDEDECK_LOG";
const LOG_FILE_PREFIX: &str = "slidedeck.log";
const DEFAULT_DIRECTIVES: &str =
    "slidedeck=info,slidedeck_core=info,slidedeck_app=info,slidedeck_tui=info,warn";

/// Install the global subscriber. Call once, before anything logs.
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("SlideDeck {} logging to {}", env!("CARGO_PKG_VERSION"), log_dir.display());
    Ok(())
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("slidedeck")
        .join("logs")
}

/// Daily rotation appends the UTC date to the file prefix.
fn log_file_for(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}.{}", LOG_FILE_PREFIX, date.format("%Y-%m-%d")))
}

/// Path of the file today's log lines are written to
pub fn get_current_log_file() -> PathBuf {
    log_file_for(&log_directory(), Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_carries_rotation_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let path = log_file_for(Path::new("/var/log/slidedeck"), date);
        assert_eq!(path, PathBuf::from("/var/log/slidedeck/slidedeck.log.2026-03-07"));
    }

    #[test]
    fn test_current_log_file_lives_in_log_directory() {
        let path = get_current_log_file();
        assert_eq!(path.parent(), Some(log_directory().as_path()));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("slidedeck.log."));
        assert_eq!(name.len(), "slidedeck.log.".len() + "YYYY-MM-DD".len());
    }

    #[test]
    fn test_default_directives_parse() {
        assert!(DEFAULT_DIRECTIVES.parse::<EnvFilter>().is_ok());
    }
}
