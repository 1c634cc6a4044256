//! # Debug Logging
//!
//! A `log` backend that writes to a file instead of stdout/stderr, so log
//! output never tears the TUI.
//!
//! Controlled by `--log-level` or the `PS1_STUDIO_LOG` environment variable
//! (`off`, `error`, `warn`, `info`, `debug`, `trace`). Output goes to
//! `ps1_studio_debug.log` in the system temp directory.

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

pub const LOG_ENV_VAR: &str = "PS1_STUDIO_LOG";

struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        let mut file = self.file.lock();
        let _ = file.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.file.lock().flush();
    }
}

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("ps1_studio_debug.log")
}

/// Parse a level name. Unknown names yield `None`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse::<LevelFilter>().ok()
}

/// Resolve the level from an explicit flag, then the environment, else off.
pub fn resolve_level(flag: Option<&str>) -> LevelFilter {
    flag.map(str::to_string)
        .or_else(|| std::env::var(LOG_ENV_VAR).ok())
        .and_then(|name| parse_level(&name))
        .unwrap_or(LevelFilter::Off)
}

/// Install the file logger. Does nothing when `level` is `Off`.
pub fn init(level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let path = log_path();
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    log::set_boxed_logger(Box::new(FileLogger {
        level,
        file: Mutex::new(file),
    }))
    .context("Logger already installed")?;
    log::set_max_level(level);

    log::info!("ps1-studio {} debug session (level={level})", env!("CARGO_PKG_VERSION"));
    Ok(())
}
