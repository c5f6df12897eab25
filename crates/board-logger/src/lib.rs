//! Board Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer and
//! forwards each one to the browser console (stderr off the web).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Records kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<&'static BoardLogger> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct BoardLogger {
    level: LevelFilter,
    capacity: usize,
    entries: Mutex<VecDeque<LogEntry>>,
    echo: bool,
}

impl BoardLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            entries: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            echo: true,
        }
    }

    /// Keep records in the buffer only, without writing them anywhere
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, entry: LogEntry) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }
}

impl Log for BoardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if self.echo {
            sink::write(&entry);
        }
        self.push(entry);
    }

    fn flush(&self) {}
}

/// Install the board logger as the global `log` backend
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger: &'static BoardLogger = Box::leak(Box::new(BoardLogger::new(level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    let _ = LOGGER.set(logger);
    Ok(())
}

/// Records held by the installed logger; empty before `init`
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(|logger| logger.recent()).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::LogEntry;
    use log::Level;
    use wasm_bindgen::JsValue;

    pub fn write(entry: &LogEntry) {
        let line = JsValue::from_str(&entry.to_string());
        match entry.level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::LogEntry;

    pub fn write(entry: &LogEntry) {
        eprintln!("{}", entry);
    }
}
