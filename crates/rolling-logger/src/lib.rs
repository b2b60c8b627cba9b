//! Rolling file logger with an in-memory ring buffer.
//!
//! `init_logger` installs a global `tracing` subscriber that writes to
//! `<dir>/<app>.log` and to stderr. The file is rotated by size into
//! `<app>.1.log` .. `<app>.N.log` (1 is the newest archive). `log` records
//! are bridged into the same subscriber, so crates using either facade end
//! up in one place. The most recent lines are kept in memory for
//! `recent_lines`.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, format::Writer, time::FormatTime};
use tracing_subscriber::prelude::*;

pub const DEFAULT_MAX_FILE_BYTES: u64 = 1024 * 1024;
pub const DEFAULT_MAX_FILES: usize = 5;
pub const DEFAULT_BUFFER_LINES: usize = 500;

/// Rotation and buffering limits
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Size at which the current file is rotated
    pub max_file_bytes: u64,
    /// Current file plus archives
    pub max_files: usize,
    /// Lines kept for `recent_lines`
    pub buffer_lines: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_files: DEFAULT_MAX_FILES,
            buffer_lines: DEFAULT_BUFFER_LINES,
            level: LevelFilter::INFO,
        }
    }
}

#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    AlreadyInitialized,
    NotInitialized,
    Subscriber(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
            LoggerError::Subscriber(msg) => write!(f, "Failed to install subscriber: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

static LOGGER: OnceLock<Mutex<RollingFile>> = OnceLock::new();

/// Initialize with default limits
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, LoggerConfig::default())
}

/// Initialize the global logger. Can only succeed once per process.
pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: LoggerConfig,
) -> Result<(), LoggerError> {
    let level = config.level;
    let file = RollingFile::open(log_dir.as_ref(), app_name, config)?;
    LOGGER
        .set(Mutex::new(file))
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing_subscriber::registry()
        .with(level)
        .with(
            fmt::layer()
                .with_timer(LocalTime)
                .with_ansi(false)
                .with_writer(|| RollingWriter),
        )
        .with(fmt::layer().with_timer(LocalTime).with_writer(io::stderr))
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    tracing::info!(dir = %log_dir.as_ref().display(), "Logger initialized for {}", app_name);
    Ok(())
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    emit(log::Level::Info, msg)
}

pub fn warn(msg: &str) -> Result<(), LoggerError> {
    emit(log::Level::Warn, msg)
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    emit(log::Level::Error, msg)
}

fn emit(level: log::Level, msg: &str) -> Result<(), LoggerError> {
    if LOGGER.get().is_none() {
        return Err(LoggerError::NotInitialized);
    }
    log::log!(level, "{}", msg);
    Ok(())
}

/// Buffered lines, oldest first. Empty before initialization.
pub fn recent_lines() -> Vec<String> {
    lock_logger()
        .map(|file| file.recent.iter().cloned().collect())
        .unwrap_or_default()
}

fn lock_logger() -> Option<MutexGuard<'static, RollingFile>> {
    LOGGER
        .get()
        .map(|m| m.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
}

/// `MakeWriter` target for the file layer
struct RollingWriter;

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match lock_logger() {
            Some(mut file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match lock_logger() {
            Some(mut file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Size-rotated log file plus the ring buffer of recent lines
struct RollingFile {
    dir: PathBuf,
    app_name: String,
    config: LoggerConfig,
    file: File,
    written: u64,
    pending: Vec<u8>,
    recent: VecDeque<String>,
}

impl RollingFile {
    fn open(dir: &Path, app_name: &str, config: LoggerConfig) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            dir: dir.to_path_buf(),
            app_name: app_name.to_string(),
            recent: VecDeque::with_capacity(config.buffer_lines),
            config,
            file,
            written,
            pending: Vec::new(),
        })
    }

    fn current_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.app_name))
    }

    fn archive_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.app_name, index))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let archives = self.config.max_files.saturating_sub(1);

        if archives == 0 {
            self.file = File::create(self.current_path())?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.archive_path(archives);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..archives).rev() {
            let from = self.archive_path(index);
            if from.exists() {
                fs::rename(&from, self.archive_path(index + 1))?;
            }
        }
        fs::rename(self.current_path(), self.archive_path(1))?;

        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.current_path())?;
        self.written = 0;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let len = line.len() as u64 + 1;
        if self.written > 0 && self.written + len > self.config.max_file_bytes {
            self.rotate()?;
        }
        writeln!(self.file, "{}", line)?;
        self.written += len;
        self.remember(line);
        Ok(())
    }

    fn remember(&mut self, line: &str) {
        if self.config.buffer_lines == 0 {
            return;
        }
        while self.recent.len() >= self.config.buffer_lines {
            self.recent.pop_front();
        }
        self.recent.push_back(line.to_string());
    }
}

impl Write for RollingFile {
    /// Buffers partial writes; only complete lines reach the file
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            let text = String::from_utf8_lossy(&line[..pos]).into_owned();
            self.write_line(text.trim_end_matches('\r'))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
