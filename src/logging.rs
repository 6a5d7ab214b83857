//! Log sink setup.
//!
//! Records go to an append-only file and are mirrored to stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::constants;

/// Resolves the log file path from `HOMEWORK_BOT_LOG_FILE`.
pub fn log_path() -> PathBuf {
    std::env::var("HOMEWORK_BOT_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(constants::DEFAULT_LOG_FILE))
}

/// Opens `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file at {}", path.display()))
}

/// Writes every record to a file and to stderr.
#[derive(Debug)]
pub struct TeeWriter {
    file: File,
}

impl TeeWriter {
    /// Wraps an already opened log file.
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        // Console output is best effort; the file is the record.
        let _ = io::stderr().write_all(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = io::stderr().flush();
        self.file.flush()
    }
}

/// Installs the global logger writing to `path` and stderr.
///
/// Level defaults to `debug` and can be narrowed with `RUST_LOG`.
pub fn init(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(TeeWriter::new(file))))
        .format_timestamp_secs()
        .try_init()
        .context("Logger already initialized")?;
    Ok(())
}
