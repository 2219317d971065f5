//! File-backed logging.
//!
//! The TUI owns stdout, so logs go to a file under the platform data
//! directory. Logging is off unless the `TODOS_LOG` env var carries a
//! `tracing` filter (e.g. `TODOS_LOG=debug`).

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter; absent means logging is disabled.
pub const LOG_ENV: &str = "TODOS_LOG";

/// Initialize the global subscriber if `TODOS_LOG` is set.
///
/// Returns the log file path when logging was enabled.
pub fn init() -> Result<Option<PathBuf>> {
    if std::env::var_os(LOG_ENV).is_none() {
        return Ok(None);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("todos");
    fs::create_dir_all(&dir)?;
    let path = dir.join("todos.log");
    let file = File::create(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env(LOG_ENV))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(Some(path))
}
