//! Logging init: append to a file under the XDG state dir, falling back to
//! stderr when that file cannot be opened.
//!
//! Console output meant for users goes to stdout via the CLI; this log is for
//! diagnostics only.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const FILE_FILTER: &str = "info,currm=debug,currm_core=debug";
const STDERR_FILTER: &str = "warn";

/// Where log events ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// `$XDG_STATE_HOME/currm/currm.log`, creating the directory if needed.
fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("currm")?;
    Ok(xdg_dirs.place_state_file("currm.log")?)
}

/// Install a subscriber writing to the state log file.
/// Returns Err if the file cannot be opened so the caller can fall back.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    // Mutex<File> is a MakeWriter; each event takes the lock for one write.
    tracing_subscriber::fmt()
        .with_env_filter(filter_or(FILE_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!("currm logging initialized at {}", path.display());
    Ok(path)
}

/// Install a stderr subscriber (warnings only unless `RUST_LOG` says otherwise).
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or(STDERR_FILTER))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

/// File logging if possible, stderr otherwise. Never fails.
pub fn init() -> LogTarget {
    match init_logging() {
        Ok(path) => LogTarget::File(path),
        Err(err) => {
            init_logging_stderr();
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
            LogTarget::Stderr
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_falls_back_once_a_subscriber_is_installed() {
        let first = init();
        if let LogTarget::File(path) = &first {
            assert!(path.ends_with("currm/currm.log"));
            assert!(path.exists());
        }
        // The global subscriber is taken now, so the file path cannot win again.
        assert_eq!(init(), LogTarget::Stderr);
    }
}
