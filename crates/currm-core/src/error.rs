//! Error types for configuration, download and staleness checks.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single HTTP exchange (GET or HEAD).
///
/// Kept separate from [`Error`] so callers can tell transport problems from
/// HTTP-level rejections before attaching the rule name.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Curl reported an error (DNS, connect, timeout, invalid URL, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP status code {0}")]
    Http(u32),
}

/// Coarse classification used by the CLI and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration unreadable, unparsable or invalid. Fatal.
    Config,
    /// Rule store cannot be created. Fatal for a whole batch.
    Directory,
    /// One rule failed to download. Recovered during `pull`.
    Fetch,
    /// One rule failed to be written. Recovered during `pull`.
    Write,
    /// Staleness probe failed. Fatal for the whole `check`.
    Probe,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read configuration file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse YAML in '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("invalid rule #{index} in configuration: {reason}")]
    ConfigInvalid { index: usize, reason: String },

    #[error("failed to create rules directory '{}': {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to download rule '{name}': {source}")]
    Fetch {
        name: String,
        #[source]
        source: TransportError,
    },

    #[error("failed to write file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to check rule '{name}': {source}")]
    Probe {
        name: String,
        #[source]
        source: TransportError,
    },

    #[error("failed to check file '{}': {source}", .path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ConfigRead { .. } | Error::ConfigParse { .. } | Error::ConfigInvalid { .. } => {
                ErrorKind::Config
            }
            Error::Directory { .. } => ErrorKind::Directory,
            Error::Fetch { .. } => ErrorKind::Fetch,
            Error::Write { .. } => ErrorKind::Write,
            // A local inspection failure aborts `check` the same way a remote one does.
            Error::Probe { .. } | Error::Inspect { .. } => ErrorKind::Probe,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
