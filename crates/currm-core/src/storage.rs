//! Rule store I/O: atomic writes and local file inspection.
//!
//! Files are written to a `.part` temp file next to the target and renamed
//! into place, so the target is either the old or the new content.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `rust.mdc` → `rust.mdc.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_rule_file(path: &Path, content: &[u8]) -> Result<()> {
    let temp = temp_path(path);
    let to_write_error = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let written = File::create(&temp).and_then(|mut f| {
        f.write_all(content)?;
        f.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp);
        return Err(to_write_error(e));
    }
    fs::rename(&temp, path).map_err(|e| {
        let _ = fs::remove_file(&temp);
        to_write_error(e)
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote rule file");
    Ok(())
}

/// What is known about a rule file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalState {
    Missing,
    Present { modified: Option<DateTime<Utc>> },
}

impl LocalState {
    pub fn exists(&self) -> bool {
        matches!(self, LocalState::Present { .. })
    }

    pub fn modified(&self) -> Option<DateTime<Utc>> {
        match self {
            LocalState::Missing => None,
            LocalState::Present { modified } => *modified,
        }
    }
}

/// Stat `path`. Not-found is `Missing`; any other failure is an `Inspect` error.
pub fn inspect(path: &Path) -> Result<LocalState> {
    match fs::metadata(path) {
        Ok(meta) => Ok(LocalState::Present {
            // Platforms without mtime report the file as present with no timestamp.
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(LocalState::Missing),
        Err(source) => Err(Error::Inspect {
            path: path.to_path_buf(),
            source,
        }),
    }
}
