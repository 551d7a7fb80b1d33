//! `check`: decide, per rule, whether a fresh download is warranted.
//!
//! Unlike `pull`, the first failure aborts the whole run and no partial
//! results are returned.

use crate::config::{prepare_rules_dir, RuleEntry};
use crate::error::{Error, Result};
use crate::storage::{self, LocalState};
use crate::transport::Transport;
use crate::url_model::ResolvedRule;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Freshness of one rule relative to its remote origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStatus {
    pub name: String,
    pub local_path: PathBuf,
    /// Revision exactly as configured (`None` when absent).
    pub revision: Option<String>,
    pub has_local_file: bool,
    pub needs_update: bool,
    /// Local file mtime.
    pub last_modified: Option<DateTime<Utc>>,
    /// Remote `Last-Modified`, when the server sent a usable one.
    pub remote_modified: Option<DateTime<Utc>>,
}

/// Check one resolved rule against `<rules_dir>/<filename>`.
///
/// A pinned revision that is already on disk is never stale and is not probed.
pub fn check_rule<T: Transport + ?Sized>(
    transport: &T,
    rule: &ResolvedRule<'_>,
    rules_dir: &Path,
) -> Result<RuleStatus> {
    let entry = rule.entry;
    let local_path = rule.local_path(rules_dir);
    let local = storage::inspect(&local_path)?;

    let mut status = RuleStatus {
        name: entry.name.clone(),
        local_path,
        revision: entry.revision.clone(),
        has_local_file: local.exists(),
        needs_update: false,
        last_modified: local.modified(),
        remote_modified: None,
    };

    if entry.revision().is_pinned() && status.has_local_file {
        tracing::debug!(rule = %entry.name, "pinned revision present locally, skipping probe");
        return Ok(status);
    }

    let head = transport
        .head(&rule.fetch_url)
        .map_err(|source| Error::Probe {
            name: entry.name.clone(),
            source,
        })?;

    status.remote_modified = head.last_modified_time();
    status.needs_update = needs_update(local, status.remote_modified);
    tracing::debug!(
        rule = %entry.name,
        has_local_file = status.has_local_file,
        needs_update = status.needs_update,
        "checked rule"
    );
    Ok(status)
}

/// Staleness decision once the remote side has been probed.
fn needs_update(local: LocalState, remote: Option<DateTime<Utc>>) -> bool {
    match (local, remote) {
        (LocalState::Missing, _) => true,
        // A local file without an mtime counts as older than any remote timestamp.
        (LocalState::Present { modified }, Some(remote)) => {
            modified.map_or(true, |local| remote > local)
        }
        (LocalState::Present { .. }, None) => false,
    }
}

/// Check every rule in order, stopping at the first error.
pub fn check_all<T: Transport + ?Sized>(
    transport: &T,
    rules: &[RuleEntry],
    rules_dir: &Path,
) -> Result<Vec<RuleStatus>> {
    let rules_dir = prepare_rules_dir(rules_dir)?;
    rules
        .iter()
        .map(|entry| check_rule(transport, &ResolvedRule::resolve(entry), &rules_dir))
        .collect()
}

/// True when any status asks for a (re)install.
pub fn updates_available(statuses: &[RuleStatus]) -> bool {
    statuses.iter().any(|s| !s.has_local_file || s.needs_update)
}
