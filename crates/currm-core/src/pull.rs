//! `pull`: fetch every configured rule and write it into the rule store.
//!
//! Per-rule failures are isolated: they are reported and the batch moves on.
//! Only an unusable rule store aborts the batch.

use crate::config::{prepare_rules_dir, RuleEntry};
use crate::error::{Error, Result};
use crate::format;
use crate::storage;
use crate::transport::Transport;
use crate::url_model::ResolvedRule;
use std::path::{Path, PathBuf};

/// Fetch one resolved rule and write it to `<rules_dir>/<filename>`.
/// Returns the written path.
pub fn fetch_rule<T: Transport + ?Sized>(
    transport: &T,
    rule: &ResolvedRule<'_>,
    rules_dir: &Path,
) -> Result<PathBuf> {
    let body = transport
        .get(&rule.fetch_url)
        .map_err(|source| Error::Fetch {
            name: rule.entry.name.clone(),
            source,
        })?;
    let content = format::materialize(rule.entry, &rule.fetch_url, body);
    let path = rule.local_path(rules_dir);
    storage::write_rule_file(&path, &content)?;
    Ok(path)
}

/// Outcome of one rule in a `pull` batch.
#[derive(Debug)]
pub enum PullOutcome {
    Downloaded { name: String, path: PathBuf },
    Failed { name: String, error: Error },
}

impl PullOutcome {
    pub fn name(&self) -> &str {
        match self {
            PullOutcome::Downloaded { name, .. } | PullOutcome::Failed { name, .. } => name,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PullOutcome::Downloaded { .. })
    }
}

/// Summary of a `pull` batch.
#[derive(Debug)]
pub struct PullReport {
    pub outcomes: Vec<PullOutcome>,
}

impl PullReport {
    pub fn downloaded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.downloaded()
    }
}

/// Download every rule in order. The rule store is created first; that is the
/// only failure that aborts the batch. `on_outcome` is called once per rule as
/// soon as it finishes, so callers can print progress and warnings.
pub fn pull_all<T, F>(
    transport: &T,
    rules: &[RuleEntry],
    rules_dir: &Path,
    mut on_outcome: F,
) -> Result<PullReport>
where
    T: Transport + ?Sized,
    F: FnMut(&PullOutcome),
{
    let rules_dir = prepare_rules_dir(rules_dir)?;
    let mut outcomes = Vec::with_capacity(rules.len());

    for entry in rules {
        let resolved = ResolvedRule::resolve(entry);
        let outcome = match fetch_rule(transport, &resolved, &rules_dir) {
            Ok(path) => PullOutcome::Downloaded {
                name: entry.name.clone(),
                path,
            },
            Err(error) => {
                // Reported to the user through `on_outcome`.
                tracing::debug!(rule = %entry.name, "{}", error);
                PullOutcome::Failed {
                    name: entry.name.clone(),
                    error,
                }
            }
        };
        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    tracing::info!(
        total = outcomes.len(),
        failed = outcomes.iter().filter(|o| !o.is_success()).count(),
        "pull finished"
    );
    Ok(PullReport { outcomes })
}
