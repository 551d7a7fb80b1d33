//! `currm check` – report which rules are missing or stale.

use anyhow::Result;
use currm_core::check::updates_available;
use currm_core::config::RulesConfig;
use currm_core::revision::{is_commit_hash, short_revision, LATEST};
use currm_core::{check_all, CurlTransport, RuleStatus};
use std::path::Path;

/// Probe every rule and print a summary. The first probe error aborts the
/// command with no partial report.
pub fn run_check(cfg: &RulesConfig, rules_dir: &Path) -> Result<()> {
    let statuses = check_all(&CurlTransport, &cfg.rules, rules_dir)?;

    println!("Checking for updates...");
    for status in &statuses {
        println!("{}", status_line(status));
    }

    if updates_available(&statuses) {
        println!("\nRun 'currm pull' to install updates");
    } else {
        println!("\nAll rules are up to date");
    }
    Ok(())
}

fn status_line(status: &RuleStatus) -> String {
    let rev_info = status
        .revision
        .as_deref()
        .filter(|r| !r.is_empty())
        .map(|r| format!(" ({})", format_revision(r)))
        .unwrap_or_default();

    let state = if !status.has_local_file {
        "Rule is not installed"
    } else if status.needs_update {
        "Update available"
    } else {
        "Up to date"
    };
    format!("- {}{}: {}", status.name, rev_info, state)
}

fn format_revision(revision: &str) -> String {
    if revision == LATEST {
        "Latest version".to_string()
    } else if is_commit_hash(revision) {
        format!("Commit: {}", short_revision(revision))
    } else {
        revision.to_string()
    }
}
