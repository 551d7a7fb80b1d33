//! `currm pull` – download every configured rule.

use anyhow::Result;
use currm_core::config::RulesConfig;
use currm_core::{pull_all, CurlTransport, PullOutcome};
use std::path::Path;

/// Download all rules, printing one line per rule. Individual failures are
/// printed as warnings and do not fail the command.
pub fn run_pull(cfg: &RulesConfig, rules_dir: &Path) -> Result<()> {
    println!("Downloading rules to '{}'", rules_dir.display());

    let report = pull_all(&CurlTransport, &cfg.rules, rules_dir, |outcome| {
        println!("{}", outcome_line(outcome));
    })?;

    if report.failed() > 0 {
        tracing::info!(
            failed = report.failed(),
            total = report.outcomes.len(),
            "some rules could not be downloaded"
        );
    }
    Ok(())
}

fn outcome_line(outcome: &PullOutcome) -> String {
    match outcome {
        PullOutcome::Downloaded { name, path } => {
            format!("Downloaded rule '{}' to '{}'", name, path.display())
        }
        PullOutcome::Failed { error, .. } => format!("Warning: {}", error),
    }
}
