//! Rule entry → fetch URL and local filename.
//!
//! Both resolvers are pure: no I/O, no sanitization. Revision substitution is
//! limited to the GitHub shapes in [`UrlShape`]; everything else passes through.

mod filename;
mod shape;

pub use filename::{resolve_filename, RULE_EXTENSION};
pub use shape::UrlShape;

use crate::config::RuleEntry;
use std::path::{Path, PathBuf};

/// Concrete URL to fetch for `entry`, with a pinned revision substituted where
/// the URL shape allows it.
pub fn resolve_fetch_url(entry: &RuleEntry) -> String {
    match entry.revision().pinned() {
        None => entry.url.clone(),
        Some(rev) => UrlShape::classify(&entry.url).substitute(&entry.url, rev),
    }
}

/// A rule entry together with both resolver outputs.
#[derive(Debug, Clone)]
pub struct ResolvedRule<'a> {
    pub entry: &'a RuleEntry,
    pub fetch_url: String,
    pub filename: String,
}

impl<'a> ResolvedRule<'a> {
    pub fn resolve(entry: &'a RuleEntry) -> Self {
        let resolved = ResolvedRule {
            entry,
            fetch_url: resolve_fetch_url(entry),
            filename: resolve_filename(entry),
        };
        tracing::debug!(
            rule = %entry.name,
            url = %resolved.fetch_url,
            file = %resolved.filename,
            "resolved rule"
        );
        resolved
    }

    /// `<rules_dir>/<filename>`
    pub fn local_path(&self, rules_dir: &Path) -> PathBuf {
        rules_dir.join(&self.filename)
    }
}
