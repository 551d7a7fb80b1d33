//! Conversion of legacy single-file rules into `.mdc` front-matter form.

use crate::config::RuleEntry;

/// Path suffix of the legacy single-file rule format.
pub const LEGACY_SUFFIX: &str = ".cursorrules";

/// True when the URL's path ends with the legacy suffix. Query strings and
/// fragments are ignored; unparsable URLs are checked as plain strings.
pub fn is_legacy_url(fetch_url: &str) -> bool {
    match url::Url::parse(fetch_url) {
        Ok(parsed) => parsed.path().ends_with(LEGACY_SUFFIX),
        Err(_) => fetch_url.ends_with(LEGACY_SUFFIX),
    }
}

/// Prefix `body` with a front-matter block built from the entry's metadata.
/// Field order is fixed: description, globs, alwaysApply.
pub fn wrap_legacy(entry: &RuleEntry, body: &[u8]) -> Vec<u8> {
    let header = format!(
        "---\ndescription: {}\nglobs: {}\nalwaysApply: {}\n---\n\n",
        entry.description_or_name(),
        entry.globs_or_default(),
        entry.always_apply
    );
    let mut out = Vec::with_capacity(header.len() + body.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(body);
    out
}

/// Bytes to write for a fetched rule: wrapped for legacy URLs, untouched otherwise.
pub fn materialize(entry: &RuleEntry, fetch_url: &str, body: Vec<u8>) -> Vec<u8> {
    if is_legacy_url(fetch_url) {
        wrap_legacy(entry, &body)
    } else {
        body
    }
}
