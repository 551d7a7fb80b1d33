//! HTTP HEAD / metadata probing.
//!
//! Uses the curl crate (libcurl) to fetch response headers only, capturing
//! `Last-Modified` for staleness checks. No body is transferred.

mod parse;

pub use parse::parse_http_date;

use crate::error::TransportError;
use chrono::{DateTime, Utc};
use std::str;

/// Result of a HEAD request: the headers a staleness check cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadResult {
    /// Raw `Last-Modified` value if present.
    pub last_modified: Option<String>,
}

impl HeadResult {
    /// `Last-Modified` as a timestamp. `None` when absent or unparsable.
    pub fn last_modified_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.last_modified.as_deref()?;
        let parsed = parse_http_date(raw);
        if parsed.is_none() {
            tracing::warn!(value = raw, "ignoring unparsable Last-Modified header");
        }
        parsed
    }
}

/// Performs a HEAD request and returns parsed metadata.
///
/// Follows redirects. Runs in the current thread and blocks until done; no
/// timeout beyond libcurl's defaults.
pub fn probe(url: &str) -> Result<HeadResult, TransportError> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.max_redirections(10)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                let line = s.trim_end();
                // A new status line means a redirect hop; keep only the final response.
                if line.starts_with("HTTP/") {
                    headers.clear();
                }
                headers.push(line.to_string());
            }
            true
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(TransportError::Http(code));
    }

    let result = parse::parse_headers(&headers);
    tracing::debug!(
        url,
        last_modified = ?result.last_modified,
        "HEAD probe"
    );
    Ok(result)
}
