//! Parse HTTP response header lines into HeadResult.

use super::HeadResult;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse collected header lines into HeadResult.
pub(crate) fn parse_headers(lines: &[String]) -> HeadResult {
    let mut result = HeadResult::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("last-modified") {
                result.last_modified = Some(value.to_string());
            }
        }
    }

    result
}

/// Parse an HTTP date (`Wed, 21 Oct 2015 07:28:00 GMT`).
///
/// Accepts the IMF-fixdate form via RFC 2822, plus the obsolete asctime form
/// (`Wed Oct 21 07:28:00 2015`) some servers still send.
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%a %b %e %H:%M:%S %Y")
        .ok()
        .map(|naive| naive.and_utc())
}
