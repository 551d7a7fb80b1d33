//! Single-stream HTTP GET of a rule body.
//!
//! Rule files are small, so the body is collected in memory and handed to
//! storage in one piece.

use crate::error::TransportError;

/// Downloads `url` with a plain GET and returns the response body.
/// Non-2xx responses are errors; no retry. No timeout is set beyond libcurl's
/// defaults, so a slow server is waited on rather than failed.
pub fn fetch_body(url: &str) -> Result<Vec<u8>, TransportError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(TransportError::Http(code));
    }
    tracing::debug!(url, bytes = body.len(), "GET complete");
    Ok(body)
}
