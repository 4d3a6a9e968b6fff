//! Single blocking HTTP GET (libcurl), body buffered in memory.
//!
//! The body is only handed back after the status check, so callers never see
//! (or write) the payload of an error response.

use crate::error::TransferError;
use std::time::Duration;

/// Maximum redirects followed per request.
const MAX_REDIRECTIONS: u32 = 10;

/// Per-request limits. `None` leaves the libcurl default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

/// Performs one GET of `url` and returns the full response body.
///
/// Follows redirects. Sends no custom headers. Runs in the current thread.
pub fn get(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, TransferError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTIONS)?;
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t)?;
    }
    if let Some(t) = opts.timeout {
        easy.timeout(t)?;
    }

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
        return Err(TransferError::Http(code));
    }

    tracing::trace!("GET {} -> HTTP {} ({} bytes)", url, code, body.len());
    Ok(body)
}
