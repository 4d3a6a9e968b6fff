//! Base URL validation and per-asset URL construction.
//!
//! Asset URLs are plain string concatenation of the base URL and the manifest
//! entry; no path joining or percent-encoding is applied.

use crate::error::TransferError;
use url::Url;

/// Parses `raw` and checks it is an http(s) URL.
fn parse_http(raw: &str) -> Result<Url, TransferError> {
    let parsed = Url::parse(raw).map_err(|source| TransferError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(TransferError::UnsupportedScheme(other.to_string())),
    }
}

/// Checks that `base_url` is a usable http(s) prefix.
///
/// A prefix without a trailing `/` is accepted: `https://host/img-` + `a.jpg`
/// is a valid target.
pub fn validate_base_url(base_url: &str) -> Result<(), TransferError> {
    parse_http(base_url).map(|_| ())
}

/// Builds the fetch target for one manifest entry.
///
/// # Examples
///
/// - `asset_url("https://monstermash.zone/imgs/", "loading.jpg")` → `"https://monstermash.zone/imgs/loading.jpg"`
pub fn asset_url(base_url: &str, filename: &str) -> Result<String, TransferError> {
    let target = format!("{}{}", base_url, filename);
    parse_http(&target)?;
    Ok(target)
}
