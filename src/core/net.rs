// src/core/net.rs
// Blocking HTTPS GET. One request, no retry, no cache.

use crate::config::consts::USER_AGENT;
use crate::error::FlagsError;

pub fn http_get(url: &str) -> Result<String, FlagsError> {
    http_get_with(url, &[])
}

/// GET with extra request headers (e.g. a cookie).
pub fn http_get_with(url: &str, headers: &[(&str, &str)]) -> Result<String, FlagsError> {
    let mut req = ureq::get(url).header("User-Agent", USER_AGENT);
    for (name, value) in headers {
        req = req.header(*name, *value);
    }

    let resp = req.call().map_err(|e| match e {
        ureq::Error::StatusCode(status) => FlagsError::Status { status, url: s!(url) },
        other => FlagsError::Http(other),
    })?;

    Ok(resp.into_body().read_to_string()?)
}
