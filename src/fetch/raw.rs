//! Raw-content HTTP fetch
//!
//! One blocking GET per call. Timeouts are enforced by the client, not
//! self-managed; any non-success status, transport error, or empty body is
//! treated as an absent descriptor.

use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GET `url` and return the body text, or `None` on any failure.
pub fn http_get(url: &str) -> Option<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("buildref/", env!("CARGO_PKG_VERSION")))
        .build()
        .ok()?;

    let response = client.get(url).send().ok()?;
    if !response.status().is_success() {
        return None;
    }

    let text = response.text().ok()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
