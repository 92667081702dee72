//! HTTP client construction for FPL API communication

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;

use crate::core::config::Settings;
use crate::Result;

pub const USER_AGENT: &str = concat!("fpl-xpts/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every FPL request.
pub fn default_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_str("en-US,en;q=0.9")?);
    Ok(h)
}

pub fn build_client(settings: &Settings) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_headers()?)
        .timeout(settings.http_timeout)
        .build()?;
    Ok(client)
}
