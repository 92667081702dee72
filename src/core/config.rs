//! Runtime settings resolved from the environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, XptsError};

pub const API_URL_ENV_VAR: &str = "FPL_API_URL";
pub const CACHE_DIR_ENV_VAR: &str = "FPL_XPTS_CACHE_DIR";
pub const CACHE_TTL_ENV_VAR: &str = "FPL_XPTS_CACHE_TTL_SECS";
pub const HTTP_TIMEOUT_ENV_VAR: &str = "FPL_XPTS_HTTP_TIMEOUT_SECS";

/// Base path for the public Fantasy Premier League API.
pub const FPL_API_URL: &str = "https://fantasy.premierleague.com/api";

const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base_url: String,
    pub cache_dir: PathBuf,
    /// Max age of on-disk cache entries; `None` keeps them forever.
    pub cache_ttl: Option<Duration>,
    pub http_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: FPL_API_URL.to_string(),
            cache_dir: default_cache_dir(),
            cache_ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`, falling back to defaults for
    /// unset or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(url) = get(API_URL_ENV_VAR) {
            settings.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(dir) = get(CACHE_DIR_ENV_VAR) {
            settings.cache_dir = PathBuf::from(dir);
        }
        if let Some(raw) = get(CACHE_TTL_ENV_VAR) {
            settings.cache_ttl = match parse_secs(CACHE_TTL_ENV_VAR, &raw)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            };
        }
        if let Some(raw) = get(HTTP_TIMEOUT_ENV_VAR) {
            settings.http_timeout = match parse_secs(HTTP_TIMEOUT_ENV_VAR, &raw)? {
                0 => {
                    return Err(XptsError::InvalidConfig {
                        key: HTTP_TIMEOUT_ENV_VAR,
                        value: raw,
                    })
                }
                secs => Duration::from_secs(secs),
            };
        }

        Ok(settings)
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

/// `~/.cache/fpl-xpts` (or the platform equivalent)
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("fpl-xpts")
}

fn parse_secs(key: &'static str, raw: &str) -> Result<u64> {
    raw.trim().parse().map_err(|_| XptsError::InvalidConfig {
        key,
        value: raw.to_string(),
    })
}
