//! Helpers shared across command implementations.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::{
    core::{config::Settings, CacheStatus},
    fpl::source::FplDataSource,
    Result,
};

/// Options every command accepts.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Overrides `FPL_API_URL`.
    pub api_url: Option<String>,
    /// Bypass cached responses for this run.
    pub refresh: bool,
}

/// Resolve settings from the environment, apply CLI overrides and build the
/// FPL-backed data source.
pub fn build_data_source(options: &SourceOptions) -> Result<FplDataSource> {
    let mut settings = Settings::from_env()?;
    if let Some(url) = &options.api_url {
        settings = settings.with_api_base_url(url.clone());
    }
    debug!(?settings, "resolved settings");
    FplDataSource::new(&settings, options.refresh)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the cache status line to stderr when `verbose` is set, keeping
/// stdout for command output.
pub fn report_cache_status(verbose: bool, what: &str, status: CacheStatus) -> Result<()> {
    write_cache_status(&mut std::io::stderr().lock(), verbose, what, status)
}

pub fn write_cache_status<W: Write>(
    out: &mut W,
    verbose: bool,
    what: &str,
    status: CacheStatus,
) -> Result<()> {
    if verbose {
        writeln!(out, "{}", describe_cache_status(what, status))?;
    }
    Ok(())
}

pub fn describe_cache_status(what: &str, status: CacheStatus) -> String {
    match status {
        CacheStatus::Hit => format!("✓ {what} loaded (from cache)"),
        CacheStatus::Miss => format!("✓ {what} fetched (cache miss)"),
        CacheStatus::Refreshed => format!("✓ {what} fetched (refreshed)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_cache_status() {
        assert_eq!(
            describe_cache_status("Season data", CacheStatus::Hit),
            "✓ Season data loaded (from cache)"
        );
        assert!(describe_cache_status("Gameweek 3", CacheStatus::Miss).contains("cache miss"));
        assert!(describe_cache_status("Gameweek 3", CacheStatus::Refreshed).contains("refreshed"));
    }

    #[test]
    fn test_write_cache_status_only_when_verbose() {
        let mut quiet = Vec::new();
        write_cache_status(&mut quiet, false, "Season data", CacheStatus::Hit).unwrap();
        assert!(quiet.is_empty());

        let mut loud = Vec::new();
        write_cache_status(&mut loud, true, "Season data", CacheStatus::Miss).unwrap();
        assert_eq!(
            String::from_utf8(loud).unwrap(),
            "✓ Season data fetched (cache miss)\n"
        );
    }

    #[test]
    fn test_source_options_default() {
        let options = SourceOptions::default();
        assert!(options.api_url.is_none());
        assert!(!options.refresh);
    }
}
