//! Core utilities for the FPL expected-points tool
//!
//! - `cache`: two-tier response cache
//! - `config`: environment-driven settings
//! - `http`: reqwest client construction

pub mod cache;
pub mod config;
pub mod http;

pub use cache::{try_read_to_string, write_string, CacheStatus, UnifiedCache};
pub use config::Settings;
