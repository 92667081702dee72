//! Where player records come from.
//!
//! The points engine never fetches anything itself; commands ask a
//! [`DataSource`] for already-parsed season or gameweek data.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Mutex;
use tracing::{debug, info};

use crate::cli::types::GameweekId;
use crate::core::cache::{
    BootstrapCacheKey, CacheKey, CacheStatus, GameweekLiveCacheKey, UnifiedCache,
};
use crate::core::config::Settings;
use crate::fpl::http::FplClient;
use crate::fpl::types::{BootstrapStatic, GameweekLive};
use crate::Result;

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Season-level data: players with season totals, teams, gameweeks.
    async fn fetch_season_data(&self) -> Result<BootstrapStatic>;

    /// Per-player stats for one gameweek.
    async fn fetch_gameweek_data(&self, gameweek: GameweekId) -> Result<GameweekLive>;
}

const BOOTSTRAP_MEMORY_CAPACITY: usize = 1;
const LIVE_MEMORY_CAPACITY: usize = 38;

/// [`DataSource`] backed by the FPL API and the two-tier response cache.
pub struct FplDataSource {
    client: FplClient,
    bootstrap: UnifiedCache<BootstrapCacheKey, Value>,
    live: UnifiedCache<GameweekLiveCacheKey, Value>,
    refresh: bool,
    refreshed: Mutex<HashSet<String>>,
}

impl FplDataSource {
    /// With `refresh`, each key is fetched from the API once per process
    /// regardless of what is cached, then served from cache.
    pub fn new(settings: &Settings, refresh: bool) -> Result<Self> {
        Ok(Self::with_client(FplClient::new(settings)?, settings, refresh))
    }

    pub fn with_client(client: FplClient, settings: &Settings, refresh: bool) -> Self {
        Self {
            client,
            bootstrap: UnifiedCache::new(
                BOOTSTRAP_MEMORY_CAPACITY,
                &settings.cache_dir,
                settings.cache_ttl,
            ),
            live: UnifiedCache::new(LIVE_MEMORY_CAPACITY, &settings.cache_dir, settings.cache_ttl),
            refresh,
            refreshed: Mutex::new(HashSet::new()),
        }
    }

    /// Raw `bootstrap-static` JSON and where it came from.
    pub async fn raw_season_data(&self) -> Result<(Value, CacheStatus)> {
        self.load(&self.bootstrap, BootstrapCacheKey, || {
            self.client.get_bootstrap_static()
        })
        .await
    }

    /// Raw `event/{id}/live` JSON and where it came from.
    pub async fn raw_gameweek_data(&self, gameweek: GameweekId) -> Result<(Value, CacheStatus)> {
        self.load(&self.live, GameweekLiveCacheKey { gameweek }, || {
            self.client.get_gameweek_live(gameweek)
        })
        .await
    }

    async fn load<K, F, Fut>(
        &self,
        cache: &UnifiedCache<K, Value>,
        key: K,
        fetch: F,
    ) -> Result<(Value, CacheStatus)>
    where
        K: CacheKey,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        let file_key = key.to_file_key();
        let force = self.refresh && !self.already_refreshed(&file_key);

        if !force {
            if let Some(value) = cache.get(&key) {
                debug!(key = %file_key, "cache hit");
                return Ok((value, CacheStatus::Hit));
            }
        }

        info!(key = %file_key, refresh = force, "fetching from FPL API");
        let value = fetch().await?;
        cache.put(key, value.clone());
        let (used, capacity) = cache.memory_stats();
        debug!(key = %file_key, used, capacity, "cached response");

        if force {
            if let Ok(mut done) = self.refreshed.lock() {
                done.insert(file_key);
            }
            Ok((value, CacheStatus::Refreshed))
        } else {
            Ok((value, CacheStatus::Miss))
        }
    }

    fn already_refreshed(&self, file_key: &str) -> bool {
        self.refreshed
            .lock()
            .map(|done| done.contains(file_key))
            .unwrap_or(false)
    }
}

#[async_trait]
impl DataSource for FplDataSource {
    async fn fetch_season_data(&self) -> Result<BootstrapStatic> {
        let (value, _) = self.raw_season_data().await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn fetch_gameweek_data(&self, gameweek: GameweekId) -> Result<GameweekLive> {
        let (value, _) = self.raw_gameweek_data(gameweek).await?;
        Ok(serde_json::from_value(value)?)
    }
}
