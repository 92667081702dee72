//! Two-tier cache for upstream FPL responses
//!
//! - L1: in-memory LRU cache for repeated lookups within one process
//! - L2: JSON files under the cache directory, optionally bounded by age
//!
//! File hits are promoted to memory. Refreshes bypass both tiers and
//! overwrite them.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Mutex,
    time::{Duration, SystemTime},
};
use tracing::{debug, warn};

use crate::cli::types::GameweekId;

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Where a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Served from memory or disk
    Hit,
    /// Not cached (or expired); fetched
    Miss,
    /// Fetched because a refresh was requested
    Refreshed,
}

/// Cache key usable for both tiers
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// File stem for the disk tier
    fn to_file_key(&self) -> String;
}

/// `bootstrap-static` (players, teams, gameweeks)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BootstrapCacheKey;

impl CacheKey for BootstrapCacheKey {
    fn to_file_key(&self) -> String {
        "bootstrap_static".to_string()
    }
}

/// `event/{id}/live` for one gameweek
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameweekLiveCacheKey {
    pub gameweek: GameweekId,
}

impl CacheKey for GameweekLiveCacheKey {
    fn to_file_key(&self) -> String {
        format!("event_live_gw{}", self.gameweek.as_u16())
    }
}

pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Mutex<LruCache<K, V>>,
    memory_capacity: NonZeroUsize,
    root: PathBuf,
    max_age: Option<Duration>,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// `memory_capacity` of zero is treated as one.
    pub fn new(memory_capacity: usize, root: impl Into<PathBuf>, max_age: Option<Duration>) -> Self {
        let memory_capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(memory_capacity)),
            memory_capacity,
            root: root.into(),
            max_age,
        }
    }

    pub fn path_for(&self, key: &K) -> PathBuf {
        self.root.join(format!("{}.json", key.to_file_key()))
    }

    /// Get an item (memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Ok(mut memory) = self.memory_cache.lock() {
            if let Some(value) = memory.get(key) {
                return Some(value.clone());
            }
        }

        let value = self.get_from_disk(key)?;
        if let Ok(mut memory) = self.memory_cache.lock() {
            memory.put(key.clone(), value.clone());
        }
        Some(value)
    }

    /// Store in both tiers. Disk failures are logged, not returned.
    pub fn put(&self, key: K, value: V) {
        if let Err(err) = self.put_to_disk(&key, &value) {
            warn!(key = %key.to_file_key(), %err, "failed to write cache file");
        }
        if let Ok(mut memory) = self.memory_cache.lock() {
            memory.put(key, value);
        }
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = self.path_for(key);
        if self.is_expired(&path) {
            debug!(path = %path.display(), "cache file expired");
            return None;
        }
        let content = try_read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring unreadable cache file");
                None
            }
        }
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&self.path_for(key), &content)
    }

    fn is_expired(&self, path: &Path) -> bool {
        let Some(max_age) = self.max_age else {
            return false;
        };
        let modified = fs::metadata(path).and_then(|m| m.modified());
        match modified {
            Ok(modified) => SystemTime::now()
                .duration_since(modified)
                .map(|age| age > max_age)
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    /// (entries in memory, memory capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        let used = self.memory_cache.lock().map(|m| m.len()).unwrap_or(0);
        (used, self.memory_capacity.get())
    }
}
