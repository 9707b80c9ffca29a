//! In-memory cache for encoded asset files.
//!
//! Avoids re-reading and re-encoding images on every page load. Entries
//! expire after a TTL so replaced files are picked up without a restart.
//! A TTL of zero disables caching entirely.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Default TTL for cached assets (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// A cached value with expiration time.
struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

impl<T: Clone> CacheEntry<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn get(&self) -> Option<T> {
        if self.is_expired() {
            None
        } else {
            Some(self.value.clone())
        }
    }
}

/// Cache of base64 payloads keyed by file path.
///
/// A cached `None` records that the file was absent, so missing assets are
/// not re-probed until the entry expires.
pub struct AssetCache {
    entries: RwLock<HashMap<PathBuf, CacheEntry<Option<String>>>>,
    ttl: Duration,
}

impl AssetCache {
    /// Create a new asset cache with default TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Create a new asset cache with custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// A zero TTL disables caching entirely.
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Get a cached payload, or None if expired/missing.
    ///
    /// The outer `Option` is the cache lookup; the inner one is the payload.
    pub fn get(&self, path: &Path) -> Option<Option<String>> {
        if !self.is_enabled() {
            return None;
        }
        self.entries
            .read()
            .ok()
            .and_then(|guard| guard.get(path).and_then(|e| e.get()))
    }

    /// Store a payload in the cache.
    pub fn insert(&self, path: PathBuf, value: Option<String>) {
        if !self.is_enabled() {
            return;
        }
        if let Ok(mut guard) = self.entries.write() {
            guard.insert(path, CacheEntry::new(value, self.ttl));
            // Prune expired entries occasionally (when cache grows large)
            if guard.len() > 100 {
                guard.retain(|_, entry| !entry.is_expired());
            }
        }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().map(|g| g.len()).unwrap_or(0)
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AssetCache {
    fn default() -> Self {
        Self::new()
    }
}
