//! Session cache using moka.
//!
//! Keys are blake3 content hashes of the bag. A re-scan that produces a
//! byte-identical snapshot gets the profile computed the first time.

use std::time::Duration;

use moka::sync::Cache;
use visage_core::config::CacheConfig;
use visage_core::Profile;

pub struct ProfileCache {
    cache: Cache<String, Profile>,
}

impl ProfileCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    /// `None` when caching is disabled.
    pub fn from_config(config: &CacheConfig) -> Option<Self> {
        config.effective_enabled().then(|| {
            Self::new(
                config.effective_max_entries(),
                Duration::from_secs(config.effective_ttl_secs()),
            )
        })
    }

    pub fn get(&self, bag_hash: &str) -> Option<Profile> {
        self.cache.get(bag_hash)
    }

    pub fn insert(&self, bag_hash: String, profile: Profile) {
        self.cache.insert(bag_hash, profile);
    }
}

impl std::fmt::Debug for ProfileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
