pub mod memory;

pub use memory::MemoryCacheService;

use crate::models::RouteRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Backend-agnostic cache for normalized route sets
#[async_trait]
pub trait RouteCache: Send + Sync {
    async fn get_cached_routes(&self, key: &str) -> Option<Vec<RouteRecord>>;
    async fn cache_routes(&self, key: &str, routes: &[RouteRecord]);
    async fn get_stats(&self) -> CacheStats;
    fn backend_name(&self) -> &'static str;
}

/// Generate a cache key for an origin/destination query.
/// Addresses are compared case-insensitively with surrounding and repeated
/// whitespace collapsed.
pub fn route_cache_key(origin: &str, destination: &str) -> String {
    let mut hasher = DefaultHasher::new();

    normalize_address(origin).hash(&mut hasher);
    normalize_address(destination).hash(&mut hasher);

    format!("route:od:{:x}", hasher.finish())
}

fn normalize_address(address: &str) -> String {
    address
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Percentage of lookups that hit
    pub hit_rate: f64,
    pub entries: u64,
}

impl CacheStats {
    pub fn new(hits: u64, misses: u64, entries: u64) -> Self {
        let lookups = hits + misses;
        let hit_rate = if lookups > 0 {
            hits as f64 / lookups as f64 * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
            entries,
        }
    }
}
