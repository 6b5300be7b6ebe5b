use crate::cache::{CacheStats, RouteCache};
use crate::constants::NORMALIZED_ROUTE_COUNT;
use crate::models::RouteRecord;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Normalized route sets held in process memory (moka, TTL + LRU bound).
///
/// Only complete sets are stored, so a cache hit always yields exactly
/// [`NORMALIZED_ROUTE_COUNT`] routes.
pub struct MemoryCacheService {
    route_sets: Cache<String, Vec<RouteRecord>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCacheService {
    pub fn new(ttl_seconds: u64, max_entries: u64) -> Self {
        MemoryCacheService {
            route_sets: Cache::builder()
                .time_to_live(Duration::from_secs(ttl_seconds))
                .max_capacity(max_entries)
                .build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn record(&self, hit: bool) {
        let counter = if hit { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

#[async_trait]
impl RouteCache for MemoryCacheService {
    async fn get_cached_routes(&self, key: &str) -> Option<Vec<RouteRecord>> {
        let found = self.route_sets.get(key).await;
        self.record(found.is_some());
        tracing::debug!(key, hit = found.is_some(), "Route cache lookup");
        found
    }

    async fn cache_routes(&self, key: &str, routes: &[RouteRecord]) {
        if routes.len() != NORMALIZED_ROUTE_COUNT {
            tracing::debug!(
                "Not caching {}: expected {} routes, got {}",
                key,
                NORMALIZED_ROUTE_COUNT,
                routes.len()
            );
            return;
        }
        self.route_sets.insert(key.to_string(), routes.to_vec()).await;
    }

    async fn get_stats(&self) -> CacheStats {
        self.route_sets.run_pending_tasks().await;
        CacheStats::new(
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            self.route_sets.entry_count(),
        )
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_set(distance_km: f64) -> Vec<RouteRecord> {
        vec![
            RouteRecord {
                distance_km,
                duration: "1 Horas e 0 minutos".to_string(),
                encoded_path: "_p~iF~ps|U".to_string(),
            };
            NORMALIZED_ROUTE_COUNT
        ]
    }

    #[tokio::test]
    async fn stores_complete_sets() {
        let cache = MemoryCacheService::new(3600, 100);
        assert!(cache.get_cached_routes("route:od:1").await.is_none());

        let routes = route_set(72.4);
        cache.cache_routes("route:od:1", &routes).await;
        assert_eq!(cache.get_cached_routes("route:od:1").await, Some(routes));
    }

    #[tokio::test]
    async fn ignores_incomplete_sets() {
        let cache = MemoryCacheService::new(3600, 100);
        cache.cache_routes("route:od:1", &route_set(10.0)[..1]).await;
        cache.cache_routes("route:od:2", &[]).await;

        assert!(cache.get_cached_routes("route:od:1").await.is_none());
        assert!(cache.get_cached_routes("route:od:2").await.is_none());
    }

    #[tokio::test]
    async fn stats_count_hits_misses_and_entries() {
        let cache = MemoryCacheService::new(3600, 100);
        cache.cache_routes("route:od:1", &route_set(5.0)).await;

        cache.get_cached_routes("route:od:missing").await;
        cache.get_cached_routes("route:od:1").await;
        cache.get_cached_routes("route:od:1").await;

        let stats = cache.get_stats().await;
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert!((stats.hit_rate - 66.67).abs() < 0.01);
        assert_eq!(cache.backend_name(), "memory");
    }

    #[tokio::test]
    async fn entries_expire() {
        let cache = MemoryCacheService::new(1, 100);
        cache.cache_routes("route:od:1", &route_set(5.0)).await;
        assert!(cache.get_cached_routes("route:od:1").await.is_some());

        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(cache.get_cached_routes("route:od:1").await.is_none());
    }
}
