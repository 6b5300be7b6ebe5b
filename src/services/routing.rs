use crate::cache::{route_cache_key, RouteCache};
use crate::error::Result;
use crate::models::{Coordinates, DirectionsResult, RouteRecord};
use crate::services::route_normalizer;
use async_trait::async_trait;
use std::sync::Arc;

/// External routing and geocoding collaborator
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Route alternatives between two addresses
    async fn directions(&self, origin: &str, destination: &str) -> Result<DirectionsResult>;

    /// Coordinates for an address, `None` when the provider cannot find it
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>>;
}

/// Queries the provider and normalizes its answer, with optional caching.
///
/// Provider failures are not errors here: they degrade to "no routes found".
pub struct RouteService {
    provider: Arc<dyn RoutingProvider>,
    cache: Option<Arc<dyn RouteCache>>,
}

impl RouteService {
    pub fn new(provider: Arc<dyn RoutingProvider>) -> Self {
        Self {
            provider,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn RouteCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache(&self) -> Option<&Arc<dyn RouteCache>> {
        self.cache.as_ref()
    }

    /// Exactly three normalized routes, or none
    pub async fn find_routes(&self, origin: &str, destination: &str) -> Vec<RouteRecord> {
        let cache_key = route_cache_key(origin, destination);

        if let Some(ref cache) = self.cache {
            if let Some(cached) = cache.get_cached_routes(&cache_key).await {
                tracing::info!("Cache hit for {} -> {}: {} routes", origin, destination, cached.len());
                return cached;
            }
        }

        let routes = match self.provider.directions(origin, destination).await {
            Ok(result) => route_normalizer::normalize(&result),
            Err(e) => {
                tracing::warn!(
                    "Routing provider unavailable for {} -> {}: {}. Returning no routes.",
                    origin,
                    destination,
                    e
                );
                Vec::new()
            }
        };

        if !routes.is_empty() {
            if let Some(ref cache) = self.cache {
                cache.cache_routes(&cache_key, &routes).await;
            }
        }

        routes
    }

    /// Coordinates for an address, `None` when not found or the provider is down
    pub async fn locate(&self, address: &str) -> Option<Coordinates> {
        match self.provider.geocode(address).await {
            Ok(coords) => coords,
            Err(e) => {
                tracing::warn!("Geocoding unavailable for '{}': {}", address, e);
                None
            }
        }
    }
}
