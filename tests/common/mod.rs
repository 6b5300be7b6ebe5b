use async_trait::async_trait;
use ecofrete::db::DatasetStore;
use ecofrete::error::{AppError, Result};
use ecofrete::format::NumberFormat;
use ecofrete::models::{Coordinates, DirectionsResult, RouteCandidate};
use ecofrete::services::report_builder::ReportBuilder;
use ecofrete::services::routing::{RouteService, RoutingProvider};
use ecofrete::AppState;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Reference polyline from the Google encoding documentation
#[allow(dead_code)]
pub const SAMPLE_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

/// Provider answering from a fixed table instead of the network
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedProvider {
    directions: HashMap<(String, String), DirectionsResult>,
    places: HashMap<String, Coordinates>,
    unavailable: bool,
}

#[allow(dead_code)]
impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the provider were unreachable
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_routes(mut self, origin: &str, destination: &str, result: DirectionsResult) -> Self {
        self.directions
            .insert((origin.to_string(), destination.to_string()), result);
        self
    }

    pub fn with_place(mut self, address: &str, lat: f64, lng: f64) -> Self {
        self.places
            .insert(address.to_string(), Coordinates::new(lat, lng).unwrap());
        self
    }
}

#[async_trait]
impl RoutingProvider for ScriptedProvider {
    async fn directions(&self, origin: &str, destination: &str) -> Result<DirectionsResult> {
        if self.unavailable {
            return Err(AppError::ProviderUnavailable("connection refused".to_string()));
        }
        Ok(self
            .directions
            .get(&(origin.to_string(), destination.to_string()))
            .cloned()
            .unwrap_or_else(|| DirectionsResult::with_status("ZERO_RESULTS")))
    }

    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>> {
        if self.unavailable {
            return Err(AppError::ProviderUnavailable("connection refused".to_string()));
        }
        Ok(self.places.get(address).copied())
    }
}

/// Create a test route candidate
#[allow(dead_code)]
pub fn candidate(distance_meters: f64, duration_seconds: u64) -> RouteCandidate {
    RouteCandidate {
        distance_meters,
        duration_seconds,
        encoded_path: SAMPLE_POLYLINE.to_string(),
    }
}

/// Unique dataset path under the system temp dir
#[allow(dead_code)]
pub fn temp_dataset_path() -> PathBuf {
    std::env::temp_dir().join(format!("ecofrete_test_{}.csv", Uuid::new_v4()))
}

#[allow(dead_code)]
pub fn temp_store() -> DatasetStore {
    DatasetStore::new(temp_dataset_path(), NumberFormat::brazilian())
}

#[allow(dead_code)]
pub fn cleanup(store: &DatasetStore) {
    let _ = std::fs::remove_file(store.path());
}

/// App state with default propulsion parameters and no cache
#[allow(dead_code)]
pub fn test_state(provider: ScriptedProvider, store: DatasetStore) -> Arc<AppState> {
    let route_service = RouteService::new(Arc::new(provider));
    Arc::new(AppState::new(route_service, ReportBuilder::default(), store))
}

/// Check if we should skip real API tests
#[allow(dead_code)]
pub fn should_skip_real_api_tests() -> bool {
    std::env::var("SKIP_REAL_API_TESTS").is_ok() || std::env::var("GOOGLE_MAPS_API_KEY").is_err()
}
