use crate::config::GoogleMapsConfig;
use crate::error::{AppError, Result};
use crate::models::route::STATUS_OK;
use crate::models::{Coordinates, DirectionsResult, RouteCandidate};
use crate::services::routing::RoutingProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const GOOGLE_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

#[derive(Clone)]
pub struct GoogleMapsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleMapsClient {
    pub fn new(api_key: String) -> Self {
        GoogleMapsClient {
            client: Client::new(),
            api_key,
            base_url: GOOGLE_MAPS_BASE_URL.to_string(),
        }
    }

    pub fn from_config(config: &GoogleMapsConfig) -> Self {
        GoogleMapsClient {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| GOOGLE_MAPS_BASE_URL.to_string()),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}/json", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", &self.api_key)])
            .send()
            .await
            .map_err(|e| AppError::ProviderUnavailable(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                endpoint = endpoint,
                "Google Maps {} HTTP error {}: {}",
                endpoint, status, error_text
            );
            return Err(AppError::ProviderUnavailable(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ProviderUnavailable(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl RoutingProvider for GoogleMapsClient {
    /// Directions with alternatives. Only the first leg of each route is read.
    async fn directions(&self, origin: &str, destination: &str) -> Result<DirectionsResult> {
        tracing::debug!(
            origin = origin,
            destination = destination,
            "Google Directions request: {} -> {}",
            origin, destination
        );

        let api: DirectionsApiResponse = self
            .get_json(
                "directions",
                &[
                    ("origin", origin),
                    ("destination", destination),
                    ("alternatives", "true"),
                ],
            )
            .await?;

        let candidates: Vec<RouteCandidate> = api
            .routes
            .into_iter()
            .filter_map(|route| {
                let leg = route.legs.into_iter().next()?;
                Some(RouteCandidate {
                    distance_meters: leg.distance.value,
                    duration_seconds: leg.duration.value,
                    encoded_path: route.overview_polyline.points,
                })
            })
            .collect();

        tracing::debug!(
            status = %api.status,
            routes = candidates.len(),
            "Google Directions response: status {}, {} routes",
            api.status, candidates.len()
        );

        Ok(DirectionsResult {
            status: api.status,
            candidates,
        })
    }

    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>> {
        let api: GeocodeApiResponse = self.get_json("geocode", &[("address", address)]).await?;

        if api.status != STATUS_OK {
            tracing::debug!(
                status = %api.status,
                "Geocoding '{}' returned status {}",
                address, api.status
            );
            return Ok(None);
        }

        Ok(api.results.into_iter().next().and_then(|result| {
            let location = result.geometry.location;
            Coordinates::new(location.lat, location.lng).ok()
        }))
    }
}

// Google Maps API response types

#[derive(Debug, Deserialize)]
struct DirectionsApiResponse {
    status: String,
    #[serde(default)]
    routes: Vec<ApiRoute>,
}

#[derive(Debug, Deserialize)]
struct ApiRoute {
    #[serde(default)]
    legs: Vec<ApiLeg>,
    overview_polyline: ApiPolyline,
}

#[derive(Debug, Deserialize)]
struct ApiLeg {
    distance: ApiValue<f64>, // meters
    duration: ApiValue<u64>, // seconds
}

#[derive(Debug, Deserialize)]
struct ApiValue<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
struct ApiPolyline {
    points: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeApiResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: ApiLocation,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    lat: f64,
    lng: f64,
}
