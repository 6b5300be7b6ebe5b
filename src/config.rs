use crate::constants::*;
use crate::models::PropulsionParameters;
use std::env;

/// Credentials and endpoint for the Google Maps collaborator
#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    pub api_key: String,
    /// Overrides the public endpoint, e.g. for a proxy
    pub base_url: Option<String>,
}

impl GoogleMapsConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(GoogleMapsConfig {
            api_key: env::var("GOOGLE_MAPS_API_KEY")
                .map_err(|_| "GOOGLE_MAPS_API_KEY must be set")?,
            base_url: env::var("GOOGLE_MAPS_BASE_URL").ok(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub google_maps: GoogleMapsConfig,
    pub dataset_path: String,
    pub route_cache_ttl: u64,
    pub propulsion: PropulsionParameters,
}

/// Dataset location alone, for offline tools that never reach the provider
pub fn dataset_path_from_env() -> Result<String, String> {
    dotenv::dotenv().ok();

    let dataset_path =
        env::var("DATASET_PATH").unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string());
    if dataset_path.trim().is_empty() {
        return Err("DATASET_PATH must not be empty".to_string());
    }
    Ok(dataset_path)
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let dataset_path = dataset_path_from_env()?;

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            google_maps: GoogleMapsConfig::from_env()?,
            dataset_path,
            route_cache_ttl: env::var("ROUTE_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_ROUTE_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid ROUTE_CACHE_TTL")?,
            propulsion: PropulsionParameters::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
