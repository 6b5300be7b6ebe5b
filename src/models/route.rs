use crate::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use serde::{Deserialize, Serialize};

/// Provider status that carries usable routes. Anything else means zero results.
pub const STATUS_OK: &str = "OK";

/// One alternative returned by the routing provider, before normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub distance_meters: f64,
    pub duration_seconds: u64,
    /// Encoded polyline, carried through untouched
    pub encoded_path: String,
}

/// Raw outcome of a directions query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResult {
    pub status: String,
    pub candidates: Vec<RouteCandidate>,
}

impl DirectionsResult {
    pub fn ok(candidates: Vec<RouteCandidate>) -> Self {
        DirectionsResult {
            status: STATUS_OK.to_string(),
            candidates,
        }
    }

    pub fn with_status(status: &str) -> Self {
        DirectionsResult {
            status: status.to_string(),
            candidates: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// A normalized route alternative. Its label comes from its slot in the
/// normalized set, so padded duplicates stay identical to their source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub distance_km: f64,
    /// "H Horas e M minutos"
    pub duration: String,
    pub encoded_path: String,
}

/// Display label for the route in slot `index` (0-based)
pub fn route_label(index: usize) -> String {
    format!("Rota {}", index + 1)
}

/// Render a duration as "H Horas e M minutos", truncating leftover seconds
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    format!("{} Horas e {} minutos", hours, minutes)
}

// Request/Response types for API endpoints

#[derive(Debug, Clone, Deserialize)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
}

impl RouteQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.origin.trim().is_empty() {
            return Err("origin must not be empty".to_string());
        }
        if self.destination.trim().is_empty() {
            return Err("destination must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub routes: Vec<RouteRecord>,
}
