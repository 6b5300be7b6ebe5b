use serde::{Deserialize, Serialize};

/// Per-query trip data, applied to every normalized route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripContext {
    pub origin: String,
    pub destination: String,
    pub weight_tonnes: f64,
    /// R$ per liter
    pub diesel_price: f64,
}

impl TripContext {
    pub fn new(origin: &str, destination: &str, weight_tonnes: f64, diesel_price: f64) -> Self {
        TripContext {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight_tonnes,
            diesel_price,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.weight_tonnes.is_finite() || self.weight_tonnes < 0.0 {
            return Err("weight_tonnes must be a non-negative number".to_string());
        }
        if !self.diesel_price.is_finite() || self.diesel_price < 0.0 {
            return Err("diesel_price must be a non-negative number".to_string());
        }
        Ok(())
    }
}

/// Optional price overrides for the non-diesel modes.
/// Hybrid falls back to the trip's diesel price, electric to the
/// configured price per kWh.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyPrices {
    #[serde(default)]
    pub hybrid_price_per_liter: Option<f64>,
    #[serde(default)]
    pub electric_price_per_kwh: Option<f64>,
}

// Request types for API endpoints

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub origin: String,
    pub destination: String,
    pub weight_tonnes: f64,
    pub diesel_price: f64,
    #[serde(default)]
    pub prices: EnergyPrices,
    #[serde(default = "default_persist")]
    pub persist: bool,
}

fn default_persist() -> bool {
    true
}

impl ReportRequest {
    pub fn trip(&self) -> TripContext {
        TripContext::new(
            &self.origin,
            &self.destination,
            self.weight_tonnes,
            self.diesel_price,
        )
    }
}
