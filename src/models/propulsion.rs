use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropulsionMode {
    Diesel,
    Hybrid,
    Electric,
}

impl PropulsionMode {
    pub const ALL: [PropulsionMode; 3] = [
        PropulsionMode::Diesel,
        PropulsionMode::Hybrid,
        PropulsionMode::Electric,
    ];

    /// Unit the consumption figure is expressed in
    pub fn consumption_unit(&self) -> &str {
        match self {
            PropulsionMode::Diesel | PropulsionMode::Hybrid => "litros",
            PropulsionMode::Electric => "kWh",
        }
    }
}

impl fmt::Display for PropulsionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropulsionMode::Diesel => write!(f, "diesel"),
            PropulsionMode::Hybrid => write!(f, "hybrid"),
            PropulsionMode::Electric => write!(f, "electric"),
        }
    }
}

impl FromStr for PropulsionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "diesel" => Ok(PropulsionMode::Diesel),
            "hybrid" | "hibrido" | "híbrido" => Ok(PropulsionMode::Hybrid),
            "electric" | "eletrico" | "elétrico" => Ok(PropulsionMode::Electric),
            _ => Err(format!("Invalid propulsion mode: '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DieselParameters {
    pub base_consumption_km_per_liter: f64,
    pub emission_coefficient_kg_per_liter: f64,
}

impl Default for DieselParameters {
    fn default() -> Self {
        Self {
            base_consumption_km_per_liter: DEFAULT_DIESEL_KM_PER_LITER,
            emission_coefficient_kg_per_liter: DEFAULT_DIESEL_KG_CO2_PER_LITER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HybridParameters {
    pub base_consumption_km_per_liter: f64,
    /// Scales the usable combustion rate down: effective rate is
    /// `base * (1 - electric_offset_fraction)`
    pub electric_offset_fraction: f64,
    pub emission_coefficient_kg_per_liter: f64,
}

impl HybridParameters {
    pub fn effective_km_per_liter(&self) -> f64 {
        self.base_consumption_km_per_liter * (1.0 - self.electric_offset_fraction)
    }
}

impl Default for HybridParameters {
    fn default() -> Self {
        Self {
            base_consumption_km_per_liter: DEFAULT_HYBRID_KM_PER_LITER,
            electric_offset_fraction: DEFAULT_HYBRID_ELECTRIC_OFFSET,
            emission_coefficient_kg_per_liter: DEFAULT_HYBRID_KG_CO2_PER_LITER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectricParameters {
    pub base_consumption_kwh_per_km: f64,
    pub emission_coefficient_kg_per_kwh: f64,
    pub default_price_per_kwh: f64,
}

impl Default for ElectricParameters {
    fn default() -> Self {
        Self {
            base_consumption_kwh_per_km: DEFAULT_ELECTRIC_KWH_PER_KM,
            emission_coefficient_kg_per_kwh: DEFAULT_ELECTRIC_KG_CO2_PER_KWH,
            default_price_per_kwh: DEFAULT_ELECTRIC_PRICE_PER_KWH,
        }
    }
}

/// Per-mode constants used by the consumption, cost and emission models
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PropulsionParameters {
    pub diesel: DieselParameters,
    pub hybrid: HybridParameters,
    pub electric: ElectricParameters,
}

fn env_f64(name: &str, default: f64) -> Result<f64, String> {
    let value: f64 = env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| format!("Invalid {}", name))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} must be a non-negative number", name));
    }
    Ok(value)
}

impl PropulsionParameters {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let params = Self {
            diesel: DieselParameters {
                base_consumption_km_per_liter: env_f64(
                    "DIESEL_BASE_CONSUMPTION_KM_PER_LITER",
                    defaults.diesel.base_consumption_km_per_liter,
                )?,
                emission_coefficient_kg_per_liter: env_f64(
                    "DIESEL_EMISSION_KG_PER_LITER",
                    defaults.diesel.emission_coefficient_kg_per_liter,
                )?,
            },
            hybrid: HybridParameters {
                base_consumption_km_per_liter: env_f64(
                    "HYBRID_BASE_CONSUMPTION_KM_PER_LITER",
                    defaults.hybrid.base_consumption_km_per_liter,
                )?,
                electric_offset_fraction: env_f64(
                    "HYBRID_ELECTRIC_OFFSET_FRACTION",
                    defaults.hybrid.electric_offset_fraction,
                )?,
                emission_coefficient_kg_per_liter: env_f64(
                    "HYBRID_EMISSION_KG_PER_LITER",
                    defaults.hybrid.emission_coefficient_kg_per_liter,
                )?,
            },
            electric: ElectricParameters {
                base_consumption_kwh_per_km: env_f64(
                    "ELECTRIC_BASE_CONSUMPTION_KWH_PER_KM",
                    defaults.electric.base_consumption_kwh_per_km,
                )?,
                emission_coefficient_kg_per_kwh: env_f64(
                    "ELECTRIC_EMISSION_KG_PER_KWH",
                    defaults.electric.emission_coefficient_kg_per_kwh,
                )?,
                default_price_per_kwh: env_f64(
                    "ELECTRIC_PRICE_PER_KWH",
                    defaults.electric.default_price_per_kwh,
                )?,
            },
        };

        params.validate()?;
        Ok(params)
    }

    /// Rates used as divisors must be positive and the hybrid offset must
    /// leave some combustion rate
    pub fn validate(&self) -> Result<(), String> {
        if self.diesel.base_consumption_km_per_liter <= 0.0 {
            return Err("Diesel base consumption must be positive".to_string());
        }
        if self.hybrid.base_consumption_km_per_liter <= 0.0 {
            return Err("Hybrid base consumption must be positive".to_string());
        }
        if !(0.0..1.0).contains(&self.hybrid.electric_offset_fraction) {
            return Err("Hybrid electric offset must be in [0, 1)".to_string());
        }
        Ok(())
    }
}
