use super::consumption::{diesel_consumption, electric_consumption, hybrid_consumption, round2};
use crate::error::Result;
use crate::models::{DieselParameters, ElectricParameters, HybridParameters};

/// kg CO2 from burning the diesel consumption
pub fn diesel_emission(
    distance_km: f64,
    weight_tonnes: f64,
    params: &DieselParameters,
) -> Result<f64> {
    let liters = diesel_consumption(distance_km, weight_tonnes, params)?;
    Ok(round2(liters * params.emission_coefficient_kg_per_liter))
}

/// kg CO2 from the hybrid's own (offset-adjusted) consumption
pub fn hybrid_emission(
    distance_km: f64,
    weight_tonnes: f64,
    params: &HybridParameters,
) -> Result<f64> {
    let liters = hybrid_consumption(distance_km, weight_tonnes, params)?;
    Ok(round2(liters * params.emission_coefficient_kg_per_liter))
}

/// kg CO2 attributed to the grid energy drawn
pub fn electric_emission(
    distance_km: f64,
    weight_tonnes: f64,
    params: &ElectricParameters,
) -> Result<f64> {
    let kwh = electric_consumption(distance_km, weight_tonnes, params)?;
    Ok(round2(kwh * params.emission_coefficient_kg_per_kwh))
}
