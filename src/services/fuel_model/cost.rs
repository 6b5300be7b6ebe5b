use super::consumption::{
    diesel_consumption, electric_consumption, ensure_non_negative, hybrid_consumption, round2,
};
use crate::error::Result;
use crate::models::{DieselParameters, ElectricParameters, HybridParameters};

/// Diesel cost in R$. The price is per trip and has no default.
pub fn diesel_cost(
    distance_km: f64,
    weight_tonnes: f64,
    price_per_liter: f64,
    params: &DieselParameters,
) -> Result<f64> {
    ensure_non_negative("diesel price", price_per_liter)?;
    let liters = diesel_consumption(distance_km, weight_tonnes, params)?;
    Ok(round2(liters * price_per_liter))
}

/// Hybrid cost in R$. Callers pass the diesel price unless they have a
/// dedicated hybrid fuel price.
pub fn hybrid_cost(
    distance_km: f64,
    weight_tonnes: f64,
    price_per_liter: f64,
    params: &HybridParameters,
) -> Result<f64> {
    ensure_non_negative("hybrid fuel price", price_per_liter)?;
    let liters = hybrid_consumption(distance_km, weight_tonnes, params)?;
    Ok(round2(liters * price_per_liter))
}

/// Electric cost in R$, using `params.default_price_per_kwh` unless overridden
pub fn electric_cost(
    distance_km: f64,
    weight_tonnes: f64,
    price_per_kwh: Option<f64>,
    params: &ElectricParameters,
) -> Result<f64> {
    let price = price_per_kwh.unwrap_or(params.default_price_per_kwh);
    ensure_non_negative("electricity price", price)?;
    let kwh = electric_consumption(distance_km, weight_tonnes, params)?;
    Ok(round2(kwh * price))
}
