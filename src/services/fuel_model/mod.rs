//! Consumption, cost and CO2 models for the three propulsion modes.
//!
//! Every figure is derived from the mode's consumption, so cost and
//! emission always agree with the consumption reported next to them.
//! All results are rounded to 2 decimal places.

pub mod consumption;
pub mod cost;
pub mod emission;

pub use consumption::{
    adjustment_factor, diesel_consumption, electric_consumption, hybrid_consumption, round2,
};
pub use cost::{diesel_cost, electric_cost, hybrid_cost};
pub use emission::{diesel_emission, electric_emission, hybrid_emission};

use crate::error::Result;
use crate::models::{EnergyPrices, ModeFigures, PropulsionParameters};

/// Figures for all three modes over one route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripFigures {
    pub diesel: ModeFigures,
    pub hybrid: ModeFigures,
    pub electric: ModeFigures,
}

/// Binds the per-mode parameters so callers only supply trip data
#[derive(Debug, Clone, Copy, Default)]
pub struct FuelModel {
    params: PropulsionParameters,
}

impl FuelModel {
    pub fn new(params: PropulsionParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PropulsionParameters {
        &self.params
    }

    pub fn evaluate(
        &self,
        distance_km: f64,
        weight_tonnes: f64,
        diesel_price: f64,
        prices: &EnergyPrices,
    ) -> Result<TripFigures> {
        let p = &self.params;
        let hybrid_price = prices.hybrid_price_per_liter.unwrap_or(diesel_price);

        Ok(TripFigures {
            diesel: ModeFigures {
                consumption: diesel_consumption(distance_km, weight_tonnes, &p.diesel)?,
                cost: diesel_cost(distance_km, weight_tonnes, diesel_price, &p.diesel)?,
                emission_kg: diesel_emission(distance_km, weight_tonnes, &p.diesel)?,
            },
            hybrid: ModeFigures {
                consumption: hybrid_consumption(distance_km, weight_tonnes, &p.hybrid)?,
                cost: hybrid_cost(distance_km, weight_tonnes, hybrid_price, &p.hybrid)?,
                emission_kg: hybrid_emission(distance_km, weight_tonnes, &p.hybrid)?,
            },
            electric: ModeFigures {
                consumption: electric_consumption(distance_km, weight_tonnes, &p.electric)?,
                cost: electric_cost(
                    distance_km,
                    weight_tonnes,
                    prices.electric_price_per_kwh,
                    &p.electric,
                )?,
                emission_kg: electric_emission(distance_km, weight_tonnes, &p.electric)?,
            },
        })
    }
}
