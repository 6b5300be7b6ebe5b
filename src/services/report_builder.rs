use crate::error::{AppError, Result};
use crate::models::route::route_label;
use crate::models::{EnergyPrices, PropulsionParameters, ReportRow, RouteRecord, TripContext};
use crate::services::fuel_model::FuelModel;

/// Joins normalized routes with trip data and the fuel model figures
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportBuilder {
    model: FuelModel,
}

impl ReportBuilder {
    pub fn new(params: PropulsionParameters) -> Self {
        Self {
            model: FuelModel::new(params),
        }
    }

    pub fn params(&self) -> &PropulsionParameters {
        self.model.params()
    }

    /// One row per route, labelled by slot ("Rota 1", "Rota 2", ...)
    pub fn build(
        &self,
        routes: &[RouteRecord],
        trip: &TripContext,
        prices: &EnergyPrices,
    ) -> Result<Vec<ReportRow>> {
        trip.validate().map_err(AppError::InvalidInput)?;

        routes
            .iter()
            .enumerate()
            .map(|(index, route)| {
                let figures = self.model.evaluate(
                    route.distance_km,
                    trip.weight_tonnes,
                    trip.diesel_price,
                    prices,
                )?;

                Ok(ReportRow {
                    route: route_label(index),
                    origin: trip.origin.clone(),
                    destination: trip.destination.clone(),
                    distance_km: route.distance_km,
                    duration: route.duration.clone(),
                    diesel_price: trip.diesel_price,
                    weight_tonnes: trip.weight_tonnes,
                    diesel: figures.diesel,
                    hybrid: figures.hybrid,
                    electric: figures.electric,
                })
            })
            .collect()
    }
}
