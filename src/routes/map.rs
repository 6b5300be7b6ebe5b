use crate::error::{AppError, Result};
use crate::models::route::RouteQuery;
use crate::services::map::map_view;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use geojson::FeatureCollection;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct MapQuery {
    pub origin: String,
    pub destination: String,
    /// 1-based route number, as in the "Rota N" labels
    #[serde(default = "default_route")]
    pub route: usize,
}

fn default_route() -> usize {
    1
}

/// GET /map?origin=..&destination=..&route=N
/// GeoJSON with origin/destination markers and the chosen route's line
pub async fn route_map(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MapQuery>,
) -> Result<Json<FeatureCollection>> {
    RouteQuery {
        origin: query.origin.clone(),
        destination: query.destination.clone(),
    }
    .validate()
    .map_err(AppError::InvalidInput)?;

    if query.route == 0 {
        return Err(AppError::InvalidInput("route must be 1 or greater".to_string()));
    }

    let routes = state
        .route_service
        .find_routes(&query.origin, &query.destination)
        .await;

    let route = routes.get(query.route - 1).ok_or_else(|| {
        AppError::NotFound(format!(
            "Route {} between '{}' and '{}'",
            query.route, query.origin, query.destination
        ))
    })?;

    let origin = state
        .route_service
        .locate(&query.origin)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Address '{}'", query.origin)))?;
    let destination = state
        .route_service
        .locate(&query.destination)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Address '{}'", query.destination)))?;

    Ok(Json(map_view(&origin, &destination, &route.encoded_path)?))
}
