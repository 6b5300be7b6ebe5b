use crate::error::{AppError, Result};
use crate::models::route::{RouteQuery, RouteResponse};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /routes
/// Up to three normalized alternatives between two addresses
pub async fn find_routes(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteQuery>,
) -> Result<Json<RouteResponse>> {
    request.validate().map_err(AppError::InvalidInput)?;

    tracing::info!(
        origin = %request.origin,
        destination = %request.destination,
        "Route request: {} -> {}",
        request.origin,
        request.destination
    );

    let routes = state
        .route_service
        .find_routes(&request.origin, &request.destination)
        .await;

    if routes.is_empty() {
        tracing::info!("No routes found for {} -> {}", request.origin, request.destination);
    }

    Ok(Json(RouteResponse { routes }))
}
