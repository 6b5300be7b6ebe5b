use crate::analysis::DatasetSummary;
use crate::error::{AppError, Result};
use crate::models::report::ReportResponse;
use crate::models::route::RouteQuery;
use crate::models::trip::ReportRequest;
use crate::models::Dataset;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /reports
/// Compare diesel, hybrid and electric trucks on every route alternative
/// and append the rows to the dataset unless `persist` is false
pub async fn create_report(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportResponse>> {
    RouteQuery {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
    }
    .validate()
    .map_err(AppError::InvalidInput)?;

    let trip = request.trip();
    trip.validate().map_err(AppError::InvalidInput)?;

    tracing::info!(
        origin = %trip.origin,
        destination = %trip.destination,
        weight_tonnes = trip.weight_tonnes,
        diesel_price = trip.diesel_price,
        "Report request: {} -> {}, {:.1}t, R$ {:.2}/L",
        trip.origin,
        trip.destination,
        trip.weight_tonnes,
        trip.diesel_price
    );

    let routes = state
        .route_service
        .find_routes(&trip.origin, &trip.destination)
        .await;

    let rows = state
        .report_builder
        .build(&routes, &trip, &request.prices)?;

    let persisted = if request.persist && !rows.is_empty() {
        state.append_rows(rows.clone()).await?
    } else {
        0
    };

    Ok(Json(ReportResponse { rows, persisted }))
}

/// GET /reports
/// Every persisted row, in append order
pub async fn list_reports(State(state): State<Arc<AppState>>) -> Result<Json<Dataset>> {
    let dataset = state.load_dataset().await?;
    Ok(Json(dataset))
}

/// GET /reports/summary
pub async fn summarize_reports(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DatasetSummary>> {
    let dataset = state.load_dataset().await?;
    Ok(Json(DatasetSummary::from_rows(&dataset.rows)))
}
