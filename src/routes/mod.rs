pub mod debug;
pub mod map;
pub mod report;
pub mod route_query;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/routes", post(route_query::find_routes))
        .route("/reports", post(report::create_report).get(report::list_reports))
        .route("/reports/summary", get(report::summarize_reports))
        .route("/map", get(map::route_map))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
