use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check dataset and configuration status
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    status["checks"]["dataset_path"] = json!(state.store.path().display().to_string());

    // Check dataset
    match state.load_dataset().await {
        Ok(dataset) => {
            status["checks"]["dataset"] = json!(if state.store.exists() { "ok" } else { "not created" });
            status["checks"]["row_count"] = json!(dataset.len());
        }
        Err(e) => {
            status["checks"]["dataset"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    // Check propulsion parameters
    match state.report_builder.params().validate() {
        Ok(()) => {
            status["checks"]["propulsion"] = json!("ok");
        }
        Err(e) => {
            status["checks"]["propulsion"] = json!({"error": e});
            status["status"] = json!("error");
        }
    }

    // Cache stats
    if let Some(cache) = state.route_service.cache() {
        let stats = cache.get_stats().await;
        status["checks"]["cache"] = json!({
            "backend": cache.backend_name(),
            "hits": stats.hits,
            "misses": stats.misses,
            "hit_rate": stats.hit_rate,
            "entries": stats.entries,
        });
    }

    Json(status)
}
