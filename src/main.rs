use axum::Router;
use ecofrete::cache::{MemoryCacheService, RouteCache};
use ecofrete::config::Config;
use ecofrete::constants::DEFAULT_MEMORY_CACHE_MAX_ENTRIES;
use ecofrete::db::DatasetStore;
use ecofrete::format::NumberFormat;
use ecofrete::services::google_maps::GoogleMapsClient;
use ecofrete::services::report_builder::ReportBuilder;
use ecofrete::services::routing::{RouteService, RoutingProvider};
use ecofrete::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecofrete=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting EcoFrete API server");
    tracing::info!("Configuration loaded successfully");

    let store = DatasetStore::new(&config.dataset_path, NumberFormat::brazilian());
    if store.exists() {
        tracing::info!("Using dataset at {}", config.dataset_path);
    } else {
        tracing::info!(
            "Dataset {} not found, it will be created on first report",
            config.dataset_path
        );
    }

    let cache: Arc<dyn RouteCache> = Arc::new(MemoryCacheService::new(
        config.route_cache_ttl,
        DEFAULT_MEMORY_CACHE_MAX_ENTRIES,
    ));
    tracing::info!(
        "Route cache: {} (ttl {}s)",
        cache.backend_name(),
        config.route_cache_ttl
    );

    // Initialize services
    let provider: Arc<dyn RoutingProvider> =
        Arc::new(GoogleMapsClient::from_config(&config.google_maps));
    let route_service = RouteService::new(provider).with_cache(cache);
    let report_builder = ReportBuilder::new(config.propulsion);

    // Create application state
    let state = Arc::new(AppState::new(route_service, report_builder, store));

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", ecofrete::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
