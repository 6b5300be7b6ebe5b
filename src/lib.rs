// Library exports for testing and reusability

pub mod analysis;
pub mod cache;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod format;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use db::DatasetStore;
use models::{Dataset, ReportRow};
use services::report_builder::ReportBuilder;
use services::routing::RouteService;
use tokio::sync::Mutex;

// App state for sharing across the application
pub struct AppState {
    pub route_service: RouteService,
    pub report_builder: ReportBuilder,
    pub store: DatasetStore,
    /// Serializes appends: the dataset assumes a single writer
    write_lock: Mutex<()>,
}

impl AppState {
    pub fn new(
        route_service: RouteService,
        report_builder: ReportBuilder,
        store: DatasetStore,
    ) -> Self {
        AppState {
            route_service,
            report_builder,
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Append rows off the async runtime, one writer at a time
    pub async fn append_rows(&self, rows: Vec<ReportRow>) -> Result<usize> {
        let _guard = self.write_lock.lock().await;
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.append(&rows))
            .await
            .map_err(|e| AppError::Internal(format!("Dataset append task failed: {}", e)))?
    }

    pub async fn load_dataset(&self) -> Result<Dataset> {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.load())
            .await
            .map_err(|e| AppError::Internal(format!("Dataset load task failed: {}", e)))?
    }
}
