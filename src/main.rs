// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::application::dashboard_service::DashboardService;
use crate::application::dataset_repository::DatasetRepository;
use crate::infrastructure::config::{load_charts_config, load_server_config, DatasetSource};
use crate::infrastructure::file_repository::FileDatasetRepository;
use crate::infrastructure::http_repository::HttpDatasetRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;
    let charts_config = load_charts_config()?;

    // Create repository (infrastructure layer)
    let repository: Arc<dyn DatasetRepository> = match server_config.datasets.source {
        DatasetSource::File => Arc::new(FileDatasetRepository::new(&server_config.datasets.root)),
        DatasetSource::Http => {
            Arc::new(HttpDatasetRepository::new(server_config.datasets.root.clone()))
        }
    };

    // Create service (application layer)
    let dashboard_service = DashboardService::new(repository, charts_config.style);

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let mut router = Router::new()
        .route("/healthz", get(health_check))
        .route("/api/dashboard", get(get_dashboard))
        .with_state(state);

    // Serve the host page and raw datasets when a static dir is configured
    if let Some(static_dir) = &server_config.server.static_dir {
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    // Start server
    let addr: SocketAddr = server_config.server.listen.parse()?;
    println!("Starting toko-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
