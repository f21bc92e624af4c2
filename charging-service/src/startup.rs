//! Application startup and lifecycle management.

use crate::config::ChargingConfig;
use crate::handlers;
use crate::models::ServiceCatalog;
use crate::services::CustomerStore;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::metrics::metrics_middleware;
use service_core::middleware::tracing::request_id_middleware;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ChargingConfig,
    pub store: Arc<CustomerStore>,
    pub catalog: Arc<ServiceCatalog>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration: load the
    /// customer store and catalog, bind the listener, assemble the router.
    pub async fn build(config: ChargingConfig) -> Result<Self, AppError> {
        let store = CustomerStore::load(Path::new(&config.customer_data_path)).map_err(|e| {
            tracing::error!(error = %e, path = %config.customer_data_path, "Failed to load customer store");
            e
        })?;

        let catalog = match &config.catalog_path {
            Some(path) => ServiceCatalog::from_file(Path::new(path)).map_err(|e| {
                tracing::error!(error = %e, path = %path, "Failed to load service catalog");
                e
            })?,
            None => ServiceCatalog::standard(),
        };

        tracing::info!(
            customers = store.len(),
            catalog_services = catalog.len(),
            "Charging data loaded"
        );

        let state = AppState {
            config: config.clone(),
            store: Arc::new(store),
            catalog: Arc::new(catalog),
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_handler))
            .route("/charges", post(handlers::calculate_charge))
            // Compatibility route for clients of the original endpoint.
            .route("/", post(handlers::calculate_charge))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(metrics_middleware))
            .layer(middleware::from_fn(request_id_middleware))
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %addr, "Failed to bind TCP listener");
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port = port, "Charging service listener bound");

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the customer store.
    pub fn store(&self) -> &CustomerStore {
        &self.state.store
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
