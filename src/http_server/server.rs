//! # HTTP Server
//!
//! Combines the employee and observability routers and serves them.

use std::io;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::employee::{EmployeeStore, InMemoryEmployeeStore};
use crate::observability::MetricsRegistry;

use super::config::HttpServerConfig;
use super::employee_routes::{employee_routes, EmployeeState};
use super::observability_routes::{health_routes, observability_routes};

/// HTTP server for the employee service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration and an empty store
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and an empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryEmployeeStore::new()))
    }

    /// Create a new HTTP server serving the given store
    pub fn with_store<S: EmployeeStore + 'static>(config: HttpServerConfig, store: Arc<S>) -> Self {
        let router = Self::build_router(store, Arc::new(MetricsRegistry::new()));
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router<S: EmployeeStore + 'static>(
        store: Arc<S>,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let state = Arc::new(EmployeeState::new(store, metrics));

        Router::new()
            .merge(health_routes())
            .merge(observability_routes(state.clone()))
            .merge(employee_routes(state))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address.
    ///
    /// Host names are resolved, so `localhost:8080` binds like `127.0.0.1:8080`.
    pub async fn bind(&self) -> Result<TcpListener, io::Error> {
        TcpListener::bind(self.config.socket_addr()).await
    }

    /// Serve until Ctrl+C, then drain in-flight requests and return
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = self.bind().await?;
        let addr = listener.local_addr()?;
        info!(%addr, "employee service listening");
        info!("endpoints: /employees, /employees/all, /health, /metrics");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("employee service stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, shutting down"),
        Err(e) => {
            warn!(error = %e, "failed to listen for Ctrl+C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9000);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new();
        let _router = server.router();
    }

    #[tokio::test]
    async fn test_bind_resolves_host_name() {
        let config = HttpServerConfig {
            host: "localhost".to_string(),
            port: 0,
            ..Default::default()
        };
        let listener = HttpServer::with_config(config).bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_ip_literal() {
        let config = HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Default::default()
        };
        let listener = HttpServer::with_config(config).bind().await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_poisoned_store_is_internal_error() {
        let store = Arc::new(InMemoryEmployeeStore::new());
        store.poison();
        let router = HttpServer::build_router(store, Arc::new(MetricsRegistry::new()));

        let request = Request::builder()
            .uri("/employees")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
