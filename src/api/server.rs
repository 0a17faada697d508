//! # HTTP Server
//!
//! Assembles the resource routers, the health and metrics routes, the
//! request-observation middleware, and CORS into one server.

use std::io;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;

use super::config::ServerConfig;
use super::exercises::exercise_routes;
use super::health::health_routes;
use super::observe::observe_request;
use super::sessions::session_routes;
use super::state::{AppState, SharedState};

/// The fittrack HTTP server.
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server with default configuration and empty collections.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Server with custom configuration and empty collections.
    pub fn with_config(config: ServerConfig) -> Self {
        let state = AppState::shared();
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Builds the combined router over the given shared state.
    fn build_router(config: &ServerConfig, state: SharedState) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(exercise_routes(state.clone()))
            .merge(session_routes(state.clone()))
            .merge(health_routes(state.clone()))
            .layer(middleware::from_fn_with_state(state, observe_request))
            .layer(cors)
    }

    /// The `host:port` string this server will bind.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Consumes the server, returning its router. Tests drive requests
    /// through this without binding a port.
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the listener and serves until the process exits.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bind address '{}': {}", self.config.socket_addr(), err),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        Logger::info("SERVER_LISTENING", &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
