//! # HTTP API
//!
//! Axum routers and handlers for the two resource collections, the
//! health and metrics routes, shared state, and the server wrapper that
//! binds them to a listener.

pub mod body;
pub mod config;
pub mod errors;
pub mod exercises;
pub mod health;
pub mod observe;
pub mod response;
pub mod server;
pub mod sessions;
pub mod state;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use state::{AppState, SharedState};
