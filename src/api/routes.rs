//! Route tables.

use axum::Router;
use axum::routing::{get, post};

use super::handlers;

pub fn validation_routes() -> Router {
    Router::new().route("/validar-senha", post(handlers::validate_password))
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(handlers::health_check))
}
