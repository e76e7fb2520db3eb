//! HTTP adapter exposing the rule engine as a JSON API.
//!
//! Routing, CORS, the panic boundary and request logging all live here;
//! the rule engine itself performs no I/O.

mod error;
mod handlers;
mod routes;

pub use error::{ApiError, ApiResult};

use std::any::Any;

use axum::Router;
use axum::http::{HeaderName, Method, header};
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

/// Builds the application router with every transport layer applied.
///
/// CORS sits outermost so panic responses also carry the cross-origin
/// headers; the panic boundary wraps the routes and the request logger.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    routes::validation_routes()
        .merge(routes::health_routes())
        .fallback(handlers::route_not_found)
        .layer(axum::middleware::from_fn(request_logger))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    ApiError::Internal.into_response()
}

async fn request_logger(
    req: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let elapsed = start.elapsed().as_millis();
    let status = response.status().as_u16();

    tracing::info!("{method} {uri} {status} {elapsed}ms");

    response
}
