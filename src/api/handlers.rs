//! Request handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use secrecy::ExposeSecret;
use serde_json::json;

use super::error::{ApiError, ApiResult};
use crate::evaluate;
use crate::types::{ValidationOutcome, ValidationRequest};

/// `POST /validar-senha` - validates a candidate password.
///
/// A missing or malformed body, or a `senha` that is absent, not a
/// string, or empty, is a request-shape error answered with 400. Rule
/// violations are not transport errors and travel in a 200 response.
pub async fn validate_password(
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> ApiResult<Json<ValidationOutcome>> {
    tracing::info!("received password validation request");

    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("rejected request body: {rejection}");
        ApiError::MissingPassword
    })?;

    if request.password.expose_secret().is_empty() {
        tracing::warn!("rejected request with empty senha field");
        return Err(ApiError::MissingPassword);
    }

    let outcome = evaluate(&request.password);
    tracing::info!(
        valid = outcome.is_valid(),
        violations = outcome.errors.len(),
        "validation finished"
    );

    Ok(Json(outcome))
}

/// `GET /health` - liveness probe.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"erro": "Rota não encontrada"})),
    )
}
