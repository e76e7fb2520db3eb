//! Transport-level errors with the fixed wire shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::types::ValidationOutcome;

/// Failures of the request itself, distinct from rule violations.
///
/// Both variants serialize to the same `{"valida": false, "erros": [..]}`
/// shape the validation endpoint uses, so callers parse one format.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body carried no usable `senha` field.
    #[error("Campo 'senha' é obrigatório e deve ser uma string")]
    MissingPassword,
    /// Something unexpected happened while handling the request.
    /// No internals are exposed to the caller.
    #[error("Erro interno do servidor")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingPassword => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ValidationOutcome::rejected(vec![self.to_string()]);
        (self.status(), Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
