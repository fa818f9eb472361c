use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use service::catalog::errors::CatalogError;
use service::users::errors::RegisterError;

/// HTTP-facing error envelope. Every variant renders as
/// `{"message": <text>}` with the status code the client contract fixes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Register(#[from] RegisterError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            // The registration contract reports both failure modes as 404.
            ApiError::Register(_) => StatusCode::NOT_FOUND,
            ApiError::Catalog(CatalogError::Retrieval) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Catalog(_) => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> u16 {
        match self {
            ApiError::Register(e) => e.code(),
            ApiError::Catalog(e) => e.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        if status.is_server_error() {
            error!(code = self.code(), error = %msg, "request failed");
        } else {
            warn!(code = self.code(), error = %msg, "request rejected");
        }
        (status, Json(serde_json::json!({ "message": msg }))).into_response()
    }
}
