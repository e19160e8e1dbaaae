use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use veracity_core::errors::{VeracityError, VeracityErrorCode};

pub enum ApiError {
    Veracity(VeracityError),
    BadRequest(String),
    NotFound(String),
}

impl From<VeracityError> for ApiError {
    fn from(err: VeracityError) -> Self {
        Self::Veracity(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Veracity(VeracityError::Internal {
            reason: err.to_string(),
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Veracity(err) if err.is_client_error() => {
                (StatusCode::BAD_REQUEST, err.safe_message())
            }
            Self::Veracity(err) => {
                tracing::error!(error = %err.tagged_string(), "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.safe_message())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
