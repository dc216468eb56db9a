use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// JSON error reply: `{"message": ...}` plus the raw `error` text for 5xx.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, error: Option<String>) -> Self {
        Self { status, message: message.into(), error }
    }

    /// Validation → 400, NotFound → 404, anything else → 500 with `failure` as
    /// the message and the underlying error passed through.
    pub fn from_service(e: ServiceError, failure: &str) -> Self {
        match e {
            ServiceError::Validation(m) => Self::new(StatusCode::BAD_REQUEST, m, None),
            ServiceError::NotFound(m) => Self::new(StatusCode::NOT_FOUND, m, None),
            ServiceError::Db(m) | ServiceError::Upstream(m) => {
                error!(err = %m, %failure, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure, Some(m))
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.error {
            Some(err) => serde_json::json!({"message": self.message, "error": err}),
            None => serde_json::json!({"message": self.message}),
        };
        (self.status, Json(body)).into_response()
    }
}
