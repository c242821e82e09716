use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Everything the story endpoint can fail with. Each variant maps onto a
/// terminal JSON response; nothing propagates past the handler boundary.
#[derive(Debug)]
pub enum ApiError {
    /// No usable bearer token in the environment or the request.
    MissingToken,
    /// The request body was parsed but a required field is missing or empty.
    Validation(&'static str),
    /// GitHub rejected the request; its status code is relayed as-is.
    Upstream {
        status: StatusCode,
        message: String,
    },
    /// Local failure: unparseable request body, network error, or an
    /// upstream body that was not JSON.
    Server(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                json!({
                    "error": "Missing GitHub token",
                    "message": "GitHub token not found in environment or Authorization header",
                }),
            ),
            ApiError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation error",
                    "message": message,
                }),
            ),
            ApiError::Upstream { status, message } => (
                status,
                json!({
                    "error": "GitHub API error",
                    "status": status.as_u16(),
                    "message": message,
                }),
            ),
            ApiError::Server(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Server error",
                    "message": message,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
