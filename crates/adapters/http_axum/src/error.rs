//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bombilla_domain::error::BombillaError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BombillaError`] to an HTTP response with appropriate status code.
pub struct ApiError(BombillaError);

impl From<BombillaError> for ApiError {
    fn from(err: BombillaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BombillaError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            BombillaError::Device(err) => {
                tracing::error!(error = %err, "device error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
