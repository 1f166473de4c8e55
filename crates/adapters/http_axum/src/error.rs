//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use dronemart_domain::error::DronemartError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`DronemartError`] to an HTTP response with appropriate status code.
pub struct ApiError(DronemartError);

impl From<DronemartError> for ApiError {
    fn from(err: DronemartError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DronemartError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            DronemartError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dronemart_domain::error::ValidationError;

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let response =
            ApiError(DronemartError::Validation(ValidationError::MissingEmail)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_storage_error_to_internal_server_error() {
        let source = std::io::Error::other("connection reset");
        let response = ApiError(DronemartError::Storage(Box::new(source))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
