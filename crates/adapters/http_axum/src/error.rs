//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use kennywood_domain::error::{FieldErrors, KennywoodError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

/// Maps [`KennywoodError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(KennywoodError);

impl From<KennywoodError> for ApiError {
    fn from(err: KennywoodError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ValidationError::MalformedBody(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            KennywoodError::Validation(ValidationError::Fields(fields)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "invalid request body".to_string(),
                    fields: Some(fields),
                },
            ),
            KennywoodError::Validation(err @ ValidationError::MalformedBody(_)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: err.to_string(),
                    fields: None,
                },
            ),
            KennywoodError::NotFound(err) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message: err.to_string(),
                    fields: None,
                },
            ),
            KennywoodError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: "internal server error".to_string(),
                        fields: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
