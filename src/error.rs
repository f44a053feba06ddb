use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// Attribution field carried on every JSON response. Cosmetic, not
/// behaviorally load-bearing.
pub const DEVELOPER: &str = "@Al_Azet";

pub type ApiResult<T> = Result<T, ApiError>;

/// Error taxonomy for the lookup pipeline.
///
/// Every failure is terminal for the current request and is surfaced to the
/// caller as a structured JSON body with `status: false`; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `url` query parameter was missing or empty.
    #[error("Missing required 'url' query parameter")]
    MissingParameter,

    /// The resolver answered with a non-2xx HTTP status. The status is
    /// mirrored back to our own caller.
    #[error("Failed to contact upstream service (HTTP {status})")]
    UpstreamTransport { status: u16 },

    /// The resolver body was not parsable JSON, or parsed to something that
    /// is not an object.
    #[error("Upstream returned an invalid response")]
    InvalidUpstreamResponse,

    /// The resolver itself declared an error via its `code` field. The raw
    /// payload is carried along for diagnostics.
    #[error("{message}")]
    UpstreamDeclared { message: String, payload: Value },

    /// Anything unexpected: connect failures, request build errors.
    #[error("Failed to process request")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter => StatusCode::BAD_REQUEST,
            ApiError::UpstreamTransport { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::InvalidUpstreamResponse | ApiError::UpstreamDeclared { .. } => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = json!({
            "status": false,
            "developer": DEVELOPER,
            "message": self.to_string(),
        });

        // Variant-specific diagnostics
        match &self {
            ApiError::UpstreamDeclared { payload, .. } => {
                body["upstream"] = payload.clone();
            }
            ApiError::Internal(detail) => {
                body["error"] = Value::String(detail.clone());
            }
            _ => {}
        }

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(_: serde_json::Error) -> Self {
        ApiError::InvalidUpstreamResponse
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::InvalidUpstreamResponse;
        }
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::MissingParameter.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UpstreamTransport { status: 503 }.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::InvalidUpstreamResponse.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_mirrored_status_falls_back_to_502() {
        // 99 is not a valid HTTP status; the mirror falls back to 502.
        let err = ApiError::UpstreamTransport { status: 99 };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_declared_error_keeps_upstream_message() {
        let err = ApiError::UpstreamDeclared {
            message: "not found".to_string(),
            payload: json!({"code": 1, "msg": "not found"}),
        };
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
