//! Error conversions - HTTP response envelope
//!
//! Home of the response body: every error leaves the server as
//! `{ "error": true, "message": "..." }`.

use serde::Serialize;

use super::app_error::AppError;

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub error: bool,
    pub message: &'a str,
}

impl AppError {
    /// Build the envelope for this error
    pub fn envelope(&self) -> ErrorEnvelope<'_> {
        ErrorEnvelope {
            error: true,
            message: self.public_message(),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.envelope())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let err = AppError::unauthorized("Invalid JWT token");
        let body = serde_json::to_value(err.envelope()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": true, "message": "Invalid JWT token" })
        );
    }

    #[test]
    fn test_envelope_redacts_internal() {
        let err = AppError::internal("pool closed");
        let body = serde_json::to_value(err.envelope()).unwrap();
        assert_eq!(body["message"], "Internal server error");
    }
}
