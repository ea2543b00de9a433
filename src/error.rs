//! http-ip-gw error types

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Core gateway error type
#[derive(thiserror::Error, Debug)]
pub enum HttpIpGatewayError {
    /// Configuration could not be parsed. This includes invalid IP addresses
    /// and invalid CIDR ranges in the allowlist.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    /// Low level IO errors, such as failing to bind the listener
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// None of the addresses a request can be attributed to are on the allowlist
    #[error("Forbidden access")]
    ForbiddenAccess,
}

/// Gateway result type.
pub type HttpIpGatewayResult<T> = Result<T, HttpIpGatewayError>;

/// Error format returned to the caller.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    /// The error message
    pub error: String,
}

impl From<String> for ErrorResponse {
    fn from(value: String) -> Self {
        Self { error: value }
    }
}

impl HttpIpGatewayError {
    /// Convert error into HTTP status code and error message.
    pub fn into_status_code_and_body(self) -> (StatusCode, String) {
        match self {
            HttpIpGatewayError::ForbiddenAccess => (StatusCode::FORBIDDEN, self.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong".to_string(),
            ),
        }
    }
}

impl IntoResponse for HttpIpGatewayError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, body) = self.into_status_code_and_body();
        (status_code, Json(ErrorResponse::from(body))).into_response()
    }
}
