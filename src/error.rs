use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::services::itinerary_store::StoreError;
use crate::services::upstream::UpstreamError;

/// Every failure a handler can end with. Each variant maps to exactly one
/// HTTP status and a stable `reason` string.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing or empty X-Api-Key header")]
    Unauthorized,

    #[error("malformed request body: {0}")]
    BadInput(String),

    #[error("upstream responded with status {0}")]
    UpstreamStatus(StatusCode),

    #[error("upstream request failed: {0}")]
    Upstream(UpstreamError),

    #[error("storage operation failed: {0}")]
    Storage(StoreError),

    #[error("operation timed out")]
    Timeout,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl ApiError {
    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "unauthorized",
            ApiError::BadInput(_) => "bad_input",
            ApiError::UpstreamStatus(_) => "upstream_status",
            ApiError::Upstream(_) => "upstream_error",
            ApiError::Storage(_) => "storage_error",
            ApiError::Timeout => "timeout",
        }
    }

    // Driver and transport text stays in the logs
    fn public_message(&self) -> String {
        match self {
            ApiError::Upstream(_) => "Failed to reach upstream provider".to_string(),
            ApiError::Storage(_) => "Failed to access itinerary storage".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Timeout => ApiError::Timeout,
            other => ApiError::Upstream(other),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Timeout(_) => ApiError::Timeout,
            other => ApiError::Storage(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadInput(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamStatus(status) => *status,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        HttpResponse::build(status).json(ErrorBody {
            error: self.reason(),
            message: self.public_message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::BadInput("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UpstreamStatus(StatusCode::TOO_MANY_REQUESTS).status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::from(UpstreamError::Transport("connection refused".to_string()))
                .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(ApiError::Timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_timeouts_collapse_into_one_variant() {
        assert!(matches!(
            ApiError::from(UpstreamError::Timeout),
            ApiError::Timeout
        ));
        assert!(matches!(
            ApiError::from(StoreError::Timeout(Duration::from_secs(15))),
            ApiError::Timeout
        ));
    }

    #[test]
    fn test_storage_detail_is_not_exposed() {
        let err = ApiError::from(StoreError::Backend("auth failed for user admin".to_string()));
        assert_eq!(err.reason(), "storage_error");
        assert!(!err.public_message().contains("admin"));
    }

    #[test]
    fn test_bad_input_keeps_decode_message() {
        let err = ApiError::BadInput("invalid type: string".to_string());
        assert!(err.public_message().contains("invalid type"));
    }
}
