//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::outcome::Flash;
use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub messages: Vec<Flash>,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, messages: Vec<Flash>) -> Self {
        let error = messages
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            errno,
            error,
            messages,
            data: None,
        }
    }
}

/// 错误码定义（与 HTTP 状态码一致）
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const CONFLICT: i32 = 409;
    pub const PAYLOAD_TOO_LARGE: i32 = 413;
    pub const INTERNAL_ERROR: i32 = 500;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(Vec<Flash>),
    NotFound(Vec<Flash>),
    Conflict(Vec<Flash>),
    PayloadTooLarge(Vec<Flash>),
    Internal(Vec<Flash>),
}

impl ApiError {
    fn parts(self) -> (StatusCode, i32, Vec<Flash>) {
        match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, errno::BAD_REQUEST, m),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, errno::NOT_FOUND, m),
            ApiError::Conflict(m) => (StatusCode::CONFLICT, errno::CONFLICT, m),
            ApiError::PayloadTooLarge(m) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                errno::PAYLOAD_TOO_LARGE,
                m,
            ),
            ApiError::Internal(m) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                errno::INTERNAL_ERROR,
                m,
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errno, messages) = self.parts();
        let response = ErrorResponse::new(errno, messages);

        if status.is_server_error() {
            tracing::error!(errno = errno, error = %response.error, "Request failed");
        } else {
            tracing::warn!(errno = errno, error = %response.error, "Request rejected");
        }

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        let messages = e.flashes();
        match e {
            ApplicationError::Validation(_) => ApiError::BadRequest(messages),
            ApplicationError::DuplicateTitle(_) => ApiError::Conflict(messages),
            ApplicationError::NotFound { .. } => ApiError::NotFound(messages),
            ApplicationError::StorageError { .. } => ApiError::Internal(messages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::BookOperation;
    use crate::domain::book::BookId;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApplicationError::DuplicateTitle("Dune".into()),
                StatusCode::CONFLICT,
            ),
            (
                ApplicationError::not_found(BookId::new(1)),
                StatusCode::NOT_FOUND,
            ),
            (
                ApplicationError::storage(BookOperation::Delete, "io"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ApplicationError::Validation(vec![]), StatusCode::BAD_REQUEST),
        ];

        for (err, status) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }
}
