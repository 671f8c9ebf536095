//! 请求体提取
//!
//! 包装 `axum::Json`，解析失败时仍返回统一的错误信封

use axum::{
    async_trait,
    http::StatusCode,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::application::outcome::Flash;
use crate::infrastructure::http::error::ApiError;

/// JSON 请求体，拒绝时映射为 `ApiError`
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let messages = vec![Flash::warning(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))];

        // 超出 DefaultBodyLimit 时保留 413
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(messages)
        } else {
            ApiError::BadRequest(messages)
        }
    }
}
