pub mod price_handlers;

pub use price_handlers::*;

use crate::services::PriceServiceError;
use axum::{http::StatusCode, Json};
use serde::Serialize;

/// 错误响应体，只携带可读的 detail，不泄露内部堆栈
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl ErrorResponse {
    fn error(status: StatusCode, detail: String) -> ApiError {
        (status, Json(Self { detail }))
    }
}

impl From<PriceServiceError> for ErrorResponse {
    fn from(e: PriceServiceError) -> Self {
        Self { detail: e.to_string() }
    }
}

/// 参数错误返回400，上游失败统一返回500
fn service_error(e: PriceServiceError) -> ApiError {
    let status = match &e {
        PriceServiceError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        PriceServiceError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::from(e)))
}
