//! HTTP Error Handling
//!
//! 错误响应统一为 `{"error": "..."}`，状态码为真实的 HTTP 状态码。
//! 对外只暴露固定文案，细节只写日志。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 对外错误文案
pub mod message {
    pub const INVALID_SESSION_ID: &str = "Missing or invalid sessionId";
    pub const INVALID_TRACK_PAYLOAD: &str = "Invalid track payload";
    pub const CREATE_REQUEST_FAILED: &str = "Failed to create request";
    pub const SEND_REQUEST_FAILED: &str = "Failed to send request";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest { error: &'static str, detail: String },
    Internal { error: &'static str, detail: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::BadRequest { error, detail } => {
                tracing::warn!(status = status.as_u16(), error, detail = %detail, "Bad request");
                error
            }
            ApiError::Internal { error, detail } => {
                tracing::error!(status = status.as_u16(), error, detail = %detail, "Relay failure");
                error
            }
        };

        (status, Json(ErrorResponse::new(error))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::InvalidSessionId(detail) => ApiError::BadRequest {
                error: message::INVALID_SESSION_ID,
                detail,
            },
            ApplicationError::InvalidPayload(detail) => ApiError::BadRequest {
                error: message::INVALID_TRACK_PAYLOAD,
                detail,
            },
            ApplicationError::RequestError(detail) => ApiError::Internal {
                error: message::CREATE_REQUEST_FAILED,
                detail,
            },
            ApplicationError::ExternalServiceError(detail) => ApiError::Internal {
                error: message::SEND_REQUEST_FAILED,
                detail,
            },
        }
    }
}
