//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::CallsError;
use crate::domain::calls::CallsDomainError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 会话 ID 缺失或非法
    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),

    /// 请求体无法解析
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// 构造上游请求失败
    #[error("Request construction error: {0}")]
    RequestError(String),

    /// 外部服务错误（传输失败、超时）
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl From<CallsDomainError> for ApplicationError {
    fn from(err: CallsDomainError) -> Self {
        match err {
            CallsDomainError::InvalidSessionId(_) => Self::InvalidSessionId(err.to_string()),
            CallsDomainError::InvalidTracksBody(_) => Self::InvalidPayload(err.to_string()),
        }
    }
}

impl From<CallsError> for ApplicationError {
    fn from(err: CallsError) -> Self {
        match err {
            CallsError::InvalidRequest(msg) => Self::RequestError(msg),
            other => Self::ExternalServiceError(other.to_string()),
        }
    }
}
