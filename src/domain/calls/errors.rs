//! Calls Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CallsDomainError {
    #[error("无效的会话 ID: {0:?}")]
    InvalidSessionId(String),

    #[error("无效的 track 请求体: {0}")]
    InvalidTracksBody(String),
}
