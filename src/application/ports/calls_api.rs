//! Calls API Port - Cloudflare Calls 上游抽象
//!
//! 定义转发到上游信令 API 的接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::{self, BoxStream, StreamExt};
use http::{HeaderValue, StatusCode};
use thiserror::Error;

use crate::domain::calls::RelayRoute;

/// 上游调用错误
#[derive(Debug, Error)]
pub enum CallsError {
    /// 构造请求失败（URL、请求头等）
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 读取上游响应体失败
    #[error("Body error: {0}")]
    BodyError(String),
}

/// 上游响应体字节流
pub type UpstreamBody = BoxStream<'static, Result<Bytes, CallsError>>;

/// 转发请求
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub route: RelayRoute,
    /// 入站请求体原始字节
    pub body: Bytes,
}

/// 上游响应
///
/// 状态码、Content-Type、响应体都不做任何修改。
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub content_length: Option<u64>,
    pub body: UpstreamBody,
}

impl UpstreamResponse {
    /// 由完整字节构造响应
    pub fn from_bytes(
        status: StatusCode,
        content_type: Option<HeaderValue>,
        body: impl Into<Bytes>,
    ) -> Self {
        let body: Bytes = body.into();
        Self {
            status,
            content_type,
            content_length: Some(body.len() as u64),
            body: stream::once(async move { Ok(body) }).boxed(),
        }
    }
}

impl std::fmt::Debug for UpstreamResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamResponse")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Calls API Port
///
/// 外部信令服务的抽象接口
#[async_trait]
pub trait CallsApiPort: Send + Sync {
    /// 把请求转发到上游，返回上游的原始响应
    async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, CallsError>;
}
