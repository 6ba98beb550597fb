//! HTTP Calls Client - 调用 Cloudflare Calls REST API
//!
//! 实现 CallsApiPort trait，把入站请求体原样转发到上游
//!
//! 上游 API:
//! {base_url}/apps/{appId}/sessions/...
//! 每个请求固定两个请求头:
//! - Authorization: Bearer {appSecret}
//! - Content-Type: application/json

use async_trait::async_trait;
use futures_util::{StreamExt, TryStreamExt};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{CallsApiPort, CallsError, UpstreamRequest, UpstreamResponse};

/// Cloudflare Calls 默认 API 地址
pub const DEFAULT_CALLS_BASE_URL: &str = "https://rtc.live.cloudflare.com/v1";

/// HTTP Calls 客户端配置
#[derive(Clone)]
pub struct HttpCallsClientConfig {
    /// API 基础 URL（不含 /apps/{appId}）
    pub base_url: String,
    /// Cloudflare Calls App ID
    pub app_id: String,
    /// Cloudflare Calls App Secret
    pub app_secret: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl HttpCallsClientConfig {
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_CALLS_BASE_URL.to_string(),
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            timeout_secs: 30,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl std::fmt::Debug for HttpCallsClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCallsClientConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("app_secret", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// HTTP Calls 客户端
pub struct HttpCallsClient {
    client: Client,
    config: HttpCallsClientConfig,
}

impl HttpCallsClient {
    pub fn new(config: HttpCallsClientConfig) -> Result<Self, CallsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CallsError::InvalidRequest(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 应用根 URL: {base_url}/apps/{appId}
    pub fn app_base_url(&self) -> String {
        format!(
            "{}/apps/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.app_id
        )
    }

    fn route_url(&self, request: &UpstreamRequest) -> String {
        format!("{}/{}", self.app_base_url(), request.route.path())
    }
}

#[async_trait]
impl CallsApiPort for HttpCallsClient {
    async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, CallsError> {
        let url = self.route_url(&request);
        let method = request.route.method();

        tracing::debug!(
            method = %method,
            url = %url,
            body_len = request.body.len(),
            "Forwarding request to Calls API"
        );

        let mut builder = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.config.app_secret);
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let outbound = builder
            .build()
            .map_err(|e| CallsError::InvalidRequest(e.to_string()))?;

        let response = self.client.execute(outbound).await.map_err(|e| {
            if e.is_timeout() {
                CallsError::Timeout
            } else if e.is_connect() {
                CallsError::NetworkError(format!("Cannot connect to Calls API: {}", e))
            } else {
                CallsError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let content_length = response.content_length();

        tracing::info!(
            status = status.as_u16(),
            url = %url,
            content_length = ?content_length,
            "Calls API responded"
        );

        let body = response
            .bytes_stream()
            .map_err(|e| CallsError::BodyError(e.to_string()))
            .boxed();

        Ok(UpstreamResponse {
            status,
            content_type,
            content_length,
            body,
        })
    }
}
