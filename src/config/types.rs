//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::infrastructure::adapters::{HttpCallsClientConfig, DEFAULT_CALLS_BASE_URL};
use crate::infrastructure::http::server::DEFAULT_MAX_BODY_BYTES;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// Cloudflare Calls 配置
    #[serde(default)]
    pub calls: CallsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 入站请求体上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8088
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cloudflare Calls 配置
#[derive(Clone, Deserialize)]
pub struct CallsConfig {
    /// App ID（必填）
    #[serde(default)]
    pub app_id: String,

    /// App Secret（必填，不会打印到日志）
    #[serde(default)]
    pub app_secret: String,

    /// API 基础 URL
    #[serde(default = "default_calls_base_url")]
    pub base_url: String,

    /// 上游请求超时（秒）
    #[serde(default = "default_calls_timeout")]
    pub timeout_secs: u64,
}

fn default_calls_base_url() -> String {
    DEFAULT_CALLS_BASE_URL.to_string()
}

fn default_calls_timeout() -> u64 {
    30
}

impl Default for CallsConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_secret: String::new(),
            base_url: default_calls_base_url(),
            timeout_secs: default_calls_timeout(),
        }
    }
}

impl CallsConfig {
    pub fn client_config(&self) -> HttpCallsClientConfig {
        HttpCallsClientConfig::new(&self.app_id, &self.app_secret)
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout_secs)
    }
}

impl std::fmt::Debug for CallsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallsConfig")
            .field("app_id", &self.app_id)
            .field("app_secret", &"***")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
