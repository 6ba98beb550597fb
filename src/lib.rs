//! calls-relay - Cloudflare Calls 信令中转服务
//!
//! 浏览器客户端调用本服务，本服务注入 `Authorization: Bearer <appSecret>`
//! 后把请求原样转发给 Cloudflare Calls，再把上游响应原样返回。
//! 不保存会话状态，不做重试。
//!
//! 领域层 (domain/):
//! - Calls Context: 上游路由、会话 ID、track 请求体视图
//!
//! 应用层 (application/):
//! - Ports: CallsApiPort
//! - Commands: RelayCommand + RelayHandler
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 入站 REST API
//! - Adapters: reqwest 实现的 Calls 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig, Cli};
