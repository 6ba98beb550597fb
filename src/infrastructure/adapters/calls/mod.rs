//! Calls Adapter - Cloudflare Calls HTTP 客户端实现

mod http_calls_client;

pub use http_calls_client::*;
