//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod calls_api;

pub use calls_api::{CallsApiPort, CallsError, UpstreamBody, UpstreamRequest, UpstreamResponse};
