//! Calls Context - Cloudflare Calls 信令限界上下文
//!
//! 职责:
//! - 上游 API 路由映射（方法 + 路径）
//! - 会话 ID 校验
//! - 新建 track 请求体的只读视图（仅用于日志）
//!
//! 本服务不保存任何会话状态，所有不变量由上游维护。

mod errors;
mod route;
mod tracks;
mod value_objects;

pub use errors::CallsDomainError;
pub use route::RelayRoute;
pub use tracks::{NewTracksBody, TrackObject};
pub use value_objects::SessionId;
