//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Calls Context: Cloudflare Calls 信令转发（会话 / track）

pub mod calls;
