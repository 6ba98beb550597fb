//! HTTP Routes
//!
//! API Endpoints:
//! - /newSession                    POST  新建会话        → POST sessions/new
//! - /newTrack?sessionId=           POST  新增 track      → POST sessions/{id}/tracks/new
//! - /renegotiate?sessionId=        POST  重新协商        → PUT  sessions/{id}/renegotiate
//! - /sessionState?sessionId=       GET   会话状态        → GET  sessions/{id}
//! - /events?sessionId=             GET   同上（浏览器客户端使用的路径）
//! - /closeTrack?sessionId=         PUT   关闭 track      → PUT  sessions/{id}/tracks/close
//! - /close?sessionId=              POST  同上（浏览器客户端使用的路径）
//! - /api/ping                      GET   健康检查

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ping", get(handlers::ping))
        .merge(relay_routes())
}

/// 信令转发路由
fn relay_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/newSession", post(handlers::new_session))
        .route("/newTrack", post(handlers::new_track))
        .route("/renegotiate", post(handlers::renegotiate))
        .route("/sessionState", get(handlers::session_state))
        .route("/events", get(handlers::session_state))
        .route("/closeTrack", put(handlers::close_track))
        .route("/close", post(handlers::close_track))
}
