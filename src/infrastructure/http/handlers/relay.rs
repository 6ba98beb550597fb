//! Relay Handlers
//!
//! 入站调用 → RelayHandler → 上游；上游的状态码、Content-Type、
//! 响应体原样流式返回。

use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Query, State},
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::{ApplicationError, RelayCommand, UpstreamResponse};
use crate::domain::calls::{RelayRoute, SessionId};
use crate::infrastructure::http::error::{message, ApiError};
use crate::infrastructure::http::state::AppState;

/// `?sessionId=` 查询参数
#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// 查询串解析失败（如重复的 sessionId）与 ID 非法同样返回 JSON 400
fn session_id_from(
    query: Result<Query<SessionQuery>, QueryRejection>,
) -> Result<SessionId, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest {
        error: message::INVALID_SESSION_ID,
        detail: rejection.body_text(),
    })?;

    SessionId::new(query.session_id.unwrap_or_default())
        .map_err(|e| ApiError::from(ApplicationError::from(e)))
}

pub async fn new_session(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    relay(&state, RelayRoute::NewSession, body).await
}

pub async fn new_track(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SessionQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let session_id = session_id_from(query)?;
    relay(&state, RelayRoute::NewTracks(session_id), body).await
}

pub async fn renegotiate(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SessionQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let session_id = session_id_from(query)?;
    relay(&state, RelayRoute::Renegotiate(session_id), body).await
}

pub async fn session_state(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SessionQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let session_id = session_id_from(query)?;
    relay(&state, RelayRoute::SessionState(session_id), Bytes::new()).await
}

pub async fn close_track(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SessionQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let session_id = session_id_from(query)?;
    relay(&state, RelayRoute::CloseTracks(session_id), body).await
}

async fn relay(state: &AppState, route: RelayRoute, body: Bytes) -> Result<Response, ApiError> {
    let upstream = state
        .relay_handler
        .handle(RelayCommand::new(route, body))
        .await?;

    Ok(mirror_response(upstream))
}

/// 把上游响应转换为入站响应（状态码、Content-Type、长度、流式响应体）
fn mirror_response(upstream: UpstreamResponse) -> Response {
    let mut builder = Response::builder().status(upstream.status);
    if let Some(content_type) = upstream.content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    if let Some(len) = upstream.content_length {
        builder = builder.header(CONTENT_LENGTH, len);
    }

    builder
        .body(Body::from_stream(upstream.body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
