//! Relay Command Handler
//!
//! 转发一次入站调用到上游。`tracks/new` 会先解析请求体用于日志，
//! 解析失败直接拒绝，不会发出上游请求。

use std::sync::Arc;

use crate::application::commands::RelayCommand;
use crate::application::error::ApplicationError;
use crate::application::ports::{CallsApiPort, UpstreamRequest, UpstreamResponse};
use crate::domain::calls::{NewTracksBody, RelayRoute, SessionId};

/// Relay Handler
pub struct RelayHandler {
    calls_api: Arc<dyn CallsApiPort>,
}

impl RelayHandler {
    pub fn new(calls_api: Arc<dyn CallsApiPort>) -> Self {
        Self { calls_api }
    }

    pub async fn handle(&self, command: RelayCommand) -> Result<UpstreamResponse, ApplicationError> {
        if let RelayRoute::NewTracks(session_id) = &command.route {
            log_new_tracks(session_id, &command.body)?;
        }

        let route_name = command.route.name();
        let session_id = command.route.session_id().cloned();

        let response = self
            .calls_api
            .forward(UpstreamRequest {
                route: command.route,
                body: command.body,
            })
            .await?;

        tracing::debug!(
            route = route_name,
            session_id = ?session_id.as_ref().map(SessionId::as_str),
            status = response.status.as_u16(),
            "Upstream responded"
        );

        Ok(response)
    }
}

fn log_new_tracks(session_id: &SessionId, body: &[u8]) -> Result<(), ApplicationError> {
    let parsed = NewTracksBody::parse(body)?;

    tracing::info!(
        session_id = %session_id,
        count = parsed.tracks.len(),
        "Session received new track(s)"
    );
    for track in &parsed.tracks {
        tracing::info!(
            location = track.location(),
            track_name = track.track_name(),
            mid = track.mid(),
            track_session_id = track.session_id(),
            "New track"
        );
    }

    Ok(())
}
