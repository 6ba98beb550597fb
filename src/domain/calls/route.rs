//! Calls Context - 上游路由
//!
//! 每个入站操作对应一个上游调用，路径相对于 `<base>/apps/<appId>`:
//!
//! | 操作          | 方法 | 路径                          |
//! |---------------|------|-------------------------------|
//! | NewSession    | POST | sessions/new                  |
//! | NewTracks     | POST | sessions/{id}/tracks/new      |
//! | Renegotiate   | PUT  | sessions/{id}/renegotiate     |
//! | SessionState  | GET  | sessions/{id}                 |
//! | CloseTracks   | PUT  | sessions/{id}/tracks/close    |

use http::Method;

use super::SessionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayRoute {
    NewSession,
    NewTracks(SessionId),
    Renegotiate(SessionId),
    SessionState(SessionId),
    CloseTracks(SessionId),
}

impl RelayRoute {
    /// 上游 HTTP 方法
    pub fn method(&self) -> Method {
        match self {
            Self::NewSession | Self::NewTracks(_) => Method::POST,
            Self::Renegotiate(_) | Self::CloseTracks(_) => Method::PUT,
            Self::SessionState(_) => Method::GET,
        }
    }

    /// 相对于应用根路径的上游路径（不带前导斜杠）
    pub fn path(&self) -> String {
        match self {
            Self::NewSession => "sessions/new".to_string(),
            Self::NewTracks(id) => format!("sessions/{}/tracks/new", id),
            Self::Renegotiate(id) => format!("sessions/{}/renegotiate", id),
            Self::SessionState(id) => format!("sessions/{}", id),
            Self::CloseTracks(id) => format!("sessions/{}/tracks/close", id),
        }
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        match self {
            Self::NewSession => None,
            Self::NewTracks(id)
            | Self::Renegotiate(id)
            | Self::SessionState(id)
            | Self::CloseTracks(id) => Some(id),
        }
    }

    /// 日志用名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewSession => "new_session",
            Self::NewTracks(_) => "new_tracks",
            Self::Renegotiate(_) => "renegotiate",
            Self::SessionState(_) => "session_state",
            Self::CloseTracks(_) => "close_tracks",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid() -> SessionId {
        SessionId::new("sess-1").unwrap()
    }

    #[test]
    fn test_new_session() {
        let route = RelayRoute::NewSession;
        assert_eq!(route.method(), Method::POST);
        assert_eq!(route.path(), "sessions/new");
        assert!(route.session_id().is_none());
    }

    #[test]
    fn test_session_scoped_routes() {
        let cases = [
            (RelayRoute::NewTracks(sid()), Method::POST, "sessions/sess-1/tracks/new"),
            (RelayRoute::Renegotiate(sid()), Method::PUT, "sessions/sess-1/renegotiate"),
            (RelayRoute::SessionState(sid()), Method::GET, "sessions/sess-1"),
            (RelayRoute::CloseTracks(sid()), Method::PUT, "sessions/sess-1/tracks/close"),
        ];

        for (route, method, path) in cases {
            assert_eq!(route.method(), method, "{}", route.name());
            assert_eq!(route.path(), path, "{}", route.name());
            assert_eq!(route.session_id().map(SessionId::as_str), Some("sess-1"));
        }
    }
}
