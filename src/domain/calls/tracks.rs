//! Calls Context - Track 请求体视图
//!
//! 只解析日志需要的字段，原始字节原样转发给上游。

use serde::Deserialize;

use super::CallsDomainError;

/// 单个 track 描述
///
/// 本地 track 带 `mid`，远端 track 带 `sessionId`，两者都有 `trackName`。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackObject {
    pub location: Option<String>,
    pub mid: Option<String>,
    pub session_id: Option<String>,
    pub track_name: Option<String>,
}

impl TrackObject {
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    pub fn mid(&self) -> &str {
        self.mid.as_deref().unwrap_or("")
    }

    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or("")
    }

    pub fn track_name(&self) -> &str {
        self.track_name.as_deref().unwrap_or("")
    }
}

/// `tracks/new` 请求体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTracksBody {
    #[serde(default)]
    pub tracks: Vec<TrackObject>,
}

impl NewTracksBody {
    pub fn parse(bytes: &[u8]) -> Result<Self, CallsDomainError> {
        serde_json::from_slice(bytes).map_err(|e| CallsDomainError::InvalidTracksBody(e.to_string()))
    }
}
