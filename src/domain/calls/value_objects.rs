//! Calls Context - Value Objects

use super::CallsDomainError;

/// 上游会话 ID 最大长度
const MAX_SESSION_ID_LEN: usize = 256;

/// 上游 WebRTC 会话标识
///
/// 会被拼接进上游 URL 路径，只允许 `[A-Za-z0-9_-]`，
/// 这样 `/`、`?`、`#` 以及 `.`/`..` 路径段都无法改写上游路径。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Result<Self, CallsDomainError> {
        let id = id.into();
        if id.is_empty() || id.len() > MAX_SESSION_ID_LEN {
            return Err(CallsDomainError::InvalidSessionId(id));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        {
            return Err(CallsDomainError::InvalidSessionId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
