//! Relay Commands

use bytes::Bytes;

use crate::domain::calls::RelayRoute;

/// 转发命令
#[derive(Debug, Clone)]
pub struct RelayCommand {
    pub route: RelayRoute,
    pub body: Bytes,
}

impl RelayCommand {
    pub fn new(route: RelayRoute, body: impl Into<Bytes>) -> Self {
        Self {
            route,
            body: body.into(),
        }
    }
}
