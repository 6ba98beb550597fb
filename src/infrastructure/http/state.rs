//! Application State
//!
//! 无可变状态，只持有转发处理器

use std::sync::Arc;

use crate::application::{CallsApiPort, RelayHandler};

/// 应用状态
pub struct AppState {
    pub relay_handler: RelayHandler,
}

impl AppState {
    pub fn new(calls_api: Arc<dyn CallsApiPort>) -> Self {
        Self {
            relay_handler: RelayHandler::new(calls_api),
        }
    }
}
