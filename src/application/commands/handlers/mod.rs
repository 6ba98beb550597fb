//! Command Handlers

mod relay_handlers;

pub use relay_handlers::RelayHandler;
