//! Commands - 命令及处理器

pub mod handlers;
mod relay_commands;

pub use relay_commands::RelayCommand;
