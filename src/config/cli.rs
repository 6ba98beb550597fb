//! Command-line flags
//!
//! 命令行参数优先级最高，覆盖配置文件和环境变量

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "calls-relay", version, about = "Cloudflare Calls signaling relay")]
pub struct Cli {
    /// Path to the configuration file (default: config.toml / config.local.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cloudflare Calls App ID
    #[arg(long = "app-id", alias = "appId")]
    pub app_id: Option<String>,

    /// Cloudflare Calls App Secret
    #[arg(long = "app-secret", alias = "appSecret")]
    pub app_secret: Option<String>,

    /// Listen host (overrides config file setting)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides config file setting)
    #[arg(short, long)]
    pub port: Option<u16>,
}
