//! calls-relay - Cloudflare Calls 信令中转服务

use std::sync::Arc;

use calls_relay::config::{load_config, print_config, Cli, LogConfig};
use calls_relay::infrastructure::adapters::HttpCallsClient;
use calls_relay::infrastructure::http::{AppState, HttpServer, ServerConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    // 缺少 App ID / App Secret 时直接退出
    let config = load_config(&cli).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("calls-relay v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let calls_client = HttpCallsClient::new(config.calls.client_config())
        .map_err(|e| anyhow::anyhow!("Failed to create Calls client: {}", e))?;

    let state = AppState::new(Arc::new(calls_client));
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},calls_relay={},tower_http=debug",
        log.level, log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
