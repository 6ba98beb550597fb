//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 命令行参数
//! 2. 环境变量
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::cli::Cli;
use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `CALLS_RELAY_SERVER__PORT=8088`
/// - `CALLS_RELAY_CALLS__APP_ID=...`
/// - `CALLS_RELAY_CALLS__APP_SECRET=...`
///
/// App ID 或 App Secret 缺失时返回 `ValidationError`，进程不应启动。
pub fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    load_config_from_path(cli.config.as_deref(), cli)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时搜索默认文件名（可选），否则该文件必须存在
pub fn load_config_from_path(
    config_path: Option<&Path>,
    cli: &Cli,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8088)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("calls.app_id", "")?
        .set_default("calls.app_secret", "")?
        .set_default("calls.base_url", "https://rtc.live.cloudflare.com/v1")?
        .set_default("calls.timeout_secs", 30)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 前缀: CALLS_RELAY_，层级分隔符: __
    builder = builder.add_source(
        Environment::with_prefix("CALLS_RELAY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    builder = builder
        .set_override_option("calls.app_id", cli.app_id.clone())?
        .set_override_option("calls.app_secret", cli.app_secret.clone())?
        .set_override_option("server.host", cli.host.clone())?
        .set_override_option("server.port", cli.port.map(i64::from))?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.calls.app_id.trim().is_empty() || config.calls.app_secret.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Please provide both the Cloudflare Calls App ID and App Secret (--app-id, --app-secret)"
                .to_string(),
        ));
    }

    let base_url = config.calls.base_url.as_str();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "Calls base URL must be http(s): {:?}",
            base_url
        )));
    }

    if config.calls.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Calls timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，App Secret 不输出）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body: {} bytes", config.server.max_body_bytes);
    tracing::info!("Calls Base URL: {}", config.calls.base_url);
    tracing::info!("Calls App ID: {}", config.calls.app_id);
    tracing::info!("Calls Timeout: {}s", config.calls.timeout_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    /// 读取/修改 CALLS_RELAY_* 环境变量的测试必须串行
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 设置环境变量，drop 时恢复原值
    struct EnvVarGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let previous = env::var(key).ok();
            env::set_var(key, value);
            Self { key, previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            match &self.previous {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.calls.app_id = "app".to_string();
        config.calls.app_secret = "secret".to_string();
        config
    }

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_app_id() {
        let mut config = valid_config();
        config.calls.app_id = String::new();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_missing_app_secret() {
        let mut config = valid_config();
        config.calls.app_secret = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_non_http_base_url() {
        let mut config = valid_config();
        config.calls.base_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let _lock = env_lock();
        let file = write_toml(
            r#"
            [server]
            port = 9100

            [calls]
            app_id = "file-app"
            app_secret = "file-secret"
            "#,
        );

        let config = load_config_from_path(Some(file.path()), &Cli::default()).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.calls.app_id, "file-app");
        assert_eq!(config.calls.app_secret, "file-secret");
        assert_eq!(config.calls.base_url, "https://rtc.live.cloudflare.com/v1");
    }

    #[test]
    fn test_cli_overrides_file() {
        let _lock = env_lock();
        let file = write_toml(
            r#"
            [calls]
            app_id = "file-app"
            app_secret = "file-secret"
            "#,
        );
        let cli = Cli {
            app_id: Some("cli-app".to_string()),
            port: Some(9200),
            ..Default::default()
        };

        let config = load_config_from_path(Some(file.path()), &cli).unwrap();
        assert_eq!(config.calls.app_id, "cli-app");
        assert_eq!(config.calls.app_secret, "file-secret");
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn test_missing_credentials_refuse_to_load() {
        let _lock = env_lock();
        let file = write_toml("[server]\nport = 9300\n");

        let result = load_config_from_path(Some(file.path()), &Cli::default());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let _lock = env_lock();
        let cli = Cli {
            app_id: Some("a".to_string()),
            app_secret: Some("b".to_string()),
            ..Default::default()
        };
        let result = load_config_from_path(Some(Path::new("/nonexistent/relay.toml")), &cli);
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_env_overrides_file_and_cli_overrides_env() {
        let _lock = env_lock();
        let _app_id = EnvVarGuard::set("CALLS_RELAY_CALLS__APP_ID", "env-app");
        let _port = EnvVarGuard::set("CALLS_RELAY_SERVER__PORT", "9400");

        let file = write_toml(
            r#"
            [server]
            port = 9100

            [calls]
            app_id = "file-app"
            app_secret = "file-secret"
            "#,
        );

        let config = load_config_from_path(Some(file.path()), &Cli::default()).unwrap();
        assert_eq!(config.calls.app_id, "env-app");
        assert_eq!(config.calls.app_secret, "file-secret");
        assert_eq!(config.server.port, 9400);

        let cli = Cli {
            app_id: Some("cli-app".to_string()),
            ..Default::default()
        };
        let config = load_config_from_path(Some(file.path()), &cli).unwrap();
        assert_eq!(config.calls.app_id, "cli-app");
        assert_eq!(config.server.port, 9400);
    }
}
