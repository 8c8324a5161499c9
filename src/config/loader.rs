//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（ideascube.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::Identifier;

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
const CONFIG_FILE_NAMES: &[&str] = &["ideascube", "ideascube.local"];

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// 加载运行配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `IDEASCUBE_`，层级分隔符 `__`）
/// 2. 配置文件（ideascube.toml 或 ideascube.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `IDEASCUBE_LOG__LEVEL=debug`
/// - `IDEASCUBE_LOG__JSON=true`
/// - `IDEASCUBE_RESOLVER__CONF_DIR=/etc/ideascube/conf`
/// - `IDEASCUBE_RESOLVER__FALLBACK_CONF=idb`
///
/// 部署标识变量 `IDEASCUBE_ID` 不属于运行配置，反序列化时忽略。
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("resolver.id_env_var", "IDEASCUBE_ID")?
        .set_default("resolver.fallback_conf", "dev")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: IDEASCUBE_LOG__LEVEL=debug
    builder = builder.add_source(
        Environment::with_prefix("IDEASCUBE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.resolver.id_env_var.is_empty() {
        return Err(ConfigError::ValidationError(
            "Identifier environment variable name cannot be empty".to_string(),
        ));
    }

    let fallback = &config.resolver.fallback_conf;
    if fallback.is_empty() {
        return Err(ConfigError::ValidationError(
            "Fallback conf cannot be empty".to_string(),
        ));
    }
    if Identifier::sanitize(fallback).as_str() != fallback {
        return Err(ConfigError::ValidationError(format!(
            "Fallback conf '{}' is not a valid identifier",
            fallback
        )));
    }

    if !LOG_LEVELS.contains(&config.log.level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "Unknown log level '{}'",
            config.log.level
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Runtime Configuration ===");
    tracing::info!("Identifier Variable: {}", config.resolver.id_env_var);
    tracing::info!("Fallback Conf: {}", config.resolver.fallback_conf);
    match &config.resolver.conf_dir {
        Some(dir) => tracing::info!("Conf Directory: {:?}", dir),
        None => tracing::info!("Conf Directory: (builtin only)"),
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=============================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_env_var() {
        let mut config = AppConfig::default();
        config.resolver.id_env_var = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_bad_fallback() {
        let mut config = AppConfig::default();
        config.resolver.fallback_conf = String::new();
        assert!(validate_config(&config).is_err());

        config.resolver.fallback_conf = "../dev".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_unknown_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "loud".to_string();
        assert!(validate_config(&config).is_err());

        config.log.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ideascube.toml");
        fs::write(
            &path,
            "[resolver]\nfallback_conf = \"idb\"\nconf_dir = \"/etc/ideascube/conf\"\n\n[log]\njson = true\n",
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.resolver.fallback_conf, "idb");
        assert_eq!(
            config.resolver.conf_dir.as_deref(),
            Some(Path::new("/etc/ideascube/conf"))
        );
        assert!(config.log.json);
        assert_eq!(config.resolver.id_env_var, "IDEASCUBE_ID");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = load_config_from_path(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
