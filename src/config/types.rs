//! Configuration Types
//!
//! 定义工具自身的运行配置（与部署配置 Settings 区分）

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 配置解析相关
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 配置解析配置
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// 提供部署标识的环境变量名
    #[serde(default = "default_id_env_var")]
    pub id_env_var: String,

    /// 找不到部署 overlay 时使用的 overlay
    #[serde(default = "default_fallback_conf")]
    pub fallback_conf: String,

    /// 额外 overlay 目录（`<name>.toml`），同名覆盖内置 overlay
    #[serde(default)]
    pub conf_dir: Option<PathBuf>,
}

fn default_id_env_var() -> String {
    "IDEASCUBE_ID".to_string()
}

fn default_fallback_conf() -> String {
    "dev".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            id_env_var: default_id_env_var(),
            fallback_conf: default_fallback_conf(),
            conf_dir: None,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LogConfig {
    /// 默认日志过滤规则
    pub fn filter(&self) -> String {
        format!("{},ideascube={}", self.level, self.level)
    }
}
