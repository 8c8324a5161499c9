//! Configuration Module
//!
//! 工具自身的运行配置，支持多层级配置来源：
//! - 环境变量（最高优先级）
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）
//!
//! 部署配置（Settings）由 `application::resolver` 负责，不在此模块

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, LogConfig, ResolverConfig};
