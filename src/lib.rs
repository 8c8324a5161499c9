//! Ideascube - 离线数字图书馆的部署配置
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Settings Context: 部署标识、overlay、最终配置
//!
//! 应用层 (application/):
//! - Ports: 端口定义（OverlaySource, LangInfo）
//! - Resolver: 启动时一次性解析配置
//! - Export: 导出文件命名
//!
//! 基础设施层 (infrastructure/):
//! - Conf: 内置 overlay、overlay 目录、注册表
//! - Memory: 语言元数据表
//! - Host: 主机名与环境变量

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use bootstrap::Bootstrap;
pub use config::{load_config, AppConfig};
pub use domain::{Settings, SettingsError};
