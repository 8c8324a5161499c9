//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（OverlaySource、LangInfo）
//! - resolver: 启动时的一次性配置解析
//! - export: 依赖配置的导出文件命名

pub mod export;
pub mod ports;
pub mod resolver;

pub use export::{export_filename, export_filename_now, DEFAULT_EXPORT_PREFIX};
pub use ports::{LangInfoPort, OverlayError, OverlaySourcePort};
pub use resolver::{SettingsResolver, DEFAULT_FALLBACK_CONF};
