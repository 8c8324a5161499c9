//! Conf - 部署配置来源
//!
//! - builtin: 编译期嵌入的基础配置与内置 overlay
//! - registry: 开放的 overlay 注册表
//! - parse: TOML 解析

mod builtin;
mod parse;
mod registry;

pub use builtin::{base_settings, BUILTIN_CONFS};
pub use parse::parse_toml;
pub use registry::{ConfOrigin, ConfRegistry, OverlayFactory};
