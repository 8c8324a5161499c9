//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Settings Context: 部署配置

pub mod settings;

pub use settings::{Identifier, Overlay, Settings, SettingsError};
