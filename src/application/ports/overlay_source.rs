//! Overlay Source Port - 部署 overlay 查找
//!
//! 定义 overlay 注册表的抽象接口，具体实现在 infrastructure/conf 层

use thiserror::Error;

use crate::domain::Overlay;

/// Overlay 查找错误
///
/// 只有 `NotRegistered` 会被静默处理；`Construct` 需要先记录再退回默认 overlay
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Settings overlay not registered: {0}")]
    NotRegistered(String),

    #[error("Failed to construct settings overlay '{name}': {reason}")]
    Construct { name: String, reason: String },
}

impl OverlayError {
    pub fn construct(name: &str, reason: impl std::fmt::Display) -> Self {
        OverlayError::Construct {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_registered(&self) -> bool {
        matches!(self, OverlayError::NotRegistered(_))
    }
}

/// Overlay Source Port
///
/// 按清洗后的标识查找 overlay；注册表是开放的，新增 overlay 不需要改动解析器
pub trait OverlaySourcePort: Send + Sync {
    /// 构造指定名称的 overlay（已展开继承链）
    fn load(&self, name: &str) -> Result<Overlay, OverlayError>;

    /// 已注册的 overlay 名称（有序）
    fn names(&self) -> Vec<String>;
}
