//! Settings Context - Errors

use thiserror::Error;

/// 配置解析的致命错误，出现时进程不应启动
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Missing required setting: {0}")]
    MissingSetting(String),

    #[error("Setting {0} must not be empty")]
    EmptySetting(String),

    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Invalid base settings: {0}")]
    InvalidBase(String),

    #[error("Fallback settings overlay '{name}' is unavailable: {reason}")]
    FallbackUnavailable { name: String, reason: String },

    #[error("Settings have already been published")]
    AlreadyPublished,

    #[error("Failed to write startup diagnostics: {0}")]
    Diagnostics(#[from] std::io::Error),
}

impl SettingsError {
    pub fn invalid(key: &str, reason: impl std::fmt::Display) -> Self {
        SettingsError::InvalidSetting {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
