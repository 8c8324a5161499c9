//! Settings Context - Identifier

use serde::Serialize;

/// 部署标识
///
/// 不变量: 只包含 ASCII 字母、数字和下划线，可以为空
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier(String);

impl Identifier {
    /// 去除所有非 `[A-Za-z0-9_]` 字符
    pub fn sanitize(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect(),
        )
    }

    /// 优先使用显式传入的标识，否则退回主机名
    pub fn from_raw_or_hostname(raw: Option<&str>, hostname: &str) -> Self {
        Self::sanitize(raw.unwrap_or(hostname))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
