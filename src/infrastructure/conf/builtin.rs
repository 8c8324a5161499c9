//! 内置配置 - 编译期嵌入
//!
//! 基础配置和各部署 overlay 以 TOML 形式放在仓库根目录的 `conf/` 下

use serde_json::Value;
use std::collections::BTreeMap;

use super::parse::parse_toml;
use crate::domain::SettingsError;

const DEFAULTS: &str = include_str!("../../../conf/defaults.toml");

/// 内置 overlay: (名称, TOML 源文本)
pub const BUILTIN_CONFS: &[(&str, &str)] = &[
    ("base", DEFAULTS),
    ("dev", include_str!("../../../conf/dev.toml")),
    ("idb", include_str!("../../../conf/idb.toml")),
    (
        "idb_fra_jeancarre",
        include_str!("../../../conf/idb_fra_jeancarre.toml"),
    ),
    ("kb", include_str!("../../../conf/kb.toml")),
];

/// 基础配置
pub fn base_settings() -> Result<BTreeMap<String, Value>, SettingsError> {
    parse_toml(DEFAULTS).map_err(SettingsError::InvalidBase)
}
