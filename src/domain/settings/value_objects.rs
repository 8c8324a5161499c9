//! Settings Context - Value Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// 用户表单字段分组: (分组标题, 有序字段列表)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<String>)", into = "(String, Vec<String>)")]
pub struct UserFieldGroup {
    pub label: String,
    pub fields: Vec<String>,
}

impl From<(String, Vec<String>)> for UserFieldGroup {
    fn from((label, fields): (String, Vec<String>)) -> Self {
        Self { label, fields }
    }
}

impl From<UserFieldGroup> for (String, Vec<String>) {
    fn from(group: UserFieldGroup) -> Self {
        (group.label, group.fields)
    }
}

/// 按分组顺序、组内顺序展平所有字段名
pub fn flatten_fields(groups: &[UserFieldGroup]) -> Vec<String> {
    groups
        .iter()
        .flat_map(|g| g.fields.iter().cloned())
        .collect()
}

/// 界面语言: (代码, 显示名称)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Language {
    pub code: String,
    pub label: String,
}

impl From<(String, String)> for Language {
    fn from((code, label): (String, String)) -> Self {
        Self { code, label }
    }
}

impl From<Language> for (String, String) {
    fn from(lang: Language) -> Self {
        (lang.code, lang.label)
    }
}

/// 语言元数据（补充本地化表中缺失的语言）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangInfo {
    #[serde(default)]
    pub bidi: bool,
    pub code: String,
    pub name: String,
    pub name_local: String,
}

impl LangInfo {
    pub fn new(code: &str, name: &str, name_local: &str, bidi: bool) -> Self {
        Self {
            bidi,
            code: code.to_string(),
            name: name.to_string(),
            name_local: name_local.to_string(),
        }
    }
}

/// 单个数据库连接
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseEntry {
    #[serde(rename = "ENGINE")]
    pub engine: String,

    #[serde(rename = "NAME")]
    pub name: String,

    /// 其他后端专用参数原样保留
    #[serde(flatten)]
    pub options: BTreeMap<String, Value>,
}

/// 数据库别名 -> 连接配置
pub type Databases = BTreeMap<String, DatabaseEntry>;

pub const SQLITE_ENGINE: &str = "django.db.backends.sqlite3";
pub const DEFAULT_DATABASE_ALIAS: &str = "default";
pub const DEFAULT_DATABASE_FILE: &str = "default.sqlite";

/// 首页卡片
///
/// 管理卡片使用 `url`，内容卡片使用 `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 图标名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fa: Option<String>,

    #[serde(default)]
    pub is_staff: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<(String, String)>,
}

impl HomeCard {
    /// 卡片的唯一键
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().or(self.url.as_deref())
    }
}
