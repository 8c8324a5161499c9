//! Settings Context - Setting names

pub const STORAGE_ROOT: &str = "STORAGE_ROOT";
pub const BACKUPED_ROOT: &str = "BACKUPED_ROOT";
pub const MEDIA_ROOT: &str = "MEDIA_ROOT";
pub const STATIC_ROOT: &str = "STATIC_ROOT";
pub const DATABASES: &str = "DATABASES";
pub const USER_FORM_FIELDS: &str = "USER_FORM_FIELDS";
pub const USER_DATA_FIELDS: &str = "USER_DATA_FIELDS";
pub const AVAILABLE_LANGUAGES: &str = "AVAILABLE_LANGUAGES";
pub const LANGUAGES: &str = "LANGUAGES";
pub const EXTRA_LANG_INFO: &str = "EXTRA_LANG_INFO";
pub const HOME_CARDS: &str = "HOME_CARDS";
pub const STAFF_HOME_CARDS: &str = "STAFF_HOME_CARDS";
pub const SETTINGS_MODULE: &str = "SETTINGS_MODULE";
pub const IDEASCUBE_ID: &str = "IDEASCUBE_ID";
pub const IDEASCUBE_HOSTNAME: &str = "IDEASCUBE_HOSTNAME";

/// overlay 元数据: 父 overlay 名称
pub const EXTENDS_KEY: &str = "__extends__";
/// overlay 元数据: 部署说明
pub const DOC_KEY: &str = "__doc__";
/// overlay 元数据: 值为空（null）的配置项名称列表，TOML 无法直接表达 null
pub const NULL_KEY: &str = "__null__";

/// 判断键是否作为配置项传播
///
/// 规则: 全大写（至少一个有大小写的字符，且没有小写字符）并且不以 `__` 开头
pub fn is_setting_name(key: &str) -> bool {
    is_upper(key) && !key.starts_with("__")
}

fn is_upper(key: &str) -> bool {
    let mut cased = false;
    for ch in key.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}
