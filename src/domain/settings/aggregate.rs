//! Settings Context - 最终配置

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use super::keys;
use super::{Databases, HomeCard, Identifier, Language, SettingsError, UserFieldGroup};

/// 解析完成后的配置
///
/// 不变量:
/// - 构造后不可变，只暴露只读访问
/// - `values` 中包含基础配置、overlay 覆盖项以及全部派生值
/// - 类型化字段与 `values` 中的同名项一致
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub(crate) values: BTreeMap<String, Value>,
    pub(crate) ideascube_id: Identifier,
    pub(crate) settings_module: String,
    pub(crate) user_form_fields: Vec<UserFieldGroup>,
    pub(crate) user_data_fields: Vec<String>,
    pub(crate) backuped_root: PathBuf,
    pub(crate) media_root: PathBuf,
    pub(crate) static_root: PathBuf,
    pub(crate) databases: Databases,
    pub(crate) languages: Vec<Language>,
}

impl Settings {
    /// 按名称查找
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// 按名称查找并反序列化为指定类型
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T, SettingsError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| SettingsError::MissingSetting(key.to_string()))?;
        serde_json::from_value(value.clone()).map_err(|e| SettingsError::invalid(key, e))
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// 导出为 JSON 对象（键有序）
    pub fn to_json(&self) -> Value {
        Value::Object(self.values.clone().into_iter().collect())
    }

    pub fn ideascube_id(&self) -> &Identifier {
        &self.ideascube_id
    }

    pub fn settings_module(&self) -> &str {
        &self.settings_module
    }

    pub fn user_form_fields(&self) -> &[UserFieldGroup] {
        &self.user_form_fields
    }

    pub fn user_data_fields(&self) -> &[String] {
        &self.user_data_fields
    }

    pub fn storage_root(&self) -> Option<&Path> {
        self.get_str(keys::STORAGE_ROOT).map(Path::new)
    }

    pub fn backuped_root(&self) -> &Path {
        &self.backuped_root
    }

    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    pub fn static_root(&self) -> &Path {
        &self.static_root
    }

    pub fn databases(&self) -> &Databases {
        &self.databases
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn home_cards(&self) -> Result<Vec<HomeCard>, SettingsError> {
        self.cards(keys::HOME_CARDS)
    }

    pub fn staff_home_cards(&self) -> Result<Vec<HomeCard>, SettingsError> {
        self.cards(keys::STAFF_HOME_CARDS)
    }

    fn cards(&self, key: &str) -> Result<Vec<HomeCard>, SettingsError> {
        if !self.contains(key) {
            return Ok(Vec::new());
        }
        self.get_as(key)
    }
}

static PUBLISHED: OnceLock<Arc<Settings>> = OnceLock::new();

/// 发布为进程级只读配置，只能成功一次
pub fn publish(settings: Arc<Settings>) -> Result<Arc<Settings>, SettingsError> {
    PUBLISHED
        .set(settings.clone())
        .map_err(|_| SettingsError::AlreadyPublished)?;
    Ok(settings)
}

/// 已发布的配置；启动完成前为 `None`
pub fn published() -> Option<Arc<Settings>> {
    PUBLISHED.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Settings {
        let mut values = BTreeMap::new();
        values.insert("DOMAIN".to_string(), json!("koombook.lan"));
        values.insert("LOAN_DURATION".to_string(), json!(14));
        values.insert(
            "HOME_CARDS".to_string(),
            json!([{"url": "user_list", "is_staff": true}, {"id": "blog"}]),
        );
        Settings {
            values,
            ideascube_id: Identifier::sanitize("kb"),
            settings_module: "ideascube.conf.kb".to_string(),
            user_form_fields: Vec::new(),
            user_data_fields: Vec::new(),
            backuped_root: PathBuf::from("/data/main"),
            media_root: PathBuf::from("/data/main/media"),
            static_root: PathBuf::from("/data/static"),
            databases: Databases::new(),
            languages: Vec::new(),
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let settings = sample();
        assert_eq!(settings.get_str("DOMAIN"), Some("koombook.lan"));
        assert_eq!(settings.get_as::<u32>("LOAN_DURATION").unwrap(), 14);
        assert!(settings.get("NOPE").is_none());
        assert!(matches!(
            settings.get_as::<u32>("NOPE"),
            Err(SettingsError::MissingSetting(_))
        ));
        assert!(matches!(
            settings.get_as::<u32>("DOMAIN"),
            Err(SettingsError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_home_cards() {
        let settings = sample();
        let cards = settings.home_cards().unwrap();
        assert_eq!(cards.len(), 2);
        assert!(cards[0].is_staff);
        assert_eq!(cards[1].key(), Some("blog"));
        assert!(settings.staff_home_cards().unwrap().is_empty());
    }

    #[test]
    fn test_publish_once() {
        let settings = Arc::new(sample());
        let first = publish(settings.clone());
        // 同一进程内其他测试不会发布，所以第一次必然成功
        assert!(first.is_ok());
        assert!(matches!(
            publish(settings),
            Err(SettingsError::AlreadyPublished)
        ));
        assert_eq!(published().unwrap().settings_module(), "ideascube.conf.kb");
    }
}
