//! Settings Context - Overlay

use serde_json::Value;
use std::collections::BTreeMap;

use super::keys::{is_setting_name, DOC_KEY};

/// 某一类部署的配置覆盖集
///
/// `values` 保留原始键，包括元数据键和小写辅助键；
/// 只有 [`Overlay::settings`] 返回的键会进入最终配置。
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    name: String,
    values: BTreeMap<String, Value>,
}

impl Overlay {
    pub fn new(name: impl Into<String>, values: BTreeMap<String, Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 对应的模块名，记录为 `SETTINGS_MODULE`
    pub fn module_name(&self) -> String {
        format!("ideascube.conf.{}", self.name)
    }

    pub fn doc(&self) -> Option<&str> {
        self.values.get(DOC_KEY).and_then(Value::as_str)
    }

    pub fn raw(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// 可传播的配置项
    pub fn settings(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter().filter(|(k, _)| is_setting_name(k))
    }
}
