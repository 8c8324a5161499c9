//! Settings Resolver - 配置解析
//!
//! 进程启动时执行一次：
//! 1. 清洗部署标识
//! 2. 按标识选择 overlay，失败时退回默认 overlay
//! 3. 合并基础配置与 overlay（整体覆盖，不做深合并）
//! 4. 计算派生值
//! 5. 生成不可变的 [`Settings`]

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{LangInfoPort, OverlayError, OverlaySourcePort};
use crate::domain::settings::{
    flatten_fields, keys, DatabaseEntry, Databases, Identifier, LangInfo, Language, Overlay,
    Settings, SettingsError, UserFieldGroup, DEFAULT_DATABASE_ALIAS, DEFAULT_DATABASE_FILE,
    SQLITE_ENGINE,
};

/// 找不到部署 overlay 时使用的 overlay
pub const DEFAULT_FALLBACK_CONF: &str = "dev";

type SettingsMap = BTreeMap<String, Value>;

/// 配置解析器
pub struct SettingsResolver {
    base: SettingsMap,
    overlays: Arc<dyn OverlaySourcePort>,
    lang_info: Arc<dyn LangInfoPort>,
    fallback: String,
}

impl SettingsResolver {
    pub fn new(
        base: SettingsMap,
        overlays: Arc<dyn OverlaySourcePort>,
        lang_info: Arc<dyn LangInfoPort>,
    ) -> Self {
        Self {
            base,
            overlays,
            lang_info,
            fallback: DEFAULT_FALLBACK_CONF.to_string(),
        }
    }

    pub fn with_fallback(mut self, name: impl Into<String>) -> Self {
        self.fallback = name.into();
        self
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// 解析配置
    ///
    /// `raw_id` 为环境提供的原始标识，缺省时使用 `hostname`。
    /// 启动诊断（标识和实际使用的 overlay）写入 `out`。
    pub fn resolve(
        &self,
        raw_id: Option<&str>,
        hostname: &str,
        out: &mut dyn Write,
    ) -> Result<Settings, SettingsError> {
        let id = Identifier::from_raw_or_hostname(raw_id, hostname);
        writeln!(out, "IDEASCUBE_ID={}", id)?;

        let overlay = self.select_overlay(&id)?;
        writeln!(out, "Importing settings from {}", overlay.module_name())?;

        let values = self.merge(&overlay);
        let settings = self.derive(values, id, hostname, &overlay)?;

        tracing::info!(
            id = %settings.ideascube_id(),
            module = %settings.settings_module(),
            keys = settings.as_map().len(),
            "Settings resolved"
        );
        Ok(settings)
    }

    /// 选择 overlay
    ///
    /// 未注册时静默退回；构造失败时先记录再退回。默认 overlay 本身不可用是致命错误。
    fn select_overlay(&self, id: &Identifier) -> Result<Overlay, SettingsError> {
        match self.overlays.load(id.as_str()) {
            Ok(overlay) => return Ok(overlay),
            Err(err) if err.is_not_registered() => {
                tracing::debug!(id = %id, fallback = %self.fallback, "No settings overlay for identifier");
            }
            Err(err) => {
                tracing::warn!(id = %id, fallback = %self.fallback, error = %err, "Settings overlay failed to load");
            }
        }

        self.overlays
            .load(&self.fallback)
            .map_err(|err| SettingsError::FallbackUnavailable {
                name: self.fallback.clone(),
                reason: match err {
                    OverlayError::NotRegistered(_) => "not registered".to_string(),
                    OverlayError::Construct { reason, .. } => reason,
                },
            })
    }

    /// 基础配置 + overlay 可传播键
    fn merge(&self, overlay: &Overlay) -> SettingsMap {
        let mut values: SettingsMap = self
            .base
            .iter()
            .filter(|(k, _)| keys::is_setting_name(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        for (key, value) in overlay.settings() {
            values.insert(key.clone(), value.clone());
        }
        values
    }

    /// 计算派生值，顺序固定：后面的步骤可以依赖前面的结果
    fn derive(
        &self,
        mut values: SettingsMap,
        id: Identifier,
        hostname: &str,
        overlay: &Overlay,
    ) -> Result<Settings, SettingsError> {
        let user_form_fields: Vec<UserFieldGroup> = required(&values, keys::USER_FORM_FIELDS)?;
        let user_data_fields = flatten_fields(&user_form_fields);
        values.insert(
            keys::USER_DATA_FIELDS.to_string(),
            Value::from(user_data_fields.clone()),
        );

        let backuped_root = derive_root(&mut values, keys::BACKUPED_ROOT, |v| {
            Ok(storage_root(v)?.join("main"))
        })?;
        let media_root =
            derive_root(&mut values, keys::MEDIA_ROOT, |_| Ok(backuped_root.join("media")))?;
        let static_root = derive_root(&mut values, keys::STATIC_ROOT, |v| {
            Ok(storage_root(v)?.join("static"))
        })?;

        let provided = values.get(keys::DATABASES).filter(|v| is_truthy(v)).cloned();
        let databases = match provided {
            Some(value) => parse::<Databases>(keys::DATABASES, &value)?,
            None => {
                let databases = default_databases(&backuped_root);
                let value = serde_json::to_value(&databases)
                    .map_err(|e| SettingsError::invalid(keys::DATABASES, e))?;
                values.insert(keys::DATABASES.to_string(), value);
                databases
            }
        };

        let languages: Vec<Language> = required(&values, keys::AVAILABLE_LANGUAGES)?;
        if languages.is_empty() {
            return Err(SettingsError::EmptySetting(
                keys::AVAILABLE_LANGUAGES.to_string(),
            ));
        }
        values.insert(
            keys::LANGUAGES.to_string(),
            Value::Array(
                languages
                    .iter()
                    .map(|l| Value::from(vec![l.code.clone(), l.label.clone()]))
                    .collect(),
            ),
        );

        if let Some(value) = values.get(keys::EXTRA_LANG_INFO).filter(|v| !v.is_null()) {
            let extra: BTreeMap<String, LangInfo> = parse(keys::EXTRA_LANG_INFO, value)?;
            let added = self.lang_info.extend(extra);
            tracing::debug!(added, "Extra language info merged");
        }

        let settings_module = overlay.module_name();
        values.insert(keys::IDEASCUBE_ID.to_string(), Value::from(id.as_str()));
        values.insert(keys::IDEASCUBE_HOSTNAME.to_string(), Value::from(hostname));
        values.insert(
            keys::SETTINGS_MODULE.to_string(),
            Value::from(settings_module.as_str()),
        );

        Ok(Settings {
            values,
            ideascube_id: id,
            settings_module,
            user_form_fields,
            user_data_fields,
            backuped_root,
            media_root,
            static_root,
            databases,
            languages,
        })
    }
}

fn parse<T: DeserializeOwned>(key: &str, value: &Value) -> Result<T, SettingsError> {
    serde_json::from_value(value.clone()).map_err(|e| SettingsError::invalid(key, e))
}

fn required<T: DeserializeOwned>(values: &SettingsMap, key: &str) -> Result<T, SettingsError> {
    match values.get(key) {
        None | Some(Value::Null) => Err(SettingsError::MissingSetting(key.to_string())),
        Some(value) => parse(key, value),
    }
}

/// 非空字符串视为已提供；空值、空串视为未提供
fn path_setting(values: &SettingsMap, key: &str) -> Result<Option<PathBuf>, SettingsError> {
    match values.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(PathBuf::from(s))),
        Some(_) => Err(SettingsError::invalid(key, "expected a path string")),
    }
}

fn storage_root(values: &SettingsMap) -> Result<PathBuf, SettingsError> {
    path_setting(values, keys::STORAGE_ROOT)?
        .ok_or_else(|| SettingsError::MissingSetting(keys::STORAGE_ROOT.to_string()))
}

/// 已提供则保留原值，否则按 `default` 计算并写回
fn derive_root<F>(values: &mut SettingsMap, key: &str, default: F) -> Result<PathBuf, SettingsError>
where
    F: FnOnce(&SettingsMap) -> Result<PathBuf, SettingsError>,
{
    if let Some(path) = path_setting(values, key)? {
        return Ok(path);
    }
    let path = default(values)?;
    values.insert(
        key.to_string(),
        Value::String(path.to_string_lossy().into_owned()),
    );
    Ok(path)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}

fn default_databases(backuped_root: &Path) -> Databases {
    let mut databases = Databases::new();
    databases.insert(
        DEFAULT_DATABASE_ALIAS.to_string(),
        DatabaseEntry {
            engine: SQLITE_ENGINE.to_string(),
            name: backuped_root
                .join(DEFAULT_DATABASE_FILE)
                .to_string_lossy()
                .into_owned(),
            options: BTreeMap::new(),
        },
    );
    databases
}
