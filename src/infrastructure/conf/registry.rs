//! Conf Registry - OverlaySourcePort 实现
//!
//! overlay 来源：
//! - 内置 overlay（编译期嵌入）
//! - 运行时注册的构造函数
//! - 目录中的 `<name>.toml` 文件（同名时覆盖内置）
//!
//! overlay 通过 `__extends__` 继承另一个 overlay，父级的键先应用，子级整体覆盖

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::builtin::BUILTIN_CONFS;
use super::parse::parse_toml;
use crate::application::ports::{OverlayError, OverlaySourcePort};
use crate::domain::settings::keys::EXTENDS_KEY;
use crate::domain::{Identifier, Overlay};

/// overlay 构造函数，失败时返回原因
pub type OverlayFactory =
    Arc<dyn Fn() -> Result<BTreeMap<String, Value>, String> + Send + Sync>;

/// overlay 来源说明
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfOrigin {
    Builtin,
    File(PathBuf),
    Registered,
}

impl std::fmt::Display for ConfOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfOrigin::Builtin => write!(f, "builtin"),
            ConfOrigin::File(path) => write!(f, "{}", path.display()),
            ConfOrigin::Registered => write!(f, "registered"),
        }
    }
}

struct Entry {
    origin: ConfOrigin,
    factory: OverlayFactory,
}

/// overlay 注册表
#[derive(Default)]
pub struct ConfRegistry {
    entries: BTreeMap<String, Entry>,
}

impl ConfRegistry {
    /// 空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 包含全部内置 overlay 的注册表
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for &(name, source) in BUILTIN_CONFS {
            registry.insert(name, ConfOrigin::Builtin, Arc::new(move || parse_toml(source)));
        }
        registry
    }

    /// 注册构造函数，同名覆盖
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Result<BTreeMap<String, Value>, String> + Send + Sync + 'static,
    {
        self.insert(name, ConfOrigin::Registered, Arc::new(factory));
    }

    /// 注册 TOML 文本，解析推迟到加载时
    pub fn register_toml(&mut self, name: &str, source: impl Into<String>) {
        let source = source.into();
        self.insert(
            name,
            ConfOrigin::Registered,
            Arc::new(move || parse_toml(&source)),
        );
    }

    /// 注册目录中所有 `*.toml` 文件，返回注册数量
    ///
    /// 文件名（去掉扩展名）即 overlay 名称；清洗后会变化的文件名无法被查找到，直接跳过。
    /// 文件内容在加载时才读取和解析。
    pub fn load_dir(&mut self, dir: &Path) -> std::io::Result<usize> {
        let mut count = 0;
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_owned) else {
                continue;
            };
            if Identifier::sanitize(&name).as_str() != name {
                tracing::debug!(file = %path.display(), "Skipping conf file with invalid name");
                continue;
            }

            if self.entries.contains_key(&name) {
                tracing::info!(conf = %name, file = %path.display(), "Conf file shadows existing overlay");
            }
            let file = path.clone();
            self.insert(
                &name,
                ConfOrigin::File(path),
                Arc::new(move || {
                    let source = std::fs::read_to_string(&file)
                        .map_err(|e| format!("{}: {}", file.display(), e))?;
                    parse_toml(&source)
                }),
            );
            count += 1;
        }
        Ok(count)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn origin(&self, name: &str) -> Option<&ConfOrigin> {
        self.entries.get(name).map(|e| &e.origin)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: &str, origin: ConfOrigin, factory: OverlayFactory) {
        self.entries
            .insert(name.to_string(), Entry { origin, factory });
    }

    /// 构造单个 overlay（不展开继承）
    fn construct(&self, requested: &str, name: &str) -> Result<BTreeMap<String, Value>, OverlayError> {
        let entry = self.entries.get(name).ok_or_else(|| {
            OverlayError::construct(requested, format!("parent overlay '{}' is not registered", name))
        })?;
        (entry.factory)().map_err(|reason| {
            if requested == name {
                OverlayError::construct(requested, reason)
            } else {
                OverlayError::construct(requested, format!("parent '{}': {}", name, reason))
            }
        })
    }
}

impl OverlaySourcePort for ConfRegistry {
    fn load(&self, name: &str) -> Result<Overlay, OverlayError> {
        if !self.entries.contains_key(name) {
            return Err(OverlayError::NotRegistered(name.to_string()));
        }

        // 子级在前，祖先在后
        let mut chain: Vec<(String, BTreeMap<String, Value>)> = Vec::new();
        let mut current = name.to_string();
        loop {
            if chain.iter().any(|(n, _)| *n == current) {
                return Err(OverlayError::construct(
                    name,
                    format!("inheritance cycle through '{}'", current),
                ));
            }
            let values = self.construct(name, &current)?;
            let parent = match values.get(EXTENDS_KEY) {
                None => None,
                Some(Value::String(parent)) => Some(parent.clone()),
                Some(other) => {
                    return Err(OverlayError::construct(
                        name,
                        format!("{} must be a string, got {}", EXTENDS_KEY, other),
                    ))
                }
            };
            chain.push((current, values));
            match parent {
                Some(parent) => current = parent,
                None => break,
            }
        }

        let mut merged = BTreeMap::new();
        for (_, values) in chain.into_iter().rev() {
            merged.extend(values);
        }
        Ok(Overlay::new(name, merged))
    }

    fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
