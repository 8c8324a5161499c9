//! 启动装配
//!
//! 把运行配置、overlay 注册表、语言元数据表和解析器组装起来

use std::io::Write;
use std::sync::Arc;

use crate::application::SettingsResolver;
use crate::config::ResolverConfig;
use crate::domain::{Settings, SettingsError};
use crate::infrastructure::{base_settings, host, ConfRegistry, LangInfoTable};

/// 组装完成的解析环境
pub struct Bootstrap {
    pub registry: Arc<ConfRegistry>,
    pub lang_info: Arc<LangInfoTable>,
    pub resolver: SettingsResolver,
}

impl Bootstrap {
    /// 按运行配置组装
    ///
    /// 额外 overlay 目录不可读时只记录警告，继续使用内置 overlay
    pub fn new(config: &ResolverConfig) -> Result<Self, SettingsError> {
        let base = base_settings()?;

        let mut registry = ConfRegistry::with_builtin();
        if let Some(dir) = &config.conf_dir {
            match registry.load_dir(dir) {
                Ok(count) => tracing::info!(dir = %dir.display(), count, "Conf directory loaded"),
                Err(e) => tracing::warn!(dir = %dir.display(), error = %e, "Failed to read conf directory"),
            }
        }
        let registry = Arc::new(registry);
        let lang_info = LangInfoTable::with_builtin().arc();

        let resolver = SettingsResolver::new(base, registry.clone(), lang_info.clone())
            .with_fallback(config.fallback_conf.clone());

        Ok(Self {
            registry,
            lang_info,
            resolver,
        })
    }

    /// 解析启动配置
    ///
    /// 标识优先取 `id_override`，其次取环境变量，最后取主机名
    pub fn resolve(
        &self,
        config: &ResolverConfig,
        id_override: Option<&str>,
        out: &mut dyn Write,
    ) -> Result<Settings, SettingsError> {
        let raw = id_override
            .map(str::to_owned)
            .or_else(|| host::raw_identifier(&config.id_env_var));
        let hostname = host::hostname();
        self.resolver.resolve(raw.as_deref(), &hostname, out)
    }
}
