//! In-Memory Language Info Table

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::ports::LangInfoPort;
use crate::domain::settings::LangInfo;

/// 本地化表自带的语言
const BUILTIN_LANG_INFO: &[(&str, &str, &str, bool)] = &[
    ("ar", "Arabic", "العربيّة", true),
    ("de", "German", "Deutsch", false),
    ("en", "English", "English", false),
    ("es", "Spanish", "español", false),
    ("fa", "Persian", "فارسی", true),
    ("fr", "French", "français", false),
    ("it", "Italian", "italiano", false),
    ("pt", "Portuguese", "Português", false),
    ("ru", "Russian", "Русский", false),
    ("sw", "Swahili", "Kiswahili", false),
];

/// 内存语言元数据表
pub struct LangInfoTable {
    entries: DashMap<String, LangInfo>,
}

impl LangInfoTable {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// 预置本地化表自带语言
    pub fn with_builtin() -> Self {
        let table = Self::new();
        for &(code, name, name_local, bidi) in BUILTIN_LANG_INFO {
            table
                .entries
                .insert(code.to_string(), LangInfo::new(code, name, name_local, bidi));
        }
        table
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 所有语言代码（有序）
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        codes.sort();
        codes
    }
}

impl Default for LangInfoTable {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl LangInfoPort for LangInfoTable {
    fn extend(&self, entries: BTreeMap<String, LangInfo>) -> usize {
        let mut added = 0;
        for (code, info) in entries {
            if self.entries.insert(code.clone(), info).is_none() {
                added += 1;
            }
            tracing::trace!(code = %code, "Language info registered");
        }
        added
    }

    fn get(&self, code: &str) -> Option<LangInfo> {
        self.entries.get(code).map(|e| e.clone())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
