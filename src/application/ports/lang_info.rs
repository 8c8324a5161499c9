//! Language Info Port - 语言元数据表

use std::collections::BTreeMap;

use crate::domain::settings::LangInfo;

/// Language Info Port
///
/// 进程级共享的语言元数据表，只允许追加或覆盖同名条目，不允许删除
pub trait LangInfoPort: Send + Sync {
    /// 合并条目，返回新增的语言数
    fn extend(&self, entries: BTreeMap<String, LangInfo>) -> usize;

    fn get(&self, code: &str) -> Option<LangInfo>;

    fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
