//! 导出文件命名

use chrono::{NaiveDateTime, Timelike};

use crate::domain::Settings;

/// 默认导出前缀
pub const DEFAULT_EXPORT_PREFIX: &str = "idb";

/// 生成导出文件名（不含扩展名）
///
/// 格式: `<prefix>_<IDEASCUBE_ID>_<YYYY-MM-DD HH:MM:SS[.ffffff]>`，
/// 微秒为 0 时省略小数部分
pub fn export_filename(prefix: &str, settings: &Settings, now: NaiveDateTime) -> String {
    let timestamp = if now.nanosecond() / 1_000 == 0 {
        now.format("%Y-%m-%d %H:%M:%S")
    } else {
        now.format("%Y-%m-%d %H:%M:%S%.6f")
    };
    format!("{}_{}_{}", prefix, settings.ideascube_id(), timestamp)
}

/// 以当前本地时间生成导出文件名
pub fn export_filename_now(prefix: &str, settings: &Settings) -> String {
    export_filename(prefix, settings, chrono::Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::{Databases, Identifier};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn settings(id: &str) -> Settings {
        Settings {
            values: BTreeMap::new(),
            ideascube_id: Identifier::sanitize(id),
            settings_module: "ideascube.conf.dev".to_string(),
            user_form_fields: Vec::new(),
            user_data_fields: Vec::new(),
            backuped_root: PathBuf::new(),
            media_root: PathBuf::new(),
            static_root: PathBuf::new(),
            databases: Databases::new(),
            languages: Vec::new(),
        }
    }

    #[test]
    fn test_export_filename() {
        let now = NaiveDate::from_ymd_opt(2016, 7, 26)
            .unwrap()
            .and_hms_micro_opt(20, 43, 5, 1234)
            .unwrap();
        assert_eq!(
            export_filename(DEFAULT_EXPORT_PREFIX, &settings("kb-bdi"), now),
            "idb_kbbdi_2016-07-26 20:43:05.001234"
        );
    }

    #[test]
    fn test_export_filename_whole_second() {
        let now = NaiveDate::from_ymd_opt(2016, 7, 26)
            .unwrap()
            .and_hms_opt(20, 43, 5)
            .unwrap();
        assert_eq!(
            export_filename(DEFAULT_EXPORT_PREFIX, &settings("kb"), now),
            "idb_kb_2016-07-26 20:43:05"
        );
    }

    #[test]
    fn test_export_filename_now_uses_prefix() {
        let name = export_filename_now("users", &settings("kb"));
        assert!(name.starts_with("users_kb_"));
    }
}
