//! TOML -> 配置映射

use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::settings::keys::NULL_KEY;

/// 解析 TOML 文本为顶层键值映射
///
/// 值统一转换为 JSON 值，错误以文本形式返回。
/// `__null__` 列出的键被设为 `null`，该元数据键本身不保留。
pub fn parse_toml(source: &str) -> Result<BTreeMap<String, Value>, String> {
    let table: toml::Table = toml::from_str(source).map_err(|e| e.to_string())?;
    let mut values = table
        .into_iter()
        .map(|(key, value)| {
            serde_json::to_value(value)
                .map(|v| (key.clone(), v))
                .map_err(|e| format!("{}: {}", key, e))
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    if let Some(nulls) = values.remove(NULL_KEY) {
        for key in null_keys(nulls)? {
            if values.contains_key(&key) {
                return Err(format!("{} is both set and listed in {}", key, NULL_KEY));
            }
            values.insert(key, Value::Null);
        }
    }
    Ok(values)
}

fn null_keys(value: Value) -> Result<Vec<String>, String> {
    let invalid = || format!("{} must be a list of setting names", NULL_KEY);
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(key) => Ok(key),
                _ => Err(invalid()),
            })
            .collect(),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_nested_values() {
        let values = parse_toml(
            r#"
__extends__ = "idb"
LOAN_DURATION = 14
AVAILABLE_LANGUAGES = [["fr", "Français"]]
HOME_CARDS = [{ id = "ted", sessions = [["a", "A"]] }]

[EXTRA_LANG_INFO.ku]
code = "ku"
"#,
        )
        .unwrap();

        assert_eq!(values["__extends__"], json!("idb"));
        assert_eq!(values["LOAN_DURATION"], json!(14));
        assert_eq!(values["AVAILABLE_LANGUAGES"], json!([["fr", "Français"]]));
        assert_eq!(
            values["HOME_CARDS"],
            json!([{"id": "ted", "sessions": [["a", "A"]]}])
        );
        assert_eq!(values["EXTRA_LANG_INFO"], json!({"ku": {"code": "ku"}}));
    }

    #[test]
    fn test_null_keys() {
        let values = parse_toml("__null__ = [\"TIME_ZONE\"]\nDOMAIN = \"kb.lan\"\n").unwrap();
        assert_eq!(values["TIME_ZONE"], Value::Null);
        assert_eq!(values["DOMAIN"], json!("kb.lan"));
        assert!(!values.contains_key("__null__"));
    }

    #[test]
    fn test_invalid_null_keys() {
        assert!(parse_toml("__null__ = \"TIME_ZONE\"\n").is_err());
        assert!(parse_toml("__null__ = [1]\n").is_err());
        assert!(parse_toml("__null__ = [\"TIME_ZONE\"]\nTIME_ZONE = \"UTC\"\n").is_err());
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(parse_toml("DOMAIN = ").is_err());
    }
}
