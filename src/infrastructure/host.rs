//! 主机信息

/// 主机网络名称
///
/// 依次尝试 `hostname` 命令、`/etc/hostname`，都失败时返回 `localhost`
pub fn hostname() -> String {
    std::process::Command::new("hostname")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            std::fs::read_to_string("/etc/hostname")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| "localhost".to_string())
}

/// 从环境变量读取原始部署标识
///
/// 非 UTF-8 的值按有损方式转换，之后仍会经过清洗
pub fn raw_identifier(var: &str) -> Option<String> {
    std::env::var_os(var).map(|v| v.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_is_never_empty() {
        assert!(!hostname().is_empty());
    }

    #[test]
    fn test_raw_identifier_absent() {
        assert_eq!(raw_identifier("IDEASCUBE_TEST_UNSET_VARIABLE"), None);
    }

    #[test]
    fn test_raw_identifier_present() {
        std::env::set_var("IDEASCUBE_TEST_RAW_IDENTIFIER", "kb-bdi");
        assert_eq!(
            raw_identifier("IDEASCUBE_TEST_RAW_IDENTIFIER").as_deref(),
            Some("kb-bdi")
        );
        std::env::remove_var("IDEASCUBE_TEST_RAW_IDENTIFIER");
    }

    #[cfg(unix)]
    #[test]
    fn test_raw_identifier_not_utf8() {
        use crate::domain::Identifier;
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("IDEASCUBE_TEST_RAW_BYTES", OsStr::from_bytes(b"kb\xff_bdi"));
        let raw = raw_identifier("IDEASCUBE_TEST_RAW_BYTES").unwrap();
        assert_eq!(Identifier::sanitize(&raw).as_str(), "kb_bdi");
        std::env::remove_var("IDEASCUBE_TEST_RAW_BYTES");
    }
}
