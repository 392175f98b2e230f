//! Display locales and translation tables
//!
//! Lookups never fail: a key missing from a table resolves to `None` via
//! [`translate`], and [`label`] falls back to the key itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (base locale)
    #[default]
    En,
    /// Simplified Chinese
    Zh,
}

/// All locales, in menu order
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Zh];

/// Environment variables consulted for the host locale, in priority order
const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Name of the locale written in that locale
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }

    /// Parse a locale tag such as `zh`, `zh-CN` or `zh_TW.UTF-8`
    ///
    /// Returns `None` for empty or unsupported tags.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        let lang = tag.split(['-', '_', '.', '@']).next().unwrap_or("");
        match lang {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    /// Map a host-reported preference to a locale
    ///
    /// Any tag starting with `zh` selects Chinese; everything else, including
    /// `C`/`POSIX` and unknown languages, selects the base locale.
    pub fn from_host_preference(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("zh") {
            Locale::Zh
        } else {
            Locale::En
        }
    }

    /// Detect the locale from `LC_ALL`, `LC_MESSAGES` and `LANG`
    pub fn detect_from_env() -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::from_host_preference(&value))
            .unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ─────────────────────────────────────────────────────────────────
// Tables
// ─────────────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("basic_info", "Basic Information"),
    ("device_info", "Device"),
    ("kernel", "Kernel"),
    ("sdk", "SDK"),
    ("abi", "ABI"),
    ("version", "Version"),
    ("author", "Author"),
    ("description", "Description"),
    ("dashboard", "Dashboard"),
    ("status", "Status"),
    ("root_impl", "Root implementation"),
    ("zygote_monitor", "Zygote Monitor"),
    ("zygote64", "Zygote64"),
    ("daemon64", "Daemon64"),
    ("modules", "Modules"),
    ("modules_list", "Running Modules"),
    ("no_modules", "No modules loaded"),
    ("language", "Language"),
    ("refresh", "Refresh"),
    ("refreshing", "Refreshing"),
    ("last_refresh", "Updated"),
    ("close", "Close"),
    ("quit", "Quit"),
    // Statuses
    ("running", "Running"),
    ("injected", "Injected"),
    ("tracing", "Tracing"),
    ("stopped", "Stopped"),
    ("exited", "Exited"),
    ("unknown", "Unknown"),
    ("not_injected", "Not Injected"),
    ("crashed", "Crashed"),
];

const ZH: &[(&str, &str)] = &[
    ("basic_info", "基本信息"),
    ("device_info", "设备"),
    ("kernel", "内核"),
    ("sdk", "SDK"),
    ("abi", "ABI"),
    ("version", "版本"),
    ("author", "作者"),
    ("description", "描述"),
    ("dashboard", "仪表板"),
    ("status", "状态"),
    ("root_impl", "Root 实现"),
    ("zygote_monitor", "Zygote 监视器"),
    ("zygote64", "Zygote64"),
    ("daemon64", "守护进程64"),
    ("modules", "模块"),
    ("modules_list", "运行中的模块"),
    ("no_modules", "没有已加载的模块"),
    ("language", "语言"),
    ("refresh", "刷新"),
    ("refreshing", "刷新中"),
    ("last_refresh", "更新于"),
    ("close", "关闭"),
    ("quit", "退出"),
    // Statuses
    ("running", "运行中"),
    ("injected", "已注入"),
    ("tracing", "追踪中"),
    ("stopped", "已停止"),
    ("exited", "已退出"),
    ("unknown", "未知"),
    ("not_injected", "未注入"),
    ("crashed", "已崩溃"),
];

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Zh => ZH,
    }
}

/// Look up `key` in the table for `locale`
pub fn translate(locale: Locale, key: &str) -> Option<&'static str> {
    table(locale)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Translated text for `key`, or `key` itself when the table has no entry
pub fn label<'a>(locale: Locale, key: &'a str) -> &'a str {
    translate(locale, key).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate(Locale::En, "crashed"), Some("Crashed"));
        assert_eq!(translate(Locale::Zh, "crashed"), Some("已崩溃"));
    }

    #[test]
    fn test_translate_missing_key() {
        assert_eq!(translate(Locale::En, "no_such_key"), None);
    }

    #[test]
    fn test_label_falls_back_to_key() {
        assert_eq!(label(Locale::Zh, "zombie"), "zombie");
        assert_eq!(label(Locale::En, ""), "");
    }

    #[test]
    fn test_tables_have_same_keys() {
        for (key, _) in EN {
            assert!(translate(Locale::Zh, key).is_some(), "zh missing {}", key);
        }
        for (key, _) in ZH {
            assert!(translate(Locale::En, key).is_some(), "en missing {}", key);
        }
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("ZH"), Some(Locale::Zh));
        assert_eq!(Locale::parse("zh-CN"), Some(Locale::Zh));
        assert_eq!(Locale::parse("zh_TW.UTF-8"), Some(Locale::Zh));
        assert_eq!(Locale::parse("en_US.UTF-8"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_host_preference_defaults_to_base() {
        assert_eq!(Locale::from_host_preference("zh-Hans"), Locale::Zh);
        assert_eq!(Locale::from_host_preference("de-DE"), Locale::En);
        assert_eq!(Locale::from_host_preference("C"), Locale::En);
    }

    #[test]
    #[serial]
    fn test_detect_from_env_prefers_lc_all() {
        std::env::set_var("LC_ALL", "zh_CN.UTF-8");
        std::env::set_var("LANG", "en_US.UTF-8");
        assert_eq!(Locale::detect_from_env(), Locale::Zh);
        std::env::remove_var("LC_ALL");
        std::env::remove_var("LANG");
    }

    #[test]
    #[serial]
    fn test_detect_from_env_skips_empty_values() {
        std::env::set_var("LC_ALL", "");
        std::env::remove_var("LC_MESSAGES");
        std::env::set_var("LANG", "zh_TW");
        assert_eq!(Locale::detect_from_env(), Locale::Zh);
        std::env::remove_var("LC_ALL");
        std::env::remove_var("LANG");
    }

    #[test]
    #[serial]
    fn test_detect_from_env_without_vars() {
        std::env::remove_var("LC_ALL");
        std::env::remove_var("LC_MESSAGES");
        std::env::remove_var("LANG");
        assert_eq!(Locale::detect_from_env(), Locale::En);
    }
}
