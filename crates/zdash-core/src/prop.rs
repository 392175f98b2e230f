//! Property file parsing
//!
//! A module property file is newline-delimited `key=value` text. Parsing is
//! permissive: blank lines, lines without `=`, and lines with an empty key are
//! skipped without error, and a later duplicate key overwrites an earlier one.

use std::collections::BTreeMap;

use serde::Serialize;

/// Well-known property keys
pub mod keys {
    pub const NAME: &str = "name";
    pub const VERSION: &str = "version";
    pub const AUTHOR: &str = "author";
    pub const DESCRIPTION: &str = "description";
    pub const ROOT_IMPLEMENTATION: &str = "root_implementation";
    pub const DEVICE_KERNEL: &str = "device_kernel";
    pub const DEVICE_SDK: &str = "device_sdk";
    pub const DEVICE_ABI: &str = "device_abi";
    pub const MONITOR_STATUS: &str = "monitor_status";
    pub const ZYGOTE_64_STATUS: &str = "zygote_64_status";
    pub const DAEMON_64_STATUS: &str = "daemon_64_status";
    pub const MODULES_COUNT: &str = "modules_count";
    pub const MODULES_LIST: &str = "modules_list";
}

/// Parsed property file: key to value, both trimmed.
///
/// Keys missing from the source text are absent, never placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyRecord {
    entries: BTreeMap<String, String>,
}

impl PropertyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, if the key appeared in the source text
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key` if present and non-empty
    ///
    /// An empty value is treated like a missing one by every consumer.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries of the comma-separated `modules_list` field
    ///
    /// Returns `None` when the field is absent or empty, so callers can leave
    /// a previously rendered list untouched.
    pub fn modules(&self) -> Option<Vec<String>> {
        self.non_empty(keys::MODULES_LIST).map(split_list)
    }
}

/// Parse property text into a record
///
/// Never fails; malformed input yields fewer entries. A leading byte order
/// mark is dropped so files saved by Windows editors keep their first key.
pub fn parse(text: &str) -> PropertyRecord {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut record = PropertyRecord::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some((key, value)) => record.insert(key, value),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::trace!("Skipped {} malformed property lines", skipped);
    }

    record
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Split a single trimmed line at its first `=`
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Split a comma-separated field, trimming segments and dropping empty ones
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
