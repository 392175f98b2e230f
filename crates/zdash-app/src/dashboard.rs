//! Dashboard view model
//!
//! Holds the content of every rendering target: plain text slots, status
//! badges, and the running-module list. Writes are diffed against the current
//! content and skipped when nothing would change, so repeated refreshes with
//! identical data leave the model (and its revision) untouched.

use std::collections::BTreeMap;

use serde::Serialize;
use zdash_core::{keys, Locale, PropertyRecord, StatusClass, StatusIcon, StatusValue};

/// Text shown in a slot that has never received data
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Default module name shown before the first load
pub const DEFAULT_MODULE_NAME: &str = "NeoZygisk";

/// Stable identifier of a rendering target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SlotId {
    #[serde(rename = "prop-name")]
    PropName,
    #[serde(rename = "prop-version")]
    PropVersion,
    #[serde(rename = "prop-author")]
    PropAuthor,
    #[serde(rename = "prop-description")]
    PropDescription,
    #[serde(rename = "val-root")]
    ValRoot,
    #[serde(rename = "device-kernel")]
    DeviceKernel,
    #[serde(rename = "device-sdk")]
    DeviceSdk,
    #[serde(rename = "device-abi")]
    DeviceAbi,
    #[serde(rename = "val-monitor")]
    ValMonitor,
    #[serde(rename = "val-zygote64")]
    ValZygote64,
    #[serde(rename = "val-daemon64")]
    ValDaemon64,
    #[serde(rename = "val-modules-count")]
    ValModulesCount,
    #[serde(rename = "modules-list")]
    ModulesList,
}

impl SlotId {
    pub fn as_str(self) -> &'static str {
        match self {
            SlotId::PropName => "prop-name",
            SlotId::PropVersion => "prop-version",
            SlotId::PropAuthor => "prop-author",
            SlotId::PropDescription => "prop-description",
            SlotId::ValRoot => "val-root",
            SlotId::DeviceKernel => "device-kernel",
            SlotId::DeviceSdk => "device-sdk",
            SlotId::DeviceAbi => "device-abi",
            SlotId::ValMonitor => "val-monitor",
            SlotId::ValZygote64 => "val-zygote64",
            SlotId::ValDaemon64 => "val-daemon64",
            SlotId::ValModulesCount => "val-modules-count",
            SlotId::ModulesList => "modules-list",
        }
    }
}

/// Text slots and the property key feeding each
pub const TEXT_BINDINGS: &[(SlotId, &str)] = &[
    (SlotId::PropName, keys::NAME),
    (SlotId::PropVersion, keys::VERSION),
    (SlotId::PropAuthor, keys::AUTHOR),
    (SlotId::PropDescription, keys::DESCRIPTION),
    (SlotId::ValRoot, keys::ROOT_IMPLEMENTATION),
    (SlotId::DeviceKernel, keys::DEVICE_KERNEL),
    (SlotId::DeviceSdk, keys::DEVICE_SDK),
    (SlotId::DeviceAbi, keys::DEVICE_ABI),
    (SlotId::ValModulesCount, keys::MODULES_COUNT),
];

/// Badge slots and the status key feeding each
pub const BADGE_BINDINGS: &[(SlotId, &str)] = &[
    (SlotId::ValMonitor, keys::MONITOR_STATUS),
    (SlotId::ValZygote64, keys::ZYGOTE_64_STATUS),
    (SlotId::ValDaemon64, keys::DAEMON_64_STATUS),
];

/// Why the property file could not be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// The command ran but exited non-zero or printed nothing
    ReadFailed,
    /// The bridge itself failed
    BridgeError,
}

impl LoadFailure {
    /// Placeholder written into the module name slot
    pub fn placeholder(self) -> &'static str {
        match self {
            LoadFailure::ReadFailed => "NeoZygisk (Load Failed)",
            LoadFailure::BridgeError => "NeoZygisk (Error)",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Badge
// ─────────────────────────────────────────────────────────────────────────────

/// A status badge: label, class-derived colour, and icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeSlot {
    /// Last status written to this badge
    status: Option<StatusValue>,
    /// Class of `status`, kept so relabeling never reclassifies
    class: Option<StatusClass>,
    label: String,
    icon: StatusIcon,
    /// Number of times the icon actually changed
    #[serde(skip)]
    icon_swaps: u32,
}

impl Default for BadgeSlot {
    fn default() -> Self {
        Self {
            status: None,
            class: None,
            label: EMPTY_PLACEHOLDER.to_string(),
            icon: StatusClass::Indeterminate.icon(),
            icon_swaps: 0,
        }
    }
}

impl BadgeSlot {
    pub fn status(&self) -> Option<&StatusValue> {
        self.status.as_ref()
    }

    pub fn class(&self) -> Option<StatusClass> {
        self.class
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> StatusIcon {
        self.icon
    }

    pub fn icon_swaps(&self) -> u32 {
        self.icon_swaps
    }

    /// Write a raw status into the badge
    ///
    /// An empty status leaves the badge untouched. Returns whether anything
    /// visible changed.
    pub fn apply(&mut self, raw: &str, locale: Locale) -> bool {
        if raw.is_empty() {
            return false;
        }

        let value = StatusValue::from(raw);
        let class = value.class();
        let label = value.label(locale);

        let mut changed = false;
        if self.label != label {
            self.label = label;
            changed = true;
        }
        if self.class != Some(class) {
            self.class = Some(class);
            changed = true;
        }
        let icon = class.icon();
        if self.icon != icon {
            self.icon = icon;
            self.icon_swaps += 1;
            changed = true;
        }
        if self.status.as_ref() != Some(&value) {
            self.status = Some(value);
            changed = true;
        }
        changed
    }

    /// Re-derive the label for `locale` from the stored status
    ///
    /// Class and icon are left alone. Badges without a status keep their
    /// placeholder.
    pub fn relabel(&mut self, locale: Locale) -> bool {
        let Some(status) = &self.status else {
            return false;
        };
        let label = status.label(locale);
        if self.label == label {
            return false;
        }
        self.label = label;
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────────────────────────

/// Content of all rendering targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    texts: BTreeMap<SlotId, String>,
    badges: BTreeMap<SlotId, BadgeSlot>,
    modules: Vec<String>,
    /// Incremented on every effective write
    #[serde(skip)]
    revision: u64,
}

impl Default for Dashboard {
    fn default() -> Self {
        let mut texts: BTreeMap<SlotId, String> = TEXT_BINDINGS
            .iter()
            .map(|(slot, _)| (*slot, EMPTY_PLACEHOLDER.to_string()))
            .collect();
        texts.insert(SlotId::PropName, DEFAULT_MODULE_NAME.to_string());

        let badges = BADGE_BINDINGS
            .iter()
            .map(|(slot, _)| (*slot, BadgeSlot::default()))
            .collect();

        Self {
            texts,
            badges,
            modules: Vec::new(),
            revision: 0,
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a text slot (empty for non-text slots)
    pub fn text(&self, slot: SlotId) -> &str {
        self.texts.get(&slot).map(String::as_str).unwrap_or("")
    }

    pub fn badge(&self, slot: SlotId) -> Option<&BadgeSlot> {
        self.badges.get(&slot)
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Write `value` into a text slot unless it is empty or unchanged
    pub fn update_text(&mut self, slot: SlotId, value: Option<&str>) -> bool {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return false;
        };
        let Some(current) = self.texts.get_mut(&slot) else {
            return false;
        };
        if current == value {
            return false;
        }
        *current = value.to_string();
        self.revision += 1;
        true
    }

    /// Write a raw status into a badge slot
    pub fn update_badge(&mut self, slot: SlotId, status: Option<&str>, locale: Locale) -> bool {
        let Some(status) = status else {
            return false;
        };
        let changed = self
            .badges
            .get_mut(&slot)
            .map(|badge| badge.apply(status, locale))
            .unwrap_or(false);
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Replace the module list unless it is identical
    pub fn update_modules(&mut self, modules: Vec<String>) -> bool {
        if self.modules == modules {
            return false;
        }
        self.modules = modules;
        self.revision += 1;
        true
    }

    /// Apply a freshly parsed record to every bound slot
    ///
    /// Missing or empty fields leave their slot at its previous content.
    /// Returns the number of slots that changed.
    pub fn apply_record(&mut self, record: &PropertyRecord, locale: Locale) -> usize {
        let mut changed = 0;

        for (slot, key) in TEXT_BINDINGS {
            if self.update_text(*slot, record.get(key)) {
                changed += 1;
            }
        }

        for (slot, key) in BADGE_BINDINGS {
            if self.update_badge(*slot, record.get(key), locale) {
                changed += 1;
            }
        }

        if let Some(modules) = record.modules() {
            if self.update_modules(modules) {
                changed += 1;
            }
        }

        changed
    }

    /// Re-translate every badge label for `locale`
    pub fn relabel(&mut self, locale: Locale) -> usize {
        let mut changed = 0;
        for badge in self.badges.values_mut() {
            if badge.relabel(locale) {
                changed += 1;
            }
        }
        self.revision += changed as u64;
        changed
    }

    /// Show a failure placeholder in the module name slot
    pub fn show_load_failure(&mut self, failure: LoadFailure) -> bool {
        self.update_text(SlotId::PropName, Some(failure.placeholder()))
    }
}
