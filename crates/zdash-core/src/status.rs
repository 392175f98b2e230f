//! Status tokens and their three-state badge classification

use std::fmt;

use serde::{Serialize, Serializer};

use crate::i18n::{self, Locale};

/// A status token reported by the module
///
/// Known tokens get their own variant; anything else is carried verbatim in
/// [`StatusValue::Other`]. Conversion from a string never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusValue {
    Running,
    Stopped,
    Crashed,
    Unknown,
    Injected,
    NotInjected,
    Tracing,
    Exited,
    Other(String),
}

impl StatusValue {
    /// The token as it appears in the property file
    pub fn as_str(&self) -> &str {
        match self {
            StatusValue::Running => "running",
            StatusValue::Stopped => "stopped",
            StatusValue::Crashed => "crashed",
            StatusValue::Unknown => "unknown",
            StatusValue::Injected => "injected",
            StatusValue::NotInjected => "not_injected",
            StatusValue::Tracing => "tracing",
            StatusValue::Exited => "exited",
            StatusValue::Other(raw) => raw,
        }
    }

    /// Badge class for this status
    pub fn class(&self) -> StatusClass {
        match self {
            StatusValue::Running | StatusValue::Injected | StatusValue::Tracing => {
                StatusClass::Positive
            }
            StatusValue::Crashed
            | StatusValue::NotInjected
            | StatusValue::Stopped
            | StatusValue::Exited => StatusClass::Negative,
            StatusValue::Unknown | StatusValue::Other(_) => StatusClass::Indeterminate,
        }
    }

    /// Display label in `locale`, falling back to the raw token
    pub fn label(&self, locale: Locale) -> String {
        i18n::label(locale, self.as_str()).to_string()
    }
}

impl From<&str> for StatusValue {
    fn from(raw: &str) -> Self {
        match raw {
            "running" => StatusValue::Running,
            "stopped" => StatusValue::Stopped,
            "crashed" => StatusValue::Crashed,
            "unknown" => StatusValue::Unknown,
            "injected" => StatusValue::Injected,
            "not_injected" => StatusValue::NotInjected,
            "tracing" => StatusValue::Tracing,
            "exited" => StatusValue::Exited,
            other => StatusValue::Other(other.to_string()),
        }
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StatusValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Coarse health state shown by a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Positive,
    Negative,
    Indeterminate,
}

impl StatusClass {
    /// Colour token bound to this class
    pub fn color_token(self) -> &'static str {
        match self {
            StatusClass::Positive => "green",
            StatusClass::Negative => "red",
            StatusClass::Indeterminate => "gray",
        }
    }

    /// Icon bound to this class
    pub fn icon(self) -> StatusIcon {
        match self {
            StatusClass::Positive => StatusIcon::Check,
            StatusClass::Negative => StatusIcon::Cross,
            StatusClass::Indeterminate => StatusIcon::Info,
        }
    }
}

/// Icon shown inside a badge
///
/// Renderers resolve the actual glyph; the core only decides which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    Check,
    Cross,
    Info,
}

/// Result of classifying a status string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub class: StatusClass,
    pub label: String,
}

/// Classify a raw status string and resolve its label in `locale`
///
/// Total over all inputs. Callers skip empty statuses before getting here.
pub fn classify(status: &str, locale: Locale) -> Classification {
    let value = StatusValue::from(status);
    Classification {
        class: value.class(),
        label: value.label(locale),
    }
}
