//! Serializable snapshot of the dashboard for non-interactive output

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::state::{AppState, LoadStatus};
use zdash_core::Locale;

/// Point-in-time view of everything the dashboard shows
#[derive(Debug, Serialize)]
pub struct DashboardReport<'a> {
    pub locale: Locale,
    pub status: LoadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    pub last_refresh: Option<DateTime<Local>>,
    pub dashboard: &'a Dashboard,
}

impl<'a> DashboardReport<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        Self {
            locale: state.locale,
            status: state.load_status,
            error: state.last_error.as_deref(),
            last_refresh: state.last_refresh,
            dashboard: &state.dashboard,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::dashboard::SlotId;

    #[test]
    fn test_report_uses_slot_ids_and_status() {
        let mut state = AppState::new(Settings::default(), Locale::En);
        state
            .dashboard
            .update_badge(SlotId::ValMonitor, Some("crashed"), Locale::En);
        state.load_status = LoadStatus::Loaded;

        let json: serde_json::Value =
            serde_json::from_str(&DashboardReport::from_state(&state).to_json_pretty().unwrap())
                .unwrap();

        assert_eq!(json["locale"], "en");
        assert_eq!(json["status"], "loaded");
        assert!(json.get("error").is_none());
        assert_eq!(json["dashboard"]["texts"]["prop-name"], "NeoZygisk");
        assert_eq!(json["dashboard"]["badges"]["val-monitor"]["class"], "negative");
        assert_eq!(json["dashboard"]["badges"]["val-monitor"]["label"], "Crashed");
    }

    #[test]
    fn test_report_includes_error_on_failure() {
        let mut state = AppState::new(Settings::default(), Locale::En);
        state.load_status = LoadStatus::BridgeError;
        state.last_error = Some("timed out".to_string());

        let json = serde_json::to_value(DashboardReport::from_state(&state)).unwrap();
        assert_eq!(json["status"], "bridge_error");
        assert_eq!(json["error"], "timed out");
    }
}
