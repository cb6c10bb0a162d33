use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Unique identifier for countdown events. A monotonic u64 persisted with
/// the snapshot, so ids survive restarts and never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub u64);

/// Name stored when the user submits an empty or whitespace-only title.
pub const DEFAULT_EVENT_NAME: &str = "Countdown";

/// A named target point in time tracked for countdown display and one-shot
/// notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownEvent {
    pub id: EventId,
    pub name: String,
    /// Second precision; sub-second parts are never captured at input.
    pub target_at: DateTime<Local>,
    /// Set true the first time the target is reached with notifications
    /// enabled; never reverts. Absent in older snapshots means false.
    #[serde(default)]
    pub notified: bool,
}

impl CountdownEvent {
    /// Normalize a submitted name: trim, and fall back to the placeholder
    /// when nothing is left.
    pub fn display_name(raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            DEFAULT_EVENT_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Desktop stand-in for the browser notification permission: a persisted
/// toggle consulted lazily at fire time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub enabled: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Serializable container for persisting events between sessions.
/// There is no schema version; fields added later take `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub next_id: u64,
    pub events: Vec<CountdownEvent>,
    #[serde(default)]
    pub notification_config: NotificationConfig,
}
