use anyhow::Result;
use notify_rust::{Notification, Timeout};

/// Service for displaying system notifications when an event's target time
/// arrives. One-shot delivery is enforced by the store's notified flag, not
/// here.
pub struct NotificationService;

impl NotificationService {
    pub fn new() -> Self {
        Self
    }

    /// Show the "target reached" notification for an event. The event name
    /// is the headline, matching the countdown display.
    pub fn notify_event_reached(&self, event_name: &str) -> Result<()> {
        Notification::new()
            .summary(event_name)
            .body("Countdown complete")
            .timeout(Timeout::Milliseconds(10000))
            .show()
            .map_err(|e| anyhow::anyhow!("failed to show notification: {}", e))?;

        Ok(())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}
