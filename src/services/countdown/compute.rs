//! Pure countdown arithmetic and target-date formatting.

use chrono::{DateTime, Duration, Local};

use crate::utils::date::calendar_days_between;

/// Marker shown once an event's target time has been reached.
pub const COMPLETED_MARKER: &str = "✔";

/// Result of one countdown computation for a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownStatus {
    pub reached: bool,
    pub text: String,
}

/// Compute the remaining-time display for `target` as seen from `now`.
///
/// Events at least a calendar day away (and at least 24 raw hours out) show
/// whole days; otherwise only the coarsest non-zero unit of the remaining
/// time is shown. The day count comes from midnight-truncated calendar
/// dates, so the display jumps at midnight rather than at 24-hour marks.
/// That discontinuity is intentional.
pub fn compute(now: DateTime<Local>, target: DateTime<Local>) -> CountdownStatus {
    let diff = target.signed_duration_since(now);
    if diff <= Duration::zero() {
        return CountdownStatus {
            reached: true,
            text: COMPLETED_MARKER.to_string(),
        };
    }

    let day_diff = calendar_days_between(now, target);
    let text = if day_diff >= 1 && diff >= Duration::days(1) {
        unit_text(day_diff, "day")
    } else {
        let hours = diff.num_hours();
        let minutes = diff.num_minutes() % 60;
        let seconds = diff.num_seconds() % 60;

        if hours > 0 {
            unit_text(hours, "hour")
        } else if minutes > 0 {
            unit_text(minutes, "minute")
        } else {
            // May read "0 seconds" for sub-second remainders.
            unit_text(seconds, "second")
        }
    };

    CountdownStatus {
        reached: false,
        text,
    }
}

/// Human-readable line for the configured target date.
pub fn format_target_date(target: DateTime<Local>) -> String {
    target.format("%-d %B %Y, %H:%M").to_string()
}

fn unit_text(count: i64, unit: &str) -> String {
    format!("{} {}{}", count, unit, if count == 1 { "" } else { "s" })
}
