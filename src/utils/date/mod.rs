// Date utility functions

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike};

/// Whole calendar days between the midnight-truncated dates of `now` and
/// `target`. Time of day is ignored, so the result jumps at midnight.
/// Naive-date subtraction keeps the count exact across DST transitions,
/// where a wall-clock difference would come up an hour short.
pub fn calendar_days_between(now: DateTime<Local>, target: DateTime<Local>) -> i64 {
    (target.date_naive() - now.date_naive()).num_days()
}

/// Combine separate date and time inputs into a local point in time with
/// seconds truncated to zero. Returns `None` for times that do not exist
/// locally (DST gaps).
pub fn combine_date_time(date: NaiveDate, time: NaiveTime) -> Option<DateTime<Local>> {
    let truncated = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)?;
    date.and_time(truncated).and_local_timezone(Local).earliest()
}

pub fn parse_time_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn calendar_days_ignore_time_of_day() {
        let now = Local.with_ymd_and_hms(2026, 3, 1, 23, 30, 0).unwrap();
        let target = Local.with_ymd_and_hms(2026, 3, 2, 0, 30, 0).unwrap();
        // One hour apart on the clock, but a full calendar day apart.
        assert_eq!(calendar_days_between(now, target), 1);
    }

    #[test]
    fn combine_truncates_seconds() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let time = NaiveTime::from_hms_opt(14, 30, 59).unwrap();
        let combined = combine_date_time(date, time).unwrap();
        assert_eq!(combined.time(), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn parse_time_accepts_hhmm_only() {
        assert!(parse_time_hhmm("09:15").is_some());
        assert!(parse_time_hhmm(" 23:59 ").is_some());
        assert!(parse_time_hhmm("9").is_none());
        assert!(parse_time_hhmm("").is_none());
        assert!(parse_time_hhmm("25:00").is_none());
    }
}
