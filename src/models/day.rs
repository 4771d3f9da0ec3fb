//! Local calendar-day helpers over epoch-millisecond timestamps.
use chrono::{Days, Local, TimeZone};

use crate::clock::MS_PER_DAY;

/// Local midnight of the day `days` calendar days after `now`.
///
/// Falls back to adding whole 24h days if the local midnight cannot be
/// resolved (out-of-range dates, or a zone that skips midnight).
pub fn start_of_day_after(now: i64, days: u32) -> i64 {
    local_midnight_after(now, days).unwrap_or(now + i64::from(days) * MS_PER_DAY)
}

fn local_midnight_after(now: i64, days: u32) -> Option<i64> {
    let today = Local.timestamp_millis_opt(now).single()?.date_naive();
    let target = today.checked_add_days(Days::new(u64::from(days)))?;
    let midnight = target.and_hms_opt(0, 0, 0)?;
    let local = Local.from_local_datetime(&midnight).earliest()?;
    Some(local.timestamp_millis())
}

/// `YYYY-MM-DD` of the timestamp in local time.
pub fn date_key(timestamp: i64) -> String {
    match Local.timestamp_millis_opt(timestamp).single() {
        Some(datetime) => datetime.format("%Y-%m-%d").to_string(),
        None => String::from("invalid-date"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_start_of_day_is_local_midnight() {
        let now = Local
            .with_ymd_and_hms(2024, 3, 10, 15, 42, 7)
            .earliest()
            .unwrap()
            .timestamp_millis();

        let next = start_of_day_after(now, 1);
        let local = Local.timestamp_millis_opt(next).single().unwrap();

        assert_eq!(local.hour(), 0);
        assert_eq!(local.minute(), 0);
        assert_eq!(local.second(), 0);
        assert_eq!(date_key(next), "2024-03-11");
    }

    #[test]
    fn test_zero_days_is_today_midnight() {
        let now = Local
            .with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
            .earliest()
            .unwrap()
            .timestamp_millis();

        let start = start_of_day_after(now, 0);
        assert!(start <= now);
        assert_eq!(date_key(start), "2024-06-01");
    }

    #[test]
    fn test_date_key_format() {
        let ts = Local
            .with_ymd_and_hms(2025, 1, 5, 23, 59, 0)
            .earliest()
            .unwrap()
            .timestamp_millis();
        assert_eq!(date_key(ts), "2025-01-05");
    }
}
