//! Base date/time selection for KMA requests.
//!
//! All times are Korea Standard Time (UTC+09:00) as naive date-times.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike, Utc};

/// Minute after which the current hour's nowcast is available.
pub const NOWCAST_READY_MINUTE: u32 = 45;

/// Village forecast issuance hours.
pub const FORECAST_ISSUE_HOURS: [u32; 8] = [2, 5, 8, 11, 14, 17, 20, 23];

/// Minutes after an issuance hour until the forecast is published.
pub const FORECAST_PUBLISH_DELAY_MIN: i64 = 10;

const KST_OFFSET_HOURS: i64 = 9;

/// Current wall-clock time in KST.
pub fn kst_now() -> NaiveDateTime {
    (Utc::now() + Duration::hours(KST_OFFSET_HOURS)).naive_utc()
}

/// Request parameters `base_date` / `base_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseTime(pub NaiveDateTime);

impl BaseTime {
    /// `YYYYMMDD`
    pub fn base_date(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// `HHMM`
    pub fn base_time(&self) -> String {
        self.0.format("%H%M").to_string()
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

/// `now` truncated to the hour.
pub(crate) fn start_of_hour(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN) + Duration::hours(now.hour() as i64)
}

/// Base time for the ultra short-term nowcast.
///
/// Uses the current hour once its observation is published (minute 45),
/// otherwise the previous hour. Crossing midnight moves to 23:00 of the
/// previous day.
pub fn nowcast_base(now: NaiveDateTime) -> BaseTime {
    let hour = start_of_hour(now);
    if now.minute() < NOWCAST_READY_MINUTE {
        BaseTime(hour - Duration::hours(1))
    } else {
        BaseTime(hour)
    }
}

/// Base time for the village forecast.
///
/// Picks the latest issuance hour whose forecast has been published. Before
/// 02:10 that is 23:00 of the previous day.
pub fn forecast_base(now: NaiveDateTime) -> BaseTime {
    let midnight = now.date().and_time(NaiveTime::MIN);
    FORECAST_ISSUE_HOURS
        .iter()
        .rev()
        .map(|h| midnight + Duration::hours(*h as i64))
        .find(|issued| now >= *issued + Duration::minutes(FORECAST_PUBLISH_DELAY_MIN))
        .map(BaseTime)
        .unwrap_or_else(|| BaseTime(midnight - Duration::hours(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, 0)
            .unwrap()
    }

    #[test]
    fn test_nowcast_before_cutoff_uses_previous_hour() {
        let base = nowcast_base(at(2025, 6, 15, 14, 44));
        assert_eq!(base.base_date(), "20250615");
        assert_eq!(base.base_time(), "1300");
    }

    #[test]
    fn test_nowcast_at_cutoff_uses_current_hour() {
        let base = nowcast_base(at(2025, 6, 15, 14, 45));
        assert_eq!(base.base_time(), "1400");
        let base = nowcast_base(at(2025, 6, 15, 14, 59));
        assert_eq!(base.base_time(), "1400");
    }

    #[test]
    fn test_nowcast_ignores_seconds() {
        let now = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_milli_opt(14, 45, 59, 999)
            .unwrap();
        assert_eq!(nowcast_base(now).datetime(), at(2025, 6, 15, 14, 0));
    }

    #[test]
    fn test_nowcast_midnight_rollover() {
        let base = nowcast_base(at(2025, 6, 15, 0, 30));
        assert_eq!(base.base_date(), "20250614");
        assert_eq!(base.base_time(), "2300");
    }

    #[test]
    fn test_nowcast_new_year_rollover() {
        let base = nowcast_base(at(2025, 1, 1, 0, 10));
        assert_eq!(base.base_date(), "20241231");
        assert_eq!(base.base_time(), "2300");
    }

    #[test]
    fn test_forecast_publication_delay() {
        assert_eq!(forecast_base(at(2025, 6, 15, 14, 9)).base_time(), "1100");
        assert_eq!(forecast_base(at(2025, 6, 15, 14, 10)).base_time(), "1400");
        assert_eq!(forecast_base(at(2025, 6, 15, 16, 59)).base_time(), "1400");
    }

    #[test]
    fn test_forecast_late_evening() {
        let base = forecast_base(at(2025, 6, 15, 23, 30));
        assert_eq!(base.base_date(), "20250615");
        assert_eq!(base.base_time(), "2300");
    }

    #[test]
    fn test_forecast_before_first_issue_uses_previous_day() {
        for (hh, mm) in [(0, 0), (1, 30), (2, 9)] {
            let base = forecast_base(at(2025, 6, 15, hh, mm));
            assert_eq!(base.base_date(), "20250614");
            assert_eq!(base.base_time(), "2300");
        }
        assert_eq!(forecast_base(at(2025, 6, 15, 2, 10)).base_time(), "0200");
    }
}
