use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregation period for bucketing transaction rows.
///
/// The representative date of a bucket is the *end* of the period: a month
/// bucket is labeled with the last calendar day of that month, a quarter
/// bucket with the last day of the quarter, a week bucket with its Sunday,
/// and a day bucket with the date itself. The convention is applied
/// consistently everywhere and pinned by tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    #[default]
    Month,
    Quarter,
}

impl Period {
    /// Stable lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
        }
    }

    /// Maps a date to the end of the bucket it falls into.
    pub fn bucket_end(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Day => date,
            Period::Week => {
                // Weeks end on Sunday; a Sunday maps to itself.
                let days_ahead = match date.weekday() {
                    Weekday::Sun => 0,
                    other => 7 - other.num_days_from_sunday() as u64,
                };
                date + Days::new(days_ahead)
            }
            Period::Month => last_day_of_month(date.year(), date.month()),
            Period::Quarter => {
                let quarter_end_month = ((date.month() - 1) / 3) * 3 + 3;
                last_day_of_month(date.year(), quarter_end_month)
            }
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the last calendar day of the given month.
pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    // Get the first day of the next month, then subtract one day
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2023, 1), date(2023, 1, 31));
        assert_eq!(last_day_of_month(2023, 2), date(2023, 2, 28));
        assert_eq!(last_day_of_month(2024, 2), date(2024, 2, 29)); // Leap year
        assert_eq!(last_day_of_month(2023, 12), date(2023, 12, 31));
    }

    #[test]
    fn test_day_bucket_is_identity() {
        assert_eq!(Period::Day.bucket_end(date(2026, 1, 15)), date(2026, 1, 15));
    }

    #[test]
    fn test_week_bucket_ends_on_sunday() {
        // 2026-01-05 is a Monday; its week ends on Sunday 2026-01-11.
        assert_eq!(Period::Week.bucket_end(date(2026, 1, 5)), date(2026, 1, 11));
        // A Sunday maps to itself.
        assert_eq!(
            Period::Week.bucket_end(date(2026, 1, 11)),
            date(2026, 1, 11)
        );
        // A Saturday maps to the next day.
        assert_eq!(
            Period::Week.bucket_end(date(2026, 1, 10)),
            date(2026, 1, 11)
        );
    }

    #[test]
    fn test_month_bucket_ends_on_last_day() {
        assert_eq!(
            Period::Month.bucket_end(date(2026, 1, 1)),
            date(2026, 1, 31)
        );
        assert_eq!(
            Period::Month.bucket_end(date(2026, 2, 14)),
            date(2026, 2, 28)
        );
    }

    #[test]
    fn test_quarter_bucket_ends_on_quarter_end() {
        assert_eq!(
            Period::Quarter.bucket_end(date(2026, 1, 1)),
            date(2026, 3, 31)
        );
        assert_eq!(
            Period::Quarter.bucket_end(date(2026, 3, 31)),
            date(2026, 3, 31)
        );
        assert_eq!(
            Period::Quarter.bucket_end(date(2026, 11, 2)),
            date(2026, 12, 31)
        );
    }

    #[test]
    fn test_default_period_is_month() {
        assert_eq!(Period::default(), Period::Month);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Period::Quarter).unwrap();
        assert_eq!(json, "\"quarter\"");
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Period::Quarter);
    }
}
