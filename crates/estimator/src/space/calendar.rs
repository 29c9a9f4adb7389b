//! Calendar and clock dimensions of the datetime search space.
//!
//! The native engine enumerates boot datetimes second by second: every day in
//! the configured date range, and within each day every (hour, minute, second)
//! triple in the configured time range. The counters here reproduce that
//! enumeration order exactly so a space size can be computed without walking
//! the space.

use chrono::NaiveDate;

/// Inclusive calendar date range.
///
/// Both endpoints are counted: a range whose start and end are the same day
/// spans exactly one day. An inverted range (end before start) is treated as
/// empty, not as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a date range from inclusive endpoints.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of calendar days the range spans, counting both endpoints.
    ///
    /// Uses the proleptic Gregorian calendar. Inverted ranges yield 0.
    pub fn count_days(&self) -> u64 {
        let days = self.end.signed_duration_since(self.start).num_days() + 1;
        days.max(0) as u64
    }
}

/// Inclusive hour/minute/second sub-ranges of a single day.
///
/// The three fields are independent odometer digits: the second count is the
/// product of the three per-field spans, with no carry between fields. An
/// inverted sub-field contributes a factor of 0, which empties the whole
/// range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    pub hour_min: u8,
    pub hour_max: u8,
    pub minute_min: u8,
    pub minute_max: u8,
    pub second_min: u8,
    pub second_max: u8,
}

impl TimeRange {
    /// The full 00:00:00 – 23:59:59 day.
    pub const fn full_day() -> Self {
        Self {
            hour_min: 0,
            hour_max: 23,
            minute_min: 0,
            minute_max: 59,
            second_min: 0,
            second_max: 59,
        }
    }

    /// Number of clock seconds enumerated per day.
    ///
    /// Each field spans `end - start + 1` values, floored at 0 when inverted.
    /// Fields are multiplied independently; an hour_max past 23 is the
    /// caller's contract violation, not wrapped into the next day.
    pub fn count_seconds(&self) -> u64 {
        field_span(self.hour_min, self.hour_max)
            * field_span(self.minute_min, self.minute_max)
            * field_span(self.second_min, self.second_max)
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::full_day()
    }
}

/// Inclusive span of a single clock field, empty when inverted.
fn field_span(min: u8, max: u8) -> u64 {
    (max as i64 - min as i64 + 1).max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_counts_one() {
        let range = DateRange::new(date(2023, 5, 1), date(2023, 5, 1));
        assert_eq!(range.count_days(), 1);
    }

    #[test]
    fn one_day_span_counts_two() {
        let range = DateRange::new(date(2023, 5, 1), date(2023, 5, 2));
        assert_eq!(range.count_days(), 2);
    }

    #[test]
    fn day_count_crosses_month_and_leap_boundaries() {
        // 2024 is a leap year: Feb 28 .. Mar 1 inclusive is 3 days.
        let range = DateRange::new(date(2024, 2, 28), date(2024, 3, 1));
        assert_eq!(range.count_days(), 3);
    }

    #[test]
    fn inverted_date_range_is_empty() {
        let range = DateRange::new(date(2023, 5, 2), date(2023, 5, 1));
        assert_eq!(range.count_days(), 0);
    }

    #[test]
    fn full_day_has_86400_seconds() {
        assert_eq!(TimeRange::full_day().count_seconds(), 86_400);
    }

    #[test]
    fn single_second_range_counts_one() {
        let range = TimeRange {
            hour_min: 12,
            hour_max: 12,
            minute_min: 30,
            minute_max: 30,
            second_min: 0,
            second_max: 0,
        };
        assert_eq!(range.count_seconds(), 1);
    }

    #[test]
    fn inverted_sub_field_empties_the_range() {
        let range = TimeRange {
            hour_min: 10,
            hour_max: 9,
            ..TimeRange::full_day()
        };
        assert_eq!(range.count_seconds(), 0);
    }
}
