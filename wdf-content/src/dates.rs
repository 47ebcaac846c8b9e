//! Calendar spans for the activity log.

use chrono::{Month, NaiveDate};
use serde::Serialize;

/// An inclusive run of days, e.g. one logged week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateSpan {
    pub year: i32,
    pub start_month: u32,
    pub first_day: u32,
    pub end_month: u32,
    pub last_day: u32,
}

impl DateSpan {
    /// A span that starts and ends in the same month.
    pub const fn within_month(year: i32, month: u32, first_day: u32, last_day: u32) -> Self {
        Self {
            year,
            start_month: month,
            first_day,
            end_month: month,
            last_day,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.start_month, self.first_day)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.end_month, self.last_day)
    }

    /// Number of calendar days covered, both ends included.
    pub fn len_days(&self) -> Option<i64> {
        Some((self.end()? - self.start()?).num_days() + 1)
    }

    /// Human-readable label, e.g. "January 1-7, 2024".
    ///
    /// Spans crossing a month boundary read "January 29 - February 4, 2024".
    pub fn label(&self) -> String {
        let start = month_name(self.start_month);
        if self.start_month == self.end_month {
            format!("{} {}-{}, {}", start, self.first_day, self.last_day, self.year)
        } else {
            format!(
                "{} {} - {} {}, {}",
                start,
                self.first_day,
                month_name(self.end_month),
                self.last_day,
                self.year
            )
        }
    }
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_month_label() {
        let span = DateSpan::within_month(2024, 1, 1, 7);
        assert_eq!(span.label(), "January 1-7, 2024");
    }

    #[test]
    fn test_cross_month_label() {
        let span = DateSpan {
            year: 2024,
            start_month: 1,
            first_day: 29,
            end_month: 2,
            last_day: 4,
        };
        assert_eq!(span.label(), "January 29 - February 4, 2024");
        assert_eq!(span.len_days(), Some(7));
    }

    #[test]
    fn test_invalid_month_does_not_panic() {
        let span = DateSpan::within_month(2024, 13, 1, 7);
        assert_eq!(span.label(), "Unknown 1-7, 2024");
        assert_eq!(span.start(), None);
    }
}
