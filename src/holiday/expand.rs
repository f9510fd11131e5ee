//! Expansion of coarse holiday ranges into a per-day calendar.

use chrono::NaiveDate;

use super::types::{HolidayCalendar, HolidayRange, DEFAULT_HOLIDAY_LABEL};

/// Expand `[start, end)` ranges into a dense per-day [`HolidayCalendar`].
///
/// Items whose start or end is not a well-formed date (shorter than 10
/// characters, or not parseable as `YYYY-MM-DD`) are skipped. Labels
/// default to [`DEFAULT_HOLIDAY_LABEL`] and multiple labels landing on the
/// same day are merged in first-seen order.
pub fn expand_ranges(items: &[HolidayRange]) -> HolidayCalendar {
    let mut calendar = HolidayCalendar::default();

    for item in items {
        let name = item
            .summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_HOLIDAY_LABEL);

        let (Some(start), Some(end)) = (parse_date(&item.start), parse_date(&item.end)) else {
            continue;
        };

        let mut day = start;
        while day < end {
            calendar.add_label(&day.format("%Y-%m-%d").to_string(), name);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
    }

    calendar
}

/// Parse the leading `YYYY-MM-DD` of a date-like string. Strings shorter
/// than 10 bytes are rejected as malformed.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
