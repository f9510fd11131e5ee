//! Holiday source types and the per-day calendar index.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

/// Fallback label for ranges the source ships without a summary.
pub const DEFAULT_HOLIDAY_LABEL: &str = "공휴일";

/// Separator between labels when several holidays land on the same day.
pub(crate) const LABEL_SEPARATOR: &str = " · ";

/// Response envelope of the holiday source,
/// `{"result": {"data": [...]}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidayResponse {
    #[serde(default)]
    pub result: HolidayResult,
}

/// Payload of the holiday response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidayResult {
    #[serde(default)]
    pub data: Vec<HolidayRange>,
}

/// One date range from the holiday source. `end` is exclusive: the range
/// covers `[start, end)`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidayRange {
    /// Range start, date-like string (`YYYY-MM-DD`, possibly with a time
    /// suffix).
    #[serde(default)]
    pub start: String,
    /// Range end, exclusive.
    #[serde(default)]
    pub end: String,
    /// Holiday label; [`DEFAULT_HOLIDAY_LABEL`] when absent or blank.
    #[serde(default)]
    pub summary: Option<String>,
}

impl HolidayRange {
    /// Create a range, mainly for tests and fixtures.
    pub fn new(start: impl Into<String>, end: impl Into<String>, summary: Option<&str>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            summary: summary.map(|s| s.to_string()),
        }
    }
}

/// Dense per-day holiday index for one year: the set of holiday dates and
/// the label(s) attached to each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayCalendar {
    dates: HashSet<String>,
    names: HashMap<String, String>,
}

impl HolidayCalendar {
    /// Whether the given `YYYY-MM-DD` date is a holiday.
    pub fn is_holiday(&self, date: &str) -> bool {
        self.dates.contains(date)
    }

    /// Label(s) for the given date, if it is a holiday.
    pub fn name_for(&self, date: &str) -> Option<&str> {
        self.names.get(date).map(String::as_str)
    }

    /// The holiday date set.
    pub fn dates(&self) -> &HashSet<String> {
        &self.dates
    }

    /// The date-to-label map.
    pub fn names(&self) -> &HashMap<String, String> {
        &self.names
    }

    /// Holiday dates in ascending order, for JSON responses.
    pub fn sorted_dates(&self) -> Vec<&str> {
        let mut dates: Vec<&str> = self.dates.iter().map(String::as_str).collect();
        dates.sort_unstable();
        dates
    }

    /// Number of holiday days in the calendar.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Record `name` for `date`, merging with any label already present.
    ///
    /// A day that already carries a different label gets the new one
    /// appended behind [`LABEL_SEPARATOR`], unless the label is already
    /// contained in the existing text. First-seen order is preserved.
    pub(crate) fn add_label(&mut self, date: &str, name: &str) {
        self.dates.insert(date.to_string());

        match self.names.get_mut(date) {
            Some(existing) if existing.as_str() != name => {
                if !existing.contains(name) {
                    existing.push_str(LABEL_SEPARATOR);
                    existing.push_str(name);
                }
            }
            Some(_) => {}
            None => {
                self.names.insert(date.to_string(), name.to_string());
            }
        }
    }
}
