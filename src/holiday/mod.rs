//! Holiday calendar for the reservation pages.
//!
//! The external source hands out coarse `[start, end)` ranges per year;
//! this module expands them into a per-day index the calendar UI can query
//! date by date, and memoizes the result per year.

mod expand;
mod service;
mod types;

pub use expand::expand_ranges;
pub use service::{HolidayFetcher, HolidayService};
pub use types::{
    HolidayCalendar, HolidayRange, HolidayResponse, HolidayResult, DEFAULT_HOLIDAY_LABEL,
};
