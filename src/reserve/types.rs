//! Reservation records for the calendar booking page.

use serde::{Deserialize, Serialize};

/// A confirmed reservation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Position-based id within the visitor's book.
    pub id: u64,
    /// Reserved date, `YYYY-MM-DD`.
    pub date: String,
    /// Reserved time slot, `HH:MM`.
    pub time: String,
    /// Patient name.
    pub name: String,
    /// Patient phone number, digits only.
    pub phone: String,
    /// Patient birth date.
    pub birth: String,
    /// Patient gender, free-form.
    pub gender: String,
    /// First visit or revisit, free-form.
    pub visit_type: String,
    /// Optional memo from the booking form.
    pub memo: String,
    /// Creation timestamp, `YYYY-MM-DD HH:MM` in UTC.
    pub created_at: String,
}

/// Draft reservation from the booking form.
#[derive(Debug, Clone, Default)]
pub struct NewReservation {
    /// Reserved date.
    pub date: String,
    /// Reserved time slot.
    pub time: String,
    /// Patient name.
    pub name: String,
    /// Patient phone number, any formatting.
    pub phone: String,
    /// Patient birth date.
    pub birth: String,
    /// Patient gender.
    pub gender: String,
    /// First visit or revisit.
    pub visit_type: String,
    /// Memo, truncated on add when over the limit.
    pub memo: String,
}

impl NewReservation {
    /// Create a draft with the required fields.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        birth: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            name: name.into(),
            phone: phone.into(),
            birth: birth.into(),
            ..Self::default()
        }
    }

    /// Set the patient gender.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Set the visit type.
    pub fn with_visit_type(mut self, visit_type: impl Into<String>) -> Self {
        self.visit_type = visit_type.into();
        self
    }

    /// Set the memo.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }
}
