//! Session-scoped reservation book.

use serde::{Deserialize, Serialize};

use crate::datetime::now_minute_stamp;
use crate::text::normalize_phone;
use crate::validation::validate_reservation;
use crate::Result;

use super::types::{NewReservation, Reservation};

/// Maximum reservations kept per visitor; older entries roll off.
pub const MAX_RESERVATIONS: usize = 10;

/// Maximum memo length in characters; longer memos are cut, not rejected.
pub const MAX_MEMO_LENGTH: usize = 500;

/// One visitor's reservations, oldest first, capped at
/// [`MAX_RESERVATIONS`].
///
/// The book itself is plain data: the web layer round-trips it through the
/// visitor's session via serde and owns its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationBook {
    entries: Vec<Reservation>,
}

impl ReservationBook {
    /// An empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a reservation.
    ///
    /// The phone number is reduced to digits, the memo is truncated to
    /// [`MAX_MEMO_LENGTH`] characters, and the oldest entry rolls off once
    /// the book is full.
    pub fn add(&mut self, draft: NewReservation) -> Result<Reservation> {
        validate_reservation(&draft)?;

        let mut memo = draft.memo.trim().to_string();
        if memo.chars().count() > MAX_MEMO_LENGTH {
            memo = memo.chars().take(MAX_MEMO_LENGTH).collect();
        }

        let reservation = Reservation {
            id: self.entries.len() as u64 + 1,
            date: draft.date.trim().to_string(),
            time: draft.time.trim().to_string(),
            name: draft.name.trim().to_string(),
            phone: normalize_phone(&draft.phone),
            birth: draft.birth.trim().to_string(),
            gender: draft.gender.trim().to_string(),
            visit_type: draft.visit_type.trim().to_string(),
            memo,
            created_at: now_minute_stamp(),
        };

        self.entries.push(reservation.clone());
        if self.entries.len() > MAX_RESERVATIONS {
            let excess = self.entries.len() - MAX_RESERVATIONS;
            self.entries.drain(..excess);
        }

        Ok(reservation)
    }

    /// Reservations matching the given identity, newest first.
    ///
    /// All three of name, phone (compared after digit normalization), and
    /// birth date must match exactly.
    pub fn find(&self, name: &str, phone: &str, birth: &str) -> Vec<Reservation> {
        let name = name.trim();
        let phone = normalize_phone(phone);
        let birth = birth.trim();

        self.entries
            .iter()
            .filter(|r| r.name == name && r.phone == phone && r.birth == birth)
            .rev()
            .cloned()
            .collect()
    }

    /// All reservations, oldest first.
    pub fn entries(&self) -> &[Reservation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
