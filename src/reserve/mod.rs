//! Reservation module for MOREDENT.
//!
//! Calendar bookings are a demo feature scoped to one visitor: the web
//! layer keeps a [`ReservationBook`] in the session and calls into it for
//! booking and lookup.

mod book;
mod types;

pub use book::{ReservationBook, MAX_MEMO_LENGTH, MAX_RESERVATIONS};
pub use types::{NewReservation, Reservation};
