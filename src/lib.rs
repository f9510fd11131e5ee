//! MOREDENT - core library for a dental clinic website.
//!
//! This crate owns the data layer behind the clinic's pages:
//! - JSON-file-backed boards (consultation requests, notices, news) with
//!   search, sorting, and pagination
//! - A session-scoped reservation book for the calendar booking page
//! - A holiday calendar service with a remote source and per-year caching
//!
//! Routing, templates, sessions, and authentication live in the web layer
//! that consumes this crate.

pub mod board;
pub mod config;
pub mod datetime;
pub mod error;
pub mod holiday;
pub mod logging;
pub mod reserve;
pub mod text;
pub mod validation;

pub use board::{
    BoardKind, BoardStore, JsonFileStore, ListQuery, MemoryStore, NewPost, Page, Post, SortOrder,
    StoreBackend, StoreData, PAGE_SIZE, PENDING_STATUS,
};
pub use config::Config;
pub use error::{MoredentError, Result};
pub use holiday::{
    expand_ranges, HolidayCalendar, HolidayFetcher, HolidayRange, HolidayService,
    DEFAULT_HOLIDAY_LABEL,
};
pub use reserve::{NewReservation, Reservation, ReservationBook, MAX_RESERVATIONS};
pub use text::{mask_name, normalize_phone};
pub use validation::{FieldError, ValidationErrors, MIN_CONTENT_LENGTH};
