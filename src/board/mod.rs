//! Board module for MOREDENT.
//!
//! This module provides the JSON-file-backed post boards:
//! - Post model shared by the consultation, notice, and news boards
//! - Persistence backends behind the [`StoreBackend`] trait
//! - Listing queries (search, sort, pagination)
//! - The [`BoardStore`] operations: append, remove, list, preview, lookup

mod post;
mod query;
mod storage;
mod store;

pub use post::{BoardKind, NewPost, Post, PENDING_STATUS};
pub use query::{paginate, ListQuery, Page, SortOrder, PAGE_SIZE};
pub use storage::{JsonFileStore, MemoryStore, StoreBackend, StoreData};
pub use store::BoardStore;
