//! retina-store
//!
//! Session-scoped, append-only record store and its CSV export.

pub mod error;
pub mod persist;
pub mod store;
pub mod table;
