//! Core domain entities.
//!
//! The service has a single entity, [`UrlRecord`]. Creation input is kept in a
//! separate [`NewUrl`] struct so that store-assigned fields (id, counters,
//! timestamps) can never be supplied by callers.

pub mod url;

pub use url::{NewUrl, UrlRecord};
