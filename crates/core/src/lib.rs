//! Domain building blocks for the article service.
//!
//! This crate has no I/O: it holds the shared error type and the translation
//! of request query parameters into a [`query::QueryDescriptor`].

pub mod error;
pub mod query;
