//! Core content for Campus Buzz
//!
//! This crate holds the feed item model and the read-only catalog the
//! swipeable card feed navigates over.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;

pub use catalog::{Catalog, CatalogError, FeedItem};
