//! fencesite_core - functional core for the fence-contractor directory site.
//!
//! Everything in this crate is free of I/O: formatting helpers for listing
//! pages, sitemap pagination and rendering, contractor dataset parsing and
//! diagnostics, and the traits the server implements for the feed, the cache
//! and the clock.

pub mod cache;
pub mod clock;
pub mod dataset;
pub mod listing;
pub mod sitemap;
