//! Cache backend implementations.
//!
//! This module provides the concrete implementation of the cache trait
//! defined in `fencesite_core::cache`.

mod memory;

pub use memory::MemoryCache;
