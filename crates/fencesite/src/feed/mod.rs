//! Contractor feed implementations and the dataset loader.

mod http;
#[cfg(test)]
mod inmemory;
mod loader;

pub use http::HttpFeed;
#[cfg(test)]
pub use inmemory::InMemoryFeed;
pub use loader::load_contractors;
