mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{sitemap_key, SITEMAP_KEY_PREFIX};
pub use serialization::{deserialize_sitemap, serialize_sitemap, SerializationError};
pub use traits::Cache;
