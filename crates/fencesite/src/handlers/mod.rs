pub mod debug;
pub mod error;
pub mod fallback;
pub mod health;
pub mod sitemap;
pub mod sitemap_index;

pub use error::AppError;
