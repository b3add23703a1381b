mod diagnostics;
mod error;
mod parse;
mod synthetic;
mod traits;
mod types;

pub use diagnostics::{
    available_fields, diagnose, id_field_stats, recommended_route_pattern, DebugReport, FieldStat,
};
pub use error::{FeedError, LoadFailure};
pub use parse::{parse_contractors, text_preview};
pub use synthetic::{
    fallback_contractor_ids, synthetic_contractors, FALLBACK_SITEMAP_SIZE, SYNTHETIC_DATASET_SIZE,
};
pub use traits::ContractorFeed;
pub use types::{
    ContractorRecord, DataSource, FeedResponse, LoadOutcome, ALTERNATE_PATH, PRIMARY_PATH,
};
