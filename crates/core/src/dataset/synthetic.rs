//! Synthetic contractor data used when the real dataset is unreachable.
//!
//! These functions have no side effects and produce the same records on
//! every call, so pages rendered from them are stable.

use serde_json::json;

use super::ContractorRecord;

/// Size of the stand-in dataset used when no fetch succeeds.
pub const SYNTHETIC_DATASET_SIZE: usize = 4000;

/// Number of contractor URLs listed by the fallback sitemap.
pub const FALLBACK_SITEMAP_SIZE: usize = 500;

/// Placeholder records `dummy-1..=count`.
///
/// # Example
///
/// ```
/// use fencesite_core::dataset::synthetic_contractors;
///
/// let records = synthetic_contractors(2);
/// assert_eq!(records[1]["unique_id"], "dummy-2");
/// assert_eq!(records[1]["business_name"], "Dummy Contractor 2");
/// ```
pub fn synthetic_contractors(count: usize) -> Vec<ContractorRecord> {
    (1..=count)
        .map(|n| {
            json!({
                "unique_id": format!("dummy-{n}"),
                "business_name": format!("Dummy Contractor {n}"),
            })
        })
        .collect()
}

/// Identifiers `unique_id_1..=count` listed by the fallback sitemap.
pub fn fallback_contractor_ids(count: usize) -> impl Iterator<Item = String> {
    (1..=count).map(|n| format!("unique_id_{n}"))
}
