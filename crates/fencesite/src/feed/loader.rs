//! Dataset loading with an alternate path and a synthetic last resort.

use fencesite_core::dataset::{
    parse_contractors, synthetic_contractors, text_preview, ContractorFeed, DataSource,
    FeedResponse, LoadFailure, LoadOutcome, SYNTHETIC_DATASET_SIZE,
};

const LOG_PREVIEW_CHARS: usize = 200;

/// Loads the contractor dataset.
///
/// The primary path wins when it answers 2xx. A 2xx body that is not a JSON
/// array is a hard failure and does not fall through. Anything else tries the
/// alternate path, and when that also fails the synthetic dataset is used.
pub async fn load_contractors(feed: &dyn ContractorFeed) -> LoadOutcome {
    let primary = match fetch_ok(feed, DataSource::Primary).await {
        Ok(response) => {
            return match parse_contractors(&response.body) {
                Ok(records) => {
                    tracing::debug!(
                        source = %DataSource::Primary,
                        count = records.len(),
                        sample = %text_preview(&response.body, LOG_PREVIEW_CHARS),
                        "Loaded contractor dataset"
                    );
                    LoadOutcome::Loaded {
                        records,
                        source: DataSource::Primary,
                    }
                }
                Err(reason) => {
                    tracing::warn!(
                        error = %reason,
                        sample = %text_preview(&response.body, LOG_PREVIEW_CHARS),
                        "Primary contractor dataset is not a JSON array"
                    );
                    LoadOutcome::Failed { reason }
                }
            };
        }
        Err(message) => message,
    };

    tracing::debug!(primary = %primary, "Primary dataset unavailable, trying alternate path");

    let alternate = match fetch_ok(feed, DataSource::Alternate).await {
        Ok(response) => match parse_contractors(&response.body) {
            Ok(records) => {
                tracing::debug!(
                    source = %DataSource::Alternate,
                    count = records.len(),
                    "Loaded contractor dataset"
                );
                return LoadOutcome::Loaded {
                    records,
                    source: DataSource::Alternate,
                };
            }
            Err(reason) => reason.to_string(),
        },
        Err(message) => message,
    };

    let reason = LoadFailure::Unavailable { primary, alternate };
    tracing::warn!(
        error = %reason,
        count = SYNTHETIC_DATASET_SIZE,
        "Using synthetic contractor dataset"
    );

    LoadOutcome::Degraded {
        records: synthetic_contractors(SYNTHETIC_DATASET_SIZE),
        reason,
    }
}

/// Fetches `source`, describing any failure or non-2xx status as text.
async fn fetch_ok(feed: &dyn ContractorFeed, source: DataSource) -> Result<FeedResponse, String> {
    match feed.fetch(source.path()).await {
        Ok(response) if response.is_success() => Ok(response),
        Ok(response) => {
            tracing::debug!(path = source.path(), status = response.status, "Dataset fetch returned non-success status");
            Err(response.status_line())
        }
        Err(e) => {
            tracing::debug!(path = source.path(), error = %e, "Dataset fetch failed");
            Err(e.to_string())
        }
    }
}
