use std::fmt;

use serde_json::Value;

use super::LoadFailure;

/// One element of the contractor dataset. No schema is enforced.
pub type ContractorRecord = Value;

/// Path of the contractor dataset on the feed origin.
pub const PRIMARY_PATH: &str = "/fence-contractors.json";

/// Path tried when the primary resource cannot be fetched.
pub const ALTERNATE_PATH: &str = "/static/fence-contractors.json";

/// A response from the contractor feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl FeedResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Short description for logs, e.g. `HTTP 404 Not Found`.
    pub fn status_line(&self) -> String {
        if self.status_text.is_empty() {
            format!("HTTP {}", self.status)
        } else {
            format!("HTTP {} {}", self.status, self.status_text)
        }
    }
}

/// Which path the dataset was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Primary,
    Alternate,
}

impl DataSource {
    pub fn path(&self) -> &'static str {
        match self {
            DataSource::Primary => PRIMARY_PATH,
            DataSource::Alternate => ALTERNATE_PATH,
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Result of loading the contractor dataset.
///
/// Degradation is explicit: callers decide whether synthetic records are an
/// acceptable stand-in for the real dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The real dataset.
    Loaded {
        records: Vec<ContractorRecord>,
        source: DataSource,
    },
    /// Synthetic records standing in for an unreachable dataset.
    Degraded {
        records: Vec<ContractorRecord>,
        reason: LoadFailure,
    },
    /// Nothing usable was loaded.
    Failed { reason: LoadFailure },
}

impl LoadOutcome {
    /// Records to paginate over; empty when the load failed.
    pub fn records(&self) -> &[ContractorRecord] {
        match self {
            LoadOutcome::Loaded { records, .. } | LoadOutcome::Degraded { records, .. } => records,
            LoadOutcome::Failed { .. } => &[],
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            LoadOutcome::Loaded { .. } => None,
            LoadOutcome::Degraded { reason, .. } | LoadOutcome::Failed { reason } => Some(reason),
        }
    }

    /// Short tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadOutcome::Loaded { .. } => "loaded",
            LoadOutcome::Degraded { .. } => "degraded",
            LoadOutcome::Failed { .. } => "failed",
        }
    }
}
