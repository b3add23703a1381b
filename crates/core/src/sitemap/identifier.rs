//! Resolution of a stable URL identifier for untyped contractor records.

use std::fmt;

use serde_json::Value;

/// Field names probed, in order, for a contractor's identifier.
pub const ID_FIELD_PRIORITY: [&str; 7] = [
    "unique_id",
    "id",
    "place_id",
    "business_id",
    "google_place_id",
    "placeId",
    "businessId",
];

/// Read access to the named fields of a record, independent of its schema.
pub trait RecordFields {
    /// Returns the field's value when it is present and holds a string.
    fn string_field(&self, name: &str) -> Option<&str>;

    /// Returns true when the field is present, whatever its type.
    fn has_field(&self, name: &str) -> bool;
}

impl RecordFields for Value {
    fn string_field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    fn has_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Identifier of a contractor record, used as its `/contractor/<id>` slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractorId<'a> {
    /// Taken from a field of the record.
    Field { field: &'static str, value: &'a str },
    /// No usable field; derived from the zero-based position in the dataset.
    Positional { index: usize },
}

impl fmt::Display for ContractorId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractorId::Field { value, .. } => f.write_str(value),
            ContractorId::Positional { index } => write!(f, "item-{}", index + 1),
        }
    }
}

/// Resolves a record's identifier by probing `priority` in order.
///
/// The first field that holds a non-empty string wins. When none does, the
/// identifier falls back to `item-<index + 1>`.
///
/// # Example
///
/// ```
/// use fencesite_core::sitemap::{resolve_contractor_id, ContractorId, ID_FIELD_PRIORITY};
/// use serde_json::json;
///
/// let record = json!({ "id": 42, "place_id": "ChIJ123" });
/// let id = resolve_contractor_id(&record, 0, &ID_FIELD_PRIORITY);
/// assert_eq!(id, ContractorId::Field { field: "place_id", value: "ChIJ123" });
///
/// let anonymous = json!({ "name": "Acme Fencing" });
/// assert_eq!(resolve_contractor_id(&anonymous, 4, &ID_FIELD_PRIORITY).to_string(), "item-5");
/// ```
pub fn resolve_contractor_id<'a, R>(
    record: &'a R,
    index: usize,
    priority: &[&'static str],
) -> ContractorId<'a>
where
    R: RecordFields + ?Sized,
{
    priority
        .iter()
        .find_map(|&field| {
            record
                .string_field(field)
                .filter(|value| !value.is_empty())
                .map(|value| ContractorId::Field { field, value })
        })
        .unwrap_or(ContractorId::Positional { index })
}

/// Resolves a record's identifier with [`ID_FIELD_PRIORITY`] and renders it.
pub fn contractor_id<R>(record: &R, index: usize) -> String
where
    R: RecordFields + ?Sized,
{
    resolve_contractor_id(record, index, &ID_FIELD_PRIORITY).to_string()
}
