//! Diagnostics over the contractor dataset, served by the sitemap debug
//! endpoint to explain which identifier fields the data actually carries.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{parse_contractors, text_preview, ContractorRecord, FeedError, FeedResponse};
use crate::sitemap::{RecordFields, ID_FIELD_PRIORITY};

/// Fields copied into the `firstItems` sample.
const SAMPLE_FIELDS: [&str; 11] = [
    "unique_id",
    "id",
    "place_id",
    "placeId",
    "business_id",
    "businessId",
    "google_place_id",
    "name",
    "title",
    "business_name",
    "formatted_address",
];

const SAMPLE_RECORDS: usize = 3;
const FIELD_SCAN_RECORDS: usize = 10;
const BODY_PREVIEW_CHARS: usize = 500;

/// Presence of one identifier field across the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStat {
    pub field: &'static str,
    pub count: usize,
    /// `count` as a rounded percentage of the dataset size.
    pub percentage: u32,
    /// Value of the field on the first record that has it.
    pub example: Option<Value>,
}

/// Report returned by the sitemap debug endpoint.
///
/// Fields that do not apply to the outcome of the fetch are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_ok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_valid_json: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_sample: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_items: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_field_stats: Option<Vec<FieldStat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_route_pattern: Option<String>,
    pub sample_route: String,
}

/// Builds the debug report for a fetch of the primary dataset resource.
pub fn diagnose(fetch: Result<&FeedResponse, &FeedError>, origin: &str) -> DebugReport {
    let mut report = DebugReport {
        sample_route: format!("{origin}/contractor/unique_id"),
        ..DebugReport::default()
    };

    let response = match fetch {
        Ok(response) => response,
        Err(e) => {
            report.fetch_error = Some(e.to_string());
            return report;
        }
    };

    report.fetch_status = Some(response.status);
    report.fetch_ok = Some(response.is_success());

    if !response.is_success() {
        report.fetch_error_details = Some(format!(
            "Status: {}, StatusText: {}",
            response.status, response.status_text
        ));
        return report;
    }

    report.data_length = Some(response.body.len());

    let records = match parse_contractors(&response.body) {
        Ok(records) => records,
        Err(e) => {
            report.is_valid_json = Some(false);
            report.parse_error = Some(e.to_string());
            if !response.body.is_empty() {
                report.data_sample = Some(text_preview(&response.body, BODY_PREVIEW_CHARS));
            }
            return report;
        }
    };

    report.is_valid_json = Some(true);
    report.array_length = Some(records.len());

    if records.is_empty() {
        return report;
    }

    let stats = id_field_stats(&records);
    report.recommended_route_pattern = Some(recommended_route_pattern(&stats));
    report.first_items = Some(records.iter().take(SAMPLE_RECORDS).map(sample_fields).collect());
    report.available_fields = Some(available_fields(&records));
    report.id_field_stats = Some(stats);

    report
}

/// Counts how many records carry each identifier field, in priority order.
pub fn id_field_stats(records: &[ContractorRecord]) -> Vec<FieldStat> {
    ID_FIELD_PRIORITY
        .iter()
        .map(|&field| {
            let count = records.iter().filter(|r| r.has_field(field)).count();
            let percentage = if records.is_empty() {
                0
            } else {
                (count as f64 * 100.0 / records.len() as f64).round() as u32
            };
            let example = records.iter().find_map(|r| r.get(field)).cloned();

            FieldStat {
                field,
                count,
                percentage,
                example,
            }
        })
        .collect()
}

/// Sorted union of the keys of the first records.
pub fn available_fields(records: &[ContractorRecord]) -> Vec<String> {
    records
        .iter()
        .take(FIELD_SCAN_RECORDS)
        .filter_map(Value::as_object)
        .flat_map(|object| object.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Route pattern named after the highest-priority field present in the data.
pub fn recommended_route_pattern(stats: &[FieldStat]) -> String {
    match stats.iter().find(|stat| stat.count > 0) {
        Some(stat) => format!("/contractor/[{}]", stat.field),
        None => "/contractor/".to_string(),
    }
}

fn sample_fields(record: &ContractorRecord) -> Map<String, Value> {
    SAMPLE_FIELDS
        .iter()
        .filter_map(|&field| record.get(field).map(|v| (field.to_string(), v.clone())))
        .collect()
}
