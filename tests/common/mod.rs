//! Common test helpers shared across the integration suites.

use std::path::PathBuf;

use figvivo::vivo::{map_record, Fragment, MappingConfig};
use figvivo::{StaticSource, WorkRecord};

/// Path of a file under `tests/data`.
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// The saved `vivo16` search results, as full records.
#[allow(dead_code)]
pub fn vivo16_records() -> Vec<WorkRecord> {
    let text = std::fs::read_to_string(data_path("vivo16_articles.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// A static source over the saved `vivo16` records.
#[allow(dead_code)]
pub fn vivo16_source() -> StaticSource {
    StaticSource::from_json_file(data_path("vivo16_articles.json")).unwrap()
}

/// Builds a record from inline JSON.
#[allow(dead_code)]
pub fn record(value: serde_json::Value) -> WorkRecord {
    WorkRecord::from_value(value).unwrap()
}

/// Maps a record with the default configuration, expecting a fragment.
#[allow(dead_code)]
pub fn map_default(record: &WorkRecord) -> Fragment {
    map_record(record, &MappingConfig::default()).expect("record should map")
}
