//! Assertion helpers for tests.

use colour_census::models::ColorRecord;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::path::Path;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Parse a JSON record file
pub fn read_record(path: &Path) -> HashMap<String, ColorRecord> {
    let json = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("Invalid record in {}: {e}\n{json}", path.display()))
}

/// Assert a record entry has the expected count, percentage and color
pub fn assert_entry(
    record: &HashMap<String, ColorRecord>,
    key: &str,
    count: u64,
    percentage: f64,
    rgb: [u8; 3],
) {
    let entry = record
        .get(key)
        .unwrap_or_else(|| panic!("Missing key {key:?}, have {:?}", record.keys()));
    assert_eq!(
        entry,
        &ColorRecord {
            count,
            percentage,
            rgb
        },
        "Entry {key:?}"
    );
}

/// Assert counts sum to `total` and percentages to 1
pub fn assert_record_sums(record: &HashMap<String, ColorRecord>, total: u64) {
    let count: u64 = record.values().map(|r| r.count).sum();
    assert_eq!(count, total, "Counts should sum to the surviving pixels");
    if total > 0 {
        let pct: f64 = record.values().map(|r| r.percentage).sum();
        assert!((pct - 1.0).abs() < 1e-9, "Percentages sum to {pct}");
    }
}

/// Assert the file is a PNG of the given size
pub fn assert_png_file(path: &Path, width: u32, height: u32) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG at {}, got {} bytes starting with {:?}",
        path.display(),
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (width, height));
}
