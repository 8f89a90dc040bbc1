use census_engine::AggregationResult;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// One entry of a census record file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub count: u64,
    pub percentage: f64,
    pub rgb: [u8; 3],
}

/// Serializable view of an aggregation result.
///
/// Serializes as a JSON object keyed by each entry's display key, in the
/// result's key order.
pub struct CensusRecord<'a>(pub &'a AggregationResult);

impl Serialize for CensusRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            let record = ColorRecord {
                count: entry.count,
                percentage: entry.percentage,
                rgb: entry.rgb.to_bytes(),
            };
            map.serialize_entry(&entry.key.to_string(), &record)?;
        }
        map.end()
    }
}

/// Render the record as pretty JSON with four-space indentation
pub fn to_json_pretty(result: &AggregationResult) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    CensusRecord(result).serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
