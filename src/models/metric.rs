// One monitored series: samples plus per-series display attributes

use serde::{Deserialize, Deserializer, Serialize};

/// Display attributes of a series, as sent by the monitoring API (`ds_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DsData {
    pub ds_color_line: String,
    #[serde(default)]
    pub ds_color_area: Option<String>,
    #[serde(default)]
    pub ds_transparency: Option<f64>,
    #[serde(default)]
    pub ds_filled: bool,
    /// Present (any value) means the series is drawn below the axis.
    #[serde(default, deserialize_with = "loose_string")]
    pub ds_invert: Option<String>,
    /// `"1"` marks the series as stacked.
    #[serde(default, deserialize_with = "loose_string")]
    pub ds_stack: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub ds_order: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub metric: String,
    pub legend: String,
    #[serde(default)]
    pub unit: String,
    /// Samples aligned with `GraphData::times`; `null` is an absent sample.
    #[serde(default)]
    pub data: Vec<Option<f64>>,
    pub ds_data: DsData,
}

/// The API is not consistent about flag types: `"1"`, `1`, `true` and `null` all occur.
/// Numbers are kept as their decimal text; `false` is treated like `null`.
fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) => None,
        Some(serde_json::Value::Bool(true)) => Some("1".to_string()),
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}
