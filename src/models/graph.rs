// Root graph payload: shared time axis, metrics and the global options bag

use serde::{Deserialize, Serialize};

use super::Metric;

/// Graph-wide options. Only the limits are interpreted; everything else is carried as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<u32>,
    #[serde(
        rename = "lower-limit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub lower_limit: Option<f64>,
    #[serde(
        rename = "upper-limit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub upper_limit: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub times: Vec<String>,
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub global: Option<GlobalConfig>,
}

impl GraphData {
    /// Values strictly below this are dropped from the pivoted series.
    pub fn lower_limit(&self) -> Option<f64> {
        self.global.as_ref().and_then(|g| g.lower_limit)
    }

    pub fn title(&self) -> Option<&str> {
        self.global.as_ref().and_then(|g| g.title.as_deref())
    }
}
