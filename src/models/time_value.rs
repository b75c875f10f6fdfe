// Pivoted record: one timestamp, metric key -> value

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Wire name of the timestamp field; no metric may use it as its key.
pub const TIME_TICK: &str = "timeTick";

/// Serializes flat: `{"timeTick": "...", "<metric>": <value>, ...}`.
/// A metric with no value at this timestamp has no key at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeValue {
    #[serde(rename = "timeTick")]
    pub time_tick: String,
    #[serde(flatten)]
    pub values: IndexMap<String, f64>,
}

impl TimeValue {
    pub fn new(time_tick: impl Into<String>) -> Self {
        Self {
            time_tick: time_tick.into(),
            values: IndexMap::new(),
        }
    }

    /// Builder-style insert, keeps first-insertion key order.
    pub fn with(mut self, metric: impl Into<String>, value: f64) -> Self {
        self.values.insert(metric.into(), value);
        self
    }

    pub fn get(&self, metric: &str) -> Option<f64> {
        self.values.get(metric).copied()
    }
}
