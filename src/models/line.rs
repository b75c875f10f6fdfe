// Display descriptor derived from a Metric

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub metric: String,
    pub name: String,
    pub color: String,
    pub line_color: String,
    pub area_color: Option<String>,
    pub transparency: Option<f64>,
    pub filled: bool,
    pub invert: Option<String>,
    pub unit: String,
    pub display: bool,
    /// Set by the rendering layer; always `None` when derived.
    pub highlight: Option<bool>,
    /// `Some` only for stacked series. `Some(0)` is a real position, not "unstacked".
    pub stack_order: Option<u32>,
}

impl Line {
    pub fn is_stacked(&self) -> bool {
        self.stack_order.is_some()
    }

    pub fn is_inverted(&self) -> bool {
        self.invert.is_some()
    }
}
