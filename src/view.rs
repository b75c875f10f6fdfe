// One render pass: everything the chart needs, derived from a GraphData payload.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{GraphData, Line, TimeValue};
use crate::timeseries::{
    get_inverted_stacked_lines, get_line_data, get_line_for_metric, get_max,
    get_metric_values_for_unit, get_min, get_not_inverted_stacked_lines, get_stacked_metric_values,
    get_time_series, get_time_series_for_lines, get_units, has_unit_stacked_lines,
};

/// Y-axis bounds for one unit. `min`/`max` are `None` when the unit has no values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitAxis {
    pub unit: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub stacked: bool,
}

/// Summed stacks, one value per record. Inverted stacks are drawn below the axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackedValues {
    pub regular: Vec<f64>,
    pub inverted: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphView {
    pub title: Option<String>,
    pub time_series: Vec<TimeValue>,
    pub lines: Vec<Line>,
    pub units: Vec<UnitAxis>,
    pub stacked: StackedValues,
}

impl GraphView {
    /// `metrics` restricts the view to those keys (request order); unknown keys are skipped.
    pub fn build(graph_data: &GraphData, metrics: Option<&[String]>) -> Self {
        let all_lines = get_line_data(graph_data);
        let all_series = get_time_series(graph_data);

        let (lines, time_series) = match metrics {
            Some(requested) => {
                let lines: Vec<Line> = requested
                    .iter()
                    .filter_map(|metric| get_line_for_metric(&all_lines, metric))
                    .cloned()
                    .collect();
                let time_series = get_time_series_for_lines(&lines, &all_series);
                (lines, time_series)
            }
            None => (all_lines, all_series),
        };

        let regular_stack = get_not_inverted_stacked_lines(&lines);
        let inverted_stack = get_inverted_stacked_lines(&lines);

        let units = get_units(&lines)
            .into_iter()
            .map(|unit| unit_axis(&lines, &time_series, &regular_stack, unit))
            .collect();

        let stacked = StackedValues {
            regular: stacked_or_empty(&regular_stack, &time_series),
            inverted: stacked_or_empty(&inverted_stack, &time_series),
        };

        debug!(
            timestamps = time_series.len(),
            metrics = graph_data.metrics.len(),
            lines = lines.len(),
            "graph view built"
        );

        Self {
            title: graph_data.title().map(str::to_string),
            time_series,
            lines,
            units,
            stacked,
        }
    }
}

/// An empty stack is reported as no values rather than a row of zeros.
fn stacked_or_empty(stack: &[Line], time_series: &[TimeValue]) -> Vec<f64> {
    if stack.is_empty() {
        return Vec::new();
    }
    get_stacked_metric_values(stack, time_series)
}

fn unit_axis(
    lines: &[Line],
    time_series: &[TimeValue],
    regular_stack: &[Line],
    unit: String,
) -> UnitAxis {
    let mut values = get_metric_values_for_unit(lines, time_series, &unit);
    let stacked = has_unit_stacked_lines(lines, &unit);
    if stacked {
        // The stacked area tops out at the sum, not at any single series.
        let unit_stack: Vec<Line> = regular_stack
            .iter()
            .filter(|line| line.unit == unit)
            .cloned()
            .collect();
        if !unit_stack.is_empty() {
            values.extend(
                get_stacked_metric_values(&unit_stack, time_series)
                    .into_iter()
                    .filter(|value| !value.is_nan()),
            );
        }
    }

    let (min, max) = if values.is_empty() {
        (None, None)
    } else {
        (
            Some(get_min(values.iter().copied())),
            Some(get_max(values.iter().copied())),
        )
    };

    UnitAxis {
        unit,
        min,
        max,
        stacked,
    }
}
