// Per-unit grouping of line values (used for y-axis scaling)

use indexmap::IndexSet;

use super::values_for_metric;
use crate::models::{Line, TimeValue};

/// Distinct units, first-occurrence order.
pub fn get_units(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.unit.clone())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Every defined value, across all records, of every line with `unit`. Line-major order.
pub fn get_metric_values_for_unit(
    lines: &[Line],
    time_series: &[TimeValue],
    unit: &str,
) -> Vec<f64> {
    lines
        .iter()
        .filter(|line| line.unit == unit)
        .flat_map(|line| values_for_metric(time_series, &line.metric))
        .flatten()
        .collect()
}

/// Values of every unit group, concatenated in unit order.
pub fn get_metric_values_for_lines(lines: &[Line], time_series: &[TimeValue]) -> Vec<f64> {
    get_units(lines)
        .iter()
        .flat_map(|unit| get_metric_values_for_unit(lines, time_series, unit))
        .collect()
}
