// Stacked-area support: which lines stack, in what order, and their summed values.

use super::values_for_metric;
use crate::models::{Line, TimeValue};

/// Lines with a stack order, ascending by it. Ties keep their input order.
pub fn get_sorted_stacked_lines(lines: &[Line]) -> Vec<Line> {
    let mut stacked: Vec<Line> = lines.iter().filter(|line| line.is_stacked()).cloned().collect();
    stacked.sort_by_key(|line| line.stack_order);
    stacked
}

pub fn get_inverted_stacked_lines(lines: &[Line]) -> Vec<Line> {
    let inverted: Vec<Line> = lines.iter().filter(|line| line.is_inverted()).cloned().collect();
    get_sorted_stacked_lines(&inverted)
}

pub fn get_not_inverted_stacked_lines(lines: &[Line]) -> Vec<Line> {
    let regular: Vec<Line> = lines.iter().filter(|line| !line.is_inverted()).cloned().collect();
    get_sorted_stacked_lines(&regular)
}

pub fn has_unit_stacked_lines(lines: &[Line], unit: &str) -> bool {
    lines.iter().any(|line| line.is_stacked() && line.unit == unit)
}

/// Per-record sum of the lines' values. With no lines every sum is 0; a line missing a
/// value at some record makes that record's sum NaN.
pub fn get_stacked_metric_values(lines: &[Line], time_series: &[TimeValue]) -> Vec<f64> {
    if lines.is_empty() {
        return vec![0.0; time_series.len()];
    }
    let series: Vec<Vec<Option<f64>>> = lines
        .iter()
        .map(|line| values_for_metric(time_series, &line.metric).collect())
        .collect();
    sum_positionally(&series)
}

/// Index-wise sum of several series, truncated to the shortest one. Absent values count as NaN.
pub fn sum_positionally(series: &[Vec<Option<f64>>]) -> Vec<f64> {
    let len = series.iter().map(Vec::len).min().unwrap_or(0);
    (0..len)
        .map(|index| {
            series
                .iter()
                .map(|values| values[index].unwrap_or(f64::NAN))
                .sum::<f64>()
        })
        .collect()
}
