// Time-series pipeline: pivots per-metric sample arrays into per-timestamp records
// and derives the views the chart layer needs. Everything here is pure; inputs are
// never mutated and bad samples degrade to absent/NaN instead of failing.

mod stacking;
mod units;

pub use stacking::{
    get_inverted_stacked_lines, get_not_inverted_stacked_lines, get_sorted_stacked_lines,
    get_stacked_metric_values, has_unit_stacked_lines, sum_positionally,
};
pub use units::{get_metric_values_for_lines, get_metric_values_for_unit, get_units};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexMap;

use crate::models::{DsData, GraphData, Line, Metric, TIME_TICK, TimeValue};

/// One record per entry of `graph_data.times`, in order. Each record holds every
/// metric's sample at that index; null or out-of-range samples and samples below
/// the configured lower limit are left out. Metrics sharing a key keep the later value,
/// and the limit is applied to that value. A metric keyed like the timestamp is skipped.
pub fn get_time_series(graph_data: &GraphData) -> Vec<TimeValue> {
    let lower_limit = graph_data.lower_limit();
    let metrics: Vec<&Metric> = graph_data
        .metrics
        .iter()
        .filter(|metric| {
            let clashes = metric.metric == TIME_TICK;
            if clashes {
                tracing::warn!(
                    metric = %metric.metric,
                    "metric key clashes with timestamp field, skipped"
                );
            }
            !clashes
        })
        .collect();

    graph_data
        .times
        .iter()
        .enumerate()
        .map(|(index, time_tick)| {
            let mut values: IndexMap<String, f64> = metrics
                .iter()
                .filter_map(|metric| {
                    let value = metric.data.get(index).copied().flatten()?;
                    Some((metric.metric.clone(), value))
                })
                .collect();
            values.retain(|_, value| is_within_lower_limit(*value, lower_limit));
            TimeValue {
                time_tick: time_tick.clone(),
                values,
            }
        })
        .collect()
}

fn is_within_lower_limit(value: f64, lower_limit: Option<f64>) -> bool {
    lower_limit.is_none_or(|limit| value >= limit)
}

pub fn get_line_data(graph_data: &GraphData) -> Vec<Line> {
    graph_data.metrics.iter().map(to_line).collect()
}

fn to_line(metric: &Metric) -> Line {
    let ds = &metric.ds_data;
    Line {
        metric: metric.metric.clone(),
        name: metric.legend.clone(),
        color: ds.ds_color_line.clone(),
        line_color: ds.ds_color_line.clone(),
        area_color: ds.ds_color_area.clone(),
        transparency: ds.ds_transparency,
        filled: ds.ds_filled,
        invert: ds.ds_invert.clone(),
        unit: metric.unit.clone(),
        display: true,
        highlight: None,
        stack_order: stack_order(&metric.metric, ds),
    }
}

/// Parsed `ds_order` for stacked series (missing or empty counts as 0), `None` otherwise.
fn stack_order(metric: &str, ds: &DsData) -> Option<u32> {
    if ds.ds_stack.as_deref() != Some("1") {
        return None;
    }
    let order = ds.ds_order.as_deref().map(str::trim).unwrap_or_default();
    if order.is_empty() {
        return Some(0);
    }
    let digits = leading_digits(order);
    if digits.is_empty() {
        tracing::warn!(metric, ds_order = order, "unparseable stack order, using 0");
        return Some(0);
    }
    match digits.parse::<u32>() {
        Ok(order) => Some(order),
        Err(_) => {
            tracing::warn!(metric, ds_order = order, "stack order overflows, using u32::MAX");
            Some(u32::MAX)
        }
    }
}

/// "12px" -> "12"; the API occasionally appends junk to numeric fields.
fn leading_digits(s: &str) -> &str {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    &s[..end]
}

/// Smallest value; `+inf` for an empty sequence.
pub fn get_min(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(f64::INFINITY, f64::min)
}

/// Largest value; `-inf` for an empty sequence.
pub fn get_max(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(f64::NEG_INFINITY, f64::max)
}

/// Epoch milliseconds of the record's timestamp, `NaN` when it does not parse.
pub fn get_time(time_value: &TimeValue) -> f64 {
    parse_time_tick(&time_value.time_tick).map_or(f64::NAN, |date| date.timestamp_millis() as f64)
}

pub fn get_dates(time_series: &[TimeValue]) -> Vec<Option<DateTime<Utc>>> {
    time_series
        .iter()
        .map(|time_value| parse_time_tick(&time_value.time_tick))
        .collect()
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC) or a bare date.
pub fn parse_time_tick(time_tick: &str) -> Option<DateTime<Utc>> {
    let time_tick = time_tick.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(time_tick) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(time_tick, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(time_tick, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Metric keys of the record, in insertion order.
pub fn get_metrics(time_value: &TimeValue) -> Vec<&str> {
    time_value.values.keys().map(String::as_str).collect()
}

pub fn get_value_for_metric(time_value: &TimeValue) -> impl Fn(&str) -> Option<f64> + '_ {
    move |metric| time_value.get(metric)
}

pub fn get_metric_values(time_value: &TimeValue) -> Vec<f64> {
    let value_of = get_value_for_metric(time_value);
    get_metrics(time_value)
        .into_iter()
        .filter_map(value_of)
        .collect()
}

/// First line drawing `metric`.
pub fn get_line_for_metric<'a>(lines: &'a [Line], metric: &str) -> Option<&'a Line> {
    lines.iter().find(|line| line.metric == metric)
}

/// Keeps only the lines' metrics in every record (in line order); the timestamp is kept.
pub fn get_time_series_for_lines(lines: &[Line], time_series: &[TimeValue]) -> Vec<TimeValue> {
    time_series
        .iter()
        .map(|time_value| TimeValue {
            time_tick: time_value.time_tick.clone(),
            values: lines
                .iter()
                .filter(|line| line.metric != TIME_TICK)
                .filter_map(|line| {
                    time_value
                        .get(&line.metric)
                        .map(|value| (line.metric.clone(), value))
                })
                .collect(),
        })
        .collect()
}

/// Values of `metric` across the series, one entry per record.
pub(crate) fn values_for_metric<'a>(
    time_series: &'a [TimeValue],
    metric: &'a str,
) -> impl Iterator<Item = Option<f64>> + 'a {
    time_series
        .iter()
        .map(move |time_value| get_value_for_metric(time_value)(metric))
}
