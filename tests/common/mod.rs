// Shared test helpers
#![allow(dead_code)]

use perfgraph::models::*;

pub fn ds_data(color: &str) -> DsData {
    DsData {
        ds_color_line: color.into(),
        ds_color_area: None,
        ds_transparency: None,
        ds_filled: false,
        ds_invert: None,
        ds_stack: None,
        ds_order: None,
    }
}

pub fn metric(key: &str, unit: &str, data: &[Option<f64>]) -> Metric {
    Metric {
        metric: key.into(),
        legend: format!("{} legend", key),
        unit: unit.into(),
        data: data.to_vec(),
        ds_data: ds_data("#2ad1d4"),
    }
}

pub fn stacked_metric(key: &str, unit: &str, data: &[Option<f64>], order: Option<&str>) -> Metric {
    let mut m = metric(key, unit, data);
    m.ds_data.ds_stack = Some("1".into());
    m.ds_data.ds_order = order.map(String::from);
    m
}

pub fn graph(times: &[&str], metrics: Vec<Metric>, lower_limit: Option<f64>) -> GraphData {
    GraphData {
        times: times.iter().map(|t| t.to_string()).collect(),
        metrics,
        global: lower_limit.map(|limit| GlobalConfig {
            lower_limit: Some(limit),
            ..Default::default()
        }),
    }
}

pub fn line(metric: &str, unit: &str, stack_order: Option<u32>, invert: bool) -> Line {
    Line {
        metric: metric.into(),
        name: metric.into(),
        color: "#000000".into(),
        line_color: "#000000".into(),
        area_color: None,
        transparency: None,
        filled: false,
        invert: invert.then(|| "1".to_string()),
        unit: unit.into(),
        display: true,
        highlight: None,
        stack_order,
    }
}

pub fn metric_keys(lines: &[Line]) -> Vec<&str> {
    lines.iter().map(|l| l.metric.as_str()).collect()
}
