#![allow(dead_code)]

use chrono::NaiveDate;
use climate_compare::{
    analysis::{ComparisonReport, ComparisonRequest, analyze, compose},
    cli::DashboardArgs,
    domain::{DailySeries, Location, Parameter},
};
use serde_json::{Value, json};

pub fn bangalore() -> Location {
    Location::new(12.9716, 77.5946).expect("valid location")
}

pub fn delhi() -> Location {
    Location::new(28.6139, 77.209).expect("valid location")
}

/// A POWER daily point body with one parameter block.
pub fn power_payload(parameter: &str, days: &[(&str, Option<f64>)]) -> Value {
    let block: serde_json::Map<String, Value> = days
        .iter()
        .map(|(day, value)| ((*day).to_string(), json!(value)))
        .collect();
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [77.5946, 12.9716, 920.0] },
        "properties": { "parameter": { parameter: block } },
        "header": {
            "title": "NASA/POWER Source Native Resolution Daily Data",
            "fill_value": -999.0
        },
    })
}

pub fn june_request(locations: &[Location], threshold: &str) -> ComparisonRequest {
    ComparisonRequest::new(
        locations,
        Parameter::from_id("T2M"),
        "2024-06-01",
        "2024-06-03",
        threshold,
    )
    .expect("valid request")
}

pub fn june_series(values: &[Option<f64>]) -> DailySeries {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| (start + chrono::Duration::days(idx as i64), *value))
        .collect()
}

/// Bangalore vs Delhi, T2M over 2024-06-01..03, threshold 30.
pub fn june_report() -> ComparisonReport {
    let first = june_series(&[Some(29.0), Some(31.0), None]);
    let second = june_series(&[Some(32.0), Some(33.0), Some(34.0)]);
    let threshold = Some(30.0);
    compose(
        Parameter::from_id("T2M"),
        threshold,
        first.dates(),
        vec![
            analyze(bangalore(), &first, threshold).with_air_quality(Some("Good".to_string())),
            analyze(delhi(), &second, threshold),
        ],
        vec![first.values(), second.values()],
    )
}

pub fn dashboard_args(backend_url: &str) -> DashboardArgs {
    DashboardArgs {
        locations: Vec::new(),
        parameter: "T2M".to_string(),
        start: "2024-06-01".to_string(),
        end: "2024-06-03".to_string(),
        threshold: Some(30.0),
        backend_url: backend_url.to_string(),
        theme: None,
        export_path: None,
        one_shot: false,
    }
}
