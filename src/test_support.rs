use chrono::NaiveDate;

use crate::{
    analysis::{ComparisonReport, analyze, compose},
    cli::DashboardArgs,
    data::DEFAULT_BACKEND_URL,
    domain::{DailySeries, Location, Parameter},
};

pub(crate) fn dashboard_args() -> DashboardArgs {
    DashboardArgs {
        locations: Vec::new(),
        parameter: "T2M".to_string(),
        start: "2024-06-01".to_string(),
        end: "2024-06-03".to_string(),
        threshold: Some(30.0),
        backend_url: DEFAULT_BACKEND_URL.to_string(),
        theme: None,
        export_path: None,
        one_shot: false,
    }
}

pub(crate) fn location(lat: f64, lon: f64) -> Location {
    Location::new(lat, lon).expect("valid test location")
}

pub(crate) fn june_series(values: &[Option<f64>]) -> DailySeries {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid fixed date");
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| (start + chrono::Duration::days(idx as i64), *value))
        .collect()
}

/// Two locations over 2024-06-01..03 with threshold 30.
pub(crate) fn sample_report() -> ComparisonReport {
    let first = june_series(&[Some(29.0), Some(31.0), None]);
    let second = june_series(&[Some(32.0), Some(33.0), Some(34.0)]);
    let threshold = Some(30.0);

    compose(
        Parameter::from_id("T2M"),
        threshold,
        first.dates(),
        vec![
            analyze(location(12.9716, 77.5946), &first, threshold)
                .with_air_quality(Some("Good".to_string())),
            analyze(location(28.6139, 77.209), &second, threshold),
        ],
        vec![first.values(), second.values()],
    )
}
