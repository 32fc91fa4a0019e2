use chrono::NaiveDate;
use tracing::info;

use super::{ComparisonReport, analyze, compose};
use crate::{
    data::{air_quality::AirQualityClient, weather::WeatherClient},
    domain::{Location, Parameter, series::parse_iso_date},
    error::{RunError, ValidationError},
};

/// A validated request for one comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRequest {
    pub locations: Vec<Location>,
    pub parameter: Parameter,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub threshold: Option<f64>,
}

impl ComparisonRequest {
    /// Validates raw form input. An empty threshold means "no threshold".
    pub fn new(
        locations: &[Location],
        parameter: Parameter,
        start: &str,
        end: &str,
        threshold: &str,
    ) -> Result<Self, ValidationError> {
        if locations.is_empty() {
            return Err(ValidationError::NoLocations);
        }
        if start.trim().is_empty() || end.trim().is_empty() {
            return Err(ValidationError::MissingDates);
        }
        let start_date =
            parse_iso_date(start).ok_or_else(|| ValidationError::InvalidDate(start.to_string()))?;
        let end_date =
            parse_iso_date(end).ok_or_else(|| ValidationError::InvalidDate(end.to_string()))?;
        if start_date > end_date {
            return Err(ValidationError::StartAfterEnd);
        }

        Ok(Self {
            locations: locations.to_vec(),
            parameter,
            start: start_date,
            end: end_date,
            threshold: parse_threshold(threshold)?,
        })
    }
}

pub fn parse_threshold(raw: &str) -> Result<Option<f64>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Some)
        .ok_or_else(|| ValidationError::InvalidThreshold(raw.to_string()))
}

/// Runs the comparison for every location in selection order.
///
/// The first weather failure aborts the run; later locations are not
/// requested. Air-quality failures only blank that location's summary.
pub async fn run_comparison(
    weather: &WeatherClient,
    air_quality: &AirQualityClient,
    request: &ComparisonRequest,
) -> Result<ComparisonReport, RunError> {
    if request.locations.is_empty() {
        return Err(ValidationError::NoLocations.into());
    }

    let mut date_axis = Vec::new();
    let mut analyses = Vec::with_capacity(request.locations.len());
    let mut series = Vec::with_capacity(request.locations.len());

    for (idx, location) in request.locations.iter().enumerate() {
        let daily = weather
            .fetch_series(location, &request.parameter, request.start, request.end)
            .await
            .map_err(|source| RunError::Upstream {
                location: idx + 1,
                source,
            })?;

        if idx == 0 {
            date_axis = daily.dates();
        }
        let summary = air_quality
            .fetch_summary(location, request.start, request.end)
            .await;
        analyses.push(analyze(*location, &daily, request.threshold).with_air_quality(summary));
        series.push(daily.values());
    }

    info!(
        parameter = %request.parameter.id,
        locations = analyses.len(),
        days = date_axis.len(),
        "comparison run complete"
    );

    Ok(compose(
        request.parameter.clone(),
        request.threshold,
        date_axis,
        analyses,
        series,
    ))
}
