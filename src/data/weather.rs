use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;

use super::{DEFAULT_BACKEND_URL, endpoint, http_client};
use crate::{
    domain::{DailySeries, Location, Parameter, series::parse_compact_date},
    error::UpstreamDataError,
};

/// Fetches daily parameter series through the backend proxy.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(std::time::Duration::from_secs(30)),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_series(
        &self,
        location: &Location,
        parameter: &Parameter,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailySeries, UpstreamDataError> {
        let response = self
            .client
            .get(endpoint(&self.base_url, "/api/weather"))
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("parameter", parameter.id.clone()),
                ("start", start.format("%Y-%m-%d").to_string()),
                ("end", end.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .await
            .map_err(UpstreamDataError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamDataError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(UpstreamDataError::Transport)?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|err| UpstreamDataError::Malformed(format!("body is not JSON: {err}")))?;
        parse_power_series(&payload, &parameter.id)
    }
}

/// Extracts `properties.parameter.<id>` from a POWER daily point payload.
/// Values equal to `header.fill_value` are treated as missing.
pub fn parse_power_series(payload: &Value, parameter_id: &str) -> Result<DailySeries, UpstreamDataError> {
    let block = payload
        .pointer("/properties/parameter")
        .and_then(|parameters| parameters.get(parameter_id))
        .ok_or_else(|| {
            UpstreamDataError::Malformed(format!("missing properties.parameter.{parameter_id}"))
        })?;
    let entries = block.as_object().ok_or_else(|| {
        UpstreamDataError::Malformed(format!("parameter block {parameter_id} is not an object"))
    })?;
    let fill_value = payload.pointer("/header/fill_value").and_then(Value::as_f64);

    let mut series = DailySeries::new();
    for (key, raw) in entries {
        let date = parse_compact_date(key)
            .ok_or_else(|| UpstreamDataError::Malformed(format!("bad date key '{key}'")))?;
        let value = numeric_value(raw).filter(|v| Some(*v) != fill_value);
        series.insert(date, value);
    }
    Ok(series)
}

/// Numeric strings are accepted; anything else unreadable counts as missing.
fn numeric_value(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}
