use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{DEFAULT_BACKEND_URL, endpoint, http_client};
use crate::domain::Location;

/// Best-effort air-quality summaries from the backend proxy.
#[derive(Debug, Clone)]
pub struct AirQualityClient {
    client: Client,
    base_url: String,
}

impl Default for AirQualityClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct AirQualityResponse {
    summary: Option<Value>,
}

impl AirQualityResponse {
    /// The backend may send either friendly text or a bare numeric average.
    fn into_summary(self) -> Option<String> {
        match self.summary? {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }
}

impl AirQualityClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(std::time::Duration::from_secs(10)),
            base_url: base_url.into(),
        }
    }

    /// Never fails: any problem is logged and reported as "no summary".
    pub async fn fetch_summary(
        &self,
        location: &Location,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Option<String> {
        match self.request(location, start, end).await {
            Ok(summary) => summary.filter(|text| !text.trim().is_empty()),
            Err(err) => {
                debug!(location = %location.label(), "air quality unavailable: {err:#}");
                None
            }
        }
    }

    async fn request(
        &self,
        location: &Location,
        start: NaiveDate,
        end: NaiveDate,
    ) -> reqwest::Result<Option<String>> {
        let payload: AirQualityResponse = self
            .client
            .get(endpoint(&self.base_url, "/api/aq"))
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("start", start.format("%Y-%m-%d").to_string()),
                ("end", end.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(payload.into_summary())
    }
}
