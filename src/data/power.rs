use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

use super::http_client;

pub const POWER_DAILY_POINT_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";

/// Query for one parameter at one point, as received by the proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointQuery {
    pub lat: String,
    pub lon: String,
    pub parameter: String,
    pub start: String,
    pub end: String,
}

/// Talks to NASA POWER directly. Only the proxy uses this.
#[derive(Debug, Clone)]
pub struct PowerClient {
    client: Client,
    base_url: String,
}

impl Default for PowerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerClient {
    pub fn new() -> Self {
        Self::with_base_url(POWER_DAILY_POINT_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(std::time::Duration::from_secs(30)),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the provider's JSON body untouched.
    pub async fn fetch_daily_point(&self, query: &PointQuery) -> Result<Value> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&upstream_params(query))
            .send()
            .await
            .context("POWER request failed")?
            .error_for_status()
            .context("POWER request returned non-success status")?;

        response
            .json()
            .await
            .context("failed to decode POWER payload")
    }
}

fn upstream_params(query: &PointQuery) -> [(&'static str, String); 7] {
    [
        ("parameters", query.parameter.clone()),
        ("community", "RE".to_string()),
        ("longitude", query.lon.clone()),
        ("latitude", query.lat.clone()),
        ("start", compact_date(&query.start)),
        ("end", compact_date(&query.end)),
        ("format", "JSON".to_string()),
    ]
}

/// `2024-01-05` becomes `20240105`, the form POWER expects.
pub fn compact_date(value: &str) -> String {
    value.replace('-', "")
}
