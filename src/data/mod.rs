pub mod air_quality;
pub mod power;
pub mod weather;

use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

pub(crate) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}
