//! HTTP proxy in front of NASA POWER.
//!
//! Clients call `/api/weather` with ISO dates; the proxy rewrites the request
//! into the provider's query format and hands back the provider's JSON as is.

mod error;

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use error::ProxyError;

use crate::data::power::{PointQuery, PowerClient};

#[derive(Clone)]
pub struct ProxyState {
    upstream: Arc<PowerClient>,
}

impl ProxyState {
    pub fn new(upstream: PowerClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/weather", get(weather))
        .route("/api/aq", get(air_quality))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, upstream: PowerClient) -> Result<()> {
    info!(upstream = upstream.base_url(), "starting proxy");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr} failed"))?;
    info!("server listening on {}", listener.local_addr()?);
    axum::serve(listener, router(ProxyState::new(upstream)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("proxy server stopped unexpectedly")
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}

async fn index() -> Json<Value> {
    Json(json!({
        "message": "ClimateCompare API Server",
        "endpoints": ["/api/weather", "/api/aq"],
        "status": "running",
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct WeatherParams {
    lat: Option<String>,
    lon: Option<String>,
    parameter: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

impl WeatherParams {
    fn into_point_query(self) -> Result<PointQuery, ProxyError> {
        let missing = || ProxyError::MissingParameters("Missing lat, lon, parameter, start, end");
        Ok(PointQuery {
            lat: present(self.lat).ok_or_else(missing)?,
            lon: present(self.lon).ok_or_else(missing)?,
            parameter: present(self.parameter).ok_or_else(missing)?,
            start: present(self.start).ok_or_else(missing)?,
            end: present(self.end).ok_or_else(missing)?,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

async fn weather(
    State(state): State<ProxyState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<Value>, ProxyError> {
    let query = params.into_point_query()?;
    let payload = state
        .upstream
        .fetch_daily_point(&query)
        .await
        .map_err(ProxyError::Upstream)?;
    Ok(Json(payload))
}

#[derive(Debug, Default, Deserialize)]
pub struct AirQualityParams {
    lat: Option<String>,
    lon: Option<String>,
}

// No keyless air-quality source exists for arbitrary points; answer with a
// placeholder summary until an Earthdata-backed source is wired in.
async fn air_quality(Query(params): Query<AirQualityParams>) -> Result<Json<Value>, ProxyError> {
    let (Some(lat), Some(lon)) = (present(params.lat), present(params.lon)) else {
        return Err(ProxyError::MissingParameters("Missing lat, lon"));
    };
    Ok(Json(json!({
        "summary": format!(
            "Air quality data for ({lat}, {lon}) requires NASA Earthdata authentication. Feature coming soon."
        ),
        "status": "placeholder",
    })))
}
