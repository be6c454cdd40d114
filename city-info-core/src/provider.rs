use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use std::{fmt::Debug, time::Duration};

use crate::{
    error::LookupError,
    model::{Coordinates, CurrentConditions},
};

pub mod google;
pub mod openweather;

pub use google::GoogleMapsProvider;
pub use openweather::OpenWeatherProvider;

/// ZIP code -> coordinates, place name and current temperature.
#[async_trait]
pub trait WeatherLookup: Send + Sync + Debug {
    async fn current_conditions(&self, zip: &str) -> Result<CurrentConditions, LookupError>;
}

/// Coordinates at a given instant -> IANA timezone name.
#[async_trait]
pub trait TimezoneLookup: Send + Sync + Debug {
    /// `timestamp` is Unix seconds; offsets depend on it because of DST.
    async fn timezone(&self, at: Coordinates, timestamp: i64) -> Result<String, LookupError>;
}

/// Coordinates -> ground elevation in whole meters.
#[async_trait]
pub trait ElevationLookup: Send + Sync + Debug {
    async fn elevation(&self, at: Coordinates) -> Result<i64, LookupError>;
}

/// One client shared by every provider so connections get pooled.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, LookupError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(LookupError::Client)
}

/// Joins a configured base URL and an API path.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Sends the request and reads the whole body, whatever the status.
pub(crate) async fn fetch(
    service: &'static str,
    request: RequestBuilder,
) -> Result<(StatusCode, String), LookupError> {
    let res = request
        .send()
        .await
        .map_err(|source| LookupError::Transport { service, source })?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| LookupError::Transport { service, source })?;

    Ok((status, body))
}

pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(
    service: &'static str,
    body: &str,
) -> Result<T, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::InvalidResponse {
        service,
        reason: e.to_string(),
    })
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
