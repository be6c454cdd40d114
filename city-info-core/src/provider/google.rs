use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    error::LookupError,
    model::{Coordinates, truncate_elevation},
    provider::{endpoint, fetch, parse_json, truncate_body},
};

use super::{ElevationLookup, TimezoneLookup};

const TIMEZONE_SERVICE: &str = "Google timezone";
const ELEVATION_SERVICE: &str = "Google elevation";
const TIMEZONE_PATH: &str = "/maps/api/timezone/json";
const ELEVATION_PATH: &str = "/maps/api/elevation/json";

/// Timezone and elevation from the Google Maps web services.
#[derive(Debug, Clone)]
pub struct GoogleMapsProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl GoogleMapsProvider {
    pub fn new(api_key: String, base_url: String, http: Client) -> Self {
        Self {
            api_key,
            base_url,
            http,
        }
    }

    async fn get(
        &self,
        service: &'static str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<String, LookupError> {
        let url = endpoint(&self.base_url, path);
        let request = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(query);

        let (status, body) = fetch(service, request).await?;

        if status != StatusCode::OK {
            return Err(LookupError::LookupFailed {
                service,
                status,
                body: truncate_body(&body),
            });
        }

        debug!("{service} response: {body}");
        Ok(body)
    }
}

// Google answers 200 even for denied keys; the detail is in `status`/`errorMessage`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GmTimezoneResponse {
    time_zone_name: Option<String>,
    status: Option<String>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GmElevationResult {
    elevation: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GmElevationResponse {
    #[serde(default)]
    results: Vec<GmElevationResult>,
    status: Option<String>,
    error_message: Option<String>,
}

fn provider_reason(status: Option<String>, message: Option<String>, fallback: &str) -> String {
    match (status, message) {
        (Some(s), Some(m)) => format!("{s}: {m}"),
        (Some(s), None) => s,
        (None, Some(m)) => m,
        (None, None) => fallback.to_string(),
    }
}

#[async_trait]
impl TimezoneLookup for GoogleMapsProvider {
    async fn timezone(&self, at: Coordinates, timestamp: i64) -> Result<String, LookupError> {
        let location = at.to_string();
        let timestamp = timestamp.to_string();

        let body = self
            .get(
                TIMEZONE_SERVICE,
                TIMEZONE_PATH,
                &[("location", location.as_str()), ("timestamp", timestamp.as_str())],
            )
            .await?;

        let parsed: GmTimezoneResponse = parse_json(TIMEZONE_SERVICE, &body)?;

        parsed
            .time_zone_name
            .ok_or_else(|| LookupError::InvalidResponse {
                service: TIMEZONE_SERVICE,
                reason: provider_reason(
                    parsed.status,
                    parsed.error_message,
                    "missing timeZoneName",
                ),
            })
    }
}

#[async_trait]
impl ElevationLookup for GoogleMapsProvider {
    async fn elevation(&self, at: Coordinates) -> Result<i64, LookupError> {
        let locations = at.to_string();

        let body = self
            .get(
                ELEVATION_SERVICE,
                ELEVATION_PATH,
                &[("locations", locations.as_str())],
            )
            .await?;

        let parsed: GmElevationResponse = parse_json(ELEVATION_SERVICE, &body)?;

        match parsed.results.first() {
            Some(first) => Ok(truncate_elevation(first.elevation)),
            None => Err(LookupError::InvalidResponse {
                service: ELEVATION_SERVICE,
                reason: provider_reason(
                    parsed.status,
                    parsed.error_message,
                    "no elevation results",
                ),
            }),
        }
    }
}
