use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::LookupError,
    model::{Coordinates, CurrentConditions, round_temperature},
    provider::{endpoint, fetch, parse_json, truncate_body},
};

use super::WeatherLookup;

const SERVICE: &str = "OpenWeatherMap";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String, http: Client) -> Self {
        Self {
            api_key,
            base_url,
            http,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    coord: OwCoord,
    name: String,
    main: OwMain,
}

#[async_trait]
impl WeatherLookup for OpenWeatherProvider {
    async fn current_conditions(&self, zip: &str) -> Result<CurrentConditions, LookupError> {
        let url = endpoint(&self.base_url, CURRENT_WEATHER_PATH);
        let zip_query = format!("{zip},us");

        let request = self.http.get(&url).query(&[
            ("APPID", self.api_key.as_str()),
            ("zip", zip_query.as_str()),
            ("units", "imperial"),
        ]);

        let (status, body) = fetch(SERVICE, request).await?;

        if status != reqwest::StatusCode::OK {
            error!("ZIP {zip} not found: {SERVICE} answered {status}: {}", truncate_body(&body));
            return Err(LookupError::LocationNotFound {
                zip: zip.to_string(),
            });
        }

        debug!("{SERVICE} response: {body}");

        let parsed: OwCurrentResponse = parse_json(SERVICE, &body)?;

        Ok(CurrentConditions {
            coordinates: Coordinates::new(parsed.coord.lat, parsed.coord.lon),
            place_name: parsed.name,
            temperature_f: round_temperature(parsed.main.temp),
        })
    }
}
