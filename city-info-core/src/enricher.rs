use chrono::Utc;
use log::{debug, info};

use crate::{
    config::Config,
    error::LookupError,
    model::LocationRecord,
    provider::{
        ElevationLookup, GoogleMapsProvider, OpenWeatherProvider, TimezoneLookup, WeatherLookup,
        http_client,
    },
};

/// Turns a ZIP code into a [`LocationRecord`] through three dependent lookups.
///
/// Weather runs first because it yields the coordinates. Timezone and elevation
/// only run once it has succeeded. Any failure aborts the whole run and no
/// partial record escapes.
#[derive(Debug)]
pub struct LocationEnricher {
    weather: Box<dyn WeatherLookup>,
    timezone: Box<dyn TimezoneLookup>,
    elevation: Box<dyn ElevationLookup>,
}

impl LocationEnricher {
    pub fn new(
        weather: Box<dyn WeatherLookup>,
        timezone: Box<dyn TimezoneLookup>,
        elevation: Box<dyn ElevationLookup>,
    ) -> Self {
        Self {
            weather,
            timezone,
            elevation,
        }
    }

    /// Wire the OpenWeatherMap and Google Maps providers from explicit config.
    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        debug!("Building lookup pipeline with {config:?}");

        let http = http_client(config.timeout)?;
        let weather = OpenWeatherProvider::new(
            config.credentials.open_wx_api_key.clone(),
            config.endpoints.weather_base_url.clone(),
            http.clone(),
        );
        let maps = GoogleMapsProvider::new(
            config.credentials.google_maps_api_key.clone(),
            config.endpoints.maps_base_url.clone(),
            http,
        );

        Ok(Self::new(Box::new(weather), Box::new(maps.clone()), Box::new(maps)))
    }

    pub async fn enrich(&self, zip: &str) -> Result<LocationRecord, LookupError> {
        let conditions = self.weather.current_conditions(zip).await?;
        debug!(
            "ZIP {zip} resolved to {} at {} ({}F)",
            conditions.place_name, conditions.coordinates, conditions.temperature_f
        );

        let at = conditions.coordinates;
        let timezone_name = self.timezone.timezone(at, Utc::now().timestamp()).await?;
        let elevation_m = self.elevation.elevation(at).await?;

        info!("Enriched ZIP {zip}: timezone={timezone_name} elevation={elevation_m}m");

        Ok(LocationRecord::assemble(zip.to_string(), conditions, timezone_name, elevation_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinates, CurrentConditions};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Debug, Default)]
    struct Calls {
        weather: AtomicUsize,
        timezone: AtomicUsize,
        elevation: AtomicUsize,
        timestamps: Mutex<Vec<i64>>,
    }

    #[derive(Debug)]
    struct FakeWeather {
        calls: Arc<Calls>,
        found: bool,
    }

    #[async_trait]
    impl WeatherLookup for FakeWeather {
        async fn current_conditions(&self, zip: &str) -> Result<CurrentConditions, LookupError> {
            self.calls.weather.fetch_add(1, Ordering::SeqCst);
            if !self.found {
                return Err(LookupError::LocationNotFound {
                    zip: zip.to_string(),
                });
            }
            Ok(CurrentConditions {
                coordinates: Coordinates::new(1.0, 2.0),
                place_name: "Testville".to_string(),
                temperature_f: 72,
            })
        }
    }

    #[derive(Debug)]
    struct FakeTimezone {
        calls: Arc<Calls>,
        ok: bool,
    }

    #[async_trait]
    impl TimezoneLookup for FakeTimezone {
        async fn timezone(&self, at: Coordinates, timestamp: i64) -> Result<String, LookupError> {
            self.calls.timezone.fetch_add(1, Ordering::SeqCst);
            self.calls.timestamps.lock().expect("lock").push(timestamp);
            assert_eq!(at, Coordinates::new(1.0, 2.0));
            if !self.ok {
                return Err(LookupError::LookupFailed {
                    service: "Google timezone",
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: "boom".to_string(),
                });
            }
            Ok("America/Denver".to_string())
        }
    }

    #[derive(Debug)]
    struct FakeElevation {
        calls: Arc<Calls>,
        ok: bool,
    }

    #[async_trait]
    impl ElevationLookup for FakeElevation {
        async fn elevation(&self, at: Coordinates) -> Result<i64, LookupError> {
            self.calls.elevation.fetch_add(1, Ordering::SeqCst);
            assert_eq!(at, Coordinates::new(1.0, 2.0));
            if !self.ok {
                return Err(LookupError::LookupFailed {
                    service: "Google elevation",
                    status: StatusCode::BAD_REQUEST,
                    body: "nope".to_string(),
                });
            }
            Ok(1609)
        }
    }

    fn enricher(weather: bool, timezone: bool, elevation: bool) -> (LocationEnricher, Arc<Calls>) {
        let calls = Arc::new(Calls::default());
        let enricher = LocationEnricher::new(
            Box::new(FakeWeather {
                calls: calls.clone(),
                found: weather,
            }),
            Box::new(FakeTimezone {
                calls: calls.clone(),
                ok: timezone,
            }),
            Box::new(FakeElevation {
                calls: calls.clone(),
                ok: elevation,
            }),
        );
        (enricher, calls)
    }

    #[tokio::test]
    async fn enrich_assembles_full_record() {
        let (enricher, calls) = enricher(true, true, true);

        let record = enricher.enrich("80202").await.expect("all lookups succeed");

        assert_eq!(record.zip_code(), "80202");
        assert_eq!(
            record.to_string(),
            "At the location Testville, the temperature is 72, the timezone is America/Denver, and the elevation is 1609."
        );
        assert_eq!(calls.weather.load(Ordering::SeqCst), 1);
        assert_eq!(calls.timezone.load(Ordering::SeqCst), 1);
        assert_eq!(calls.elevation.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn weather_failure_skips_secondary_lookups() {
        let (enricher, calls) = enricher(false, true, true);

        let err = enricher.enrich("00000").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "ZIP-code 00000 is invalid");
        assert_eq!(calls.weather.load(Ordering::SeqCst), 1);
        assert_eq!(calls.timezone.load(Ordering::SeqCst), 0);
        assert_eq!(calls.elevation.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn timezone_failure_aborts_enrichment() {
        let (enricher, calls) = enricher(true, false, true);

        let err = enricher.enrich("80202").await.unwrap_err();

        assert!(matches!(err, LookupError::LookupFailed { service: "Google timezone", .. }));
        assert_eq!(calls.elevation.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn elevation_failure_aborts_enrichment() {
        let (enricher, calls) = enricher(true, true, false);

        let err = enricher.enrich("80202").await.unwrap_err();

        assert!(matches!(err, LookupError::LookupFailed { service: "Google elevation", .. }));
        assert_eq!(calls.timezone.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn timezone_gets_current_unix_timestamp() {
        let (enricher, calls) = enricher(true, true, true);
        let before = Utc::now().timestamp();

        enricher.enrich("80202").await.expect("all lookups succeed");

        let after = Utc::now().timestamp();
        let stamps = calls.timestamps.lock().expect("lock");
        assert_eq!(stamps.len(), 1);
        assert!(stamps[0] >= before && stamps[0] <= after);
    }

    #[test]
    fn from_config_builds_pipeline() {
        let cfg = Config::new(crate::Credentials::new("WX", "MAPS"));

        assert!(LocationEnricher::from_config(&cfg).is_ok());
    }
}
