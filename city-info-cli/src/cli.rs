use std::{process::ExitCode, time::Duration};

use city_info_core::{
    Config, Credentials, Endpoints, LocationEnricher,
    config::{DEFAULT_MAPS_BASE_URL, DEFAULT_WEATHER_BASE_URL, mask},
};
use clap::Parser;
use log::{LevelFilter, debug};

use crate::logging;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "city-info",
    version,
    about = "Current temperature, timezone and elevation for a US ZIP code"
)]
pub struct Cli {
    /// The ZIP-code of the city you are interested in.
    #[arg(long = "zip", value_name = "ZIPCODE")]
    pub zip: String,

    /// OpenWeatherMap API key.
    #[arg(long, env = "OPEN_WX_API_KEY", hide_env_values = true)]
    pub open_wx_api_key: String,

    /// Google Maps API key (Time Zone and Elevation APIs).
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub google_maps_api_key: String,

    /// Minimum severity written to the console log.
    #[arg(
        long,
        env = "LOGGING_LEVEL",
        default_value = "info",
        value_parser = logging::parse_level
    )]
    pub log_level: LevelFilter,

    /// Per-request network timeout, in seconds.
    #[arg(long, env = "CITY_INFO_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Exit with status 1 when the lookup fails instead of 0.
    #[arg(long)]
    pub fail_on_error: bool,

    #[arg(
        long,
        env = "CITY_INFO_WEATHER_URL",
        default_value = DEFAULT_WEATHER_BASE_URL,
        hide = true
    )]
    pub weather_url: String,

    #[arg(
        long,
        env = "CITY_INFO_MAPS_URL",
        default_value = DEFAULT_MAPS_BASE_URL,
        hide = true
    )]
    pub maps_url: String,
}

impl Cli {
    /// Explicit pipeline configuration; nothing below this reads the environment.
    pub fn config(&self) -> Config {
        Config::new(Credentials::new(
            self.open_wx_api_key.clone(),
            self.google_maps_api_key.clone(),
        ))
        .with_endpoints(Endpoints {
            weather_base_url: self.weather_url.clone(),
            maps_base_url: self.maps_url.clone(),
        })
        .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub async fn run(self) -> anyhow::Result<ExitCode> {
        logging::init_logger(self.log_level)?;

        debug!(
            "Credentials loaded: OpenWeatherMap key {}, Google Maps key {}",
            mask(&self.open_wx_api_key),
            mask(&self.google_maps_api_key)
        );
        debug!("Got zipcode {}", self.zip);

        let enricher = LocationEnricher::from_config(&self.config())?;

        // Lookup failures are reported on stdout like a normal answer.
        match enricher.enrich(&self.zip).await {
            Ok(record) => {
                println!("{record}");
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                println!("{err}");
                if self.fail_on_error {
                    Ok(ExitCode::FAILURE)
                } else {
                    Ok(ExitCode::SUCCESS)
                }
            }
        }
    }
}
