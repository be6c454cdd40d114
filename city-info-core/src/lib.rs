//! Core library for the `city-info` CLI.
//!
//! This crate defines:
//! - Explicit configuration (credentials, endpoints, timeout)
//! - Lookup traits and the OpenWeatherMap / Google Maps providers behind them
//! - The enrichment pipeline that turns a ZIP code into a [`LocationRecord`]
//!
//! It never reads the environment and never installs a logger; the binary does both.

pub mod config;
pub mod enricher;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{Config, Credentials, Endpoints};
pub use enricher::LocationEnricher;
pub use error::LookupError;
pub use model::{Coordinates, CurrentConditions, LocationRecord};
pub use provider::{ElevationLookup, TimezoneLookup, WeatherLookup};
