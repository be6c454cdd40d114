use std::fmt;

/// A point on the map, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Renders as `lat,lon` for Google's `location`/`locations`, always with a
/// fractional part (`1.0,2.0`, never `1,2`).
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?},{:?}", self.lat, self.lon)
    }
}

/// What the weather provider tells us about a ZIP code.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub coordinates: Coordinates,
    pub place_name: String,
    pub temperature_f: i64,
}

/// A ZIP code enriched with weather, timezone and elevation.
///
/// Only [`crate::LocationEnricher`] builds these, and only after every lookup
/// succeeded, so a value of this type is always complete.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    zip_code: String,
    coordinates: Coordinates,
    place_name: String,
    temperature_f: i64,
    timezone_name: String,
    elevation_m: i64,
}

impl LocationRecord {
    pub(crate) fn assemble(
        zip_code: String,
        conditions: CurrentConditions,
        timezone_name: String,
        elevation_m: i64,
    ) -> Self {
        Self {
            zip_code,
            coordinates: conditions.coordinates,
            place_name: conditions.place_name,
            temperature_f: conditions.temperature_f,
            timezone_name,
            elevation_m,
        }
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates.lat
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates.lon
    }

    pub fn place_name(&self) -> &str {
        &self.place_name
    }

    pub fn temperature_f(&self) -> i64 {
        self.temperature_f
    }

    pub fn timezone_name(&self) -> &str {
        &self.timezone_name
    }

    pub fn elevation_m(&self) -> i64 {
        self.elevation_m
    }
}

impl fmt::Display for LocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At the location {}, the temperature is {}, the timezone is {}, and the elevation is {}.",
            self.place_name, self.temperature_f, self.timezone_name, self.elevation_m
        )
    }
}

/// Whole degrees, ties to even (72.5 -> 72, 73.5 -> 74, -0.5 -> 0).
pub fn round_temperature(raw: f64) -> i64 {
    raw.round_ties_even() as i64
}

/// Whole meters, truncated toward zero (123.9 -> 123, -12.7 -> -12).
pub fn truncate_elevation(raw: f64) -> i64 {
    raw.trunc() as i64
}
