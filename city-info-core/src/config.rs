use std::{fmt, time::Duration};

pub const DEFAULT_WEATHER_BASE_URL: &str = "http://api.openweathermap.org";
pub const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// API keys for the two upstream providers.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub open_wx_api_key: String,
    pub google_maps_api_key: String,
}

impl Credentials {
    pub fn new(
        open_wx_api_key: impl Into<String>,
        google_maps_api_key: impl Into<String>,
    ) -> Self {
        Self {
            open_wx_api_key: open_wx_api_key.into(),
            google_maps_api_key: google_maps_api_key.into(),
        }
    }
}

// Keys end up in debug logs through `Config`, so never print them.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("open_wx_api_key", &mask(&self.open_wx_api_key))
            .field("google_maps_api_key", &mask(&self.google_maps_api_key))
            .finish()
    }
}

/// Base URLs of the upstream services, without trailing path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub weather_base_url: String,
    pub maps_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            maps_base_url: DEFAULT_MAPS_BASE_URL.to_string(),
        }
    }
}

/// Everything the lookup pipeline needs, handed in explicitly by the caller.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: Endpoints,

    /// Per-request timeout applied to every upstream call.
    pub timeout: Duration,
}

impl Config {
    /// Config pointing at the public provider endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoints: Endpoints::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Keeps the last four characters of a secret so operators can tell keys apart.
pub fn mask(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}
