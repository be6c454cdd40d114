use reqwest::StatusCode;
use thiserror::Error;

/// Why a ZIP code could not be turned into a [`crate::LocationRecord`].
#[derive(Debug, Error)]
pub enum LookupError {
    /// The weather provider answered with anything but 200 for this ZIP.
    #[error("ZIP-code {zip} is invalid")]
    LocationNotFound { zip: String },

    /// A mapping lookup answered with a non-success status.
    #[error("Something went wrong with {service}. The response was {status}: {body}")]
    LookupFailed {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The provider answered 200 but the body was not what we expected.
    #[error("Invalid response from {service}: {reason}")]
    InvalidResponse {
        service: &'static str,
        reason: String,
    },

    /// No response at all: connection refused, DNS failure, timeout.
    #[error("Failed to reach {service}: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::LocationNotFound { .. })
    }

    /// True when the upstream could not be reached, as opposed to answering badly.
    pub fn is_transport(&self) -> bool {
        matches!(self, LookupError::Transport { .. })
    }
}
