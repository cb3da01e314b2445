use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenAiError {
    #[error("GenAI API key is not configured {location}")]
    MissingApiKey { location: ErrorLocation },

    #[error("HTTP error calling GenAI: {source} {location}")]
    Http {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("GenAI returned status {status}: {body} {location}")]
    Status {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("GenAI response contained no usable content {location}")]
    EmptyResponse { location: ErrorLocation },

    #[error("Invalid base64 audio payload: {source} {location}")]
    Decode {
        source: base64::DecodeError,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for GenAiError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenAiError>;
