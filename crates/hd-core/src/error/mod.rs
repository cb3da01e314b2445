use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid personality trait: {value} {location}")]
    InvalidPersonalityTrait {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid response style: {value} {location}")]
    InvalidResponseStyle {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid language: {value} {location}")]
    InvalidLanguage {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid identifier kind: {value} {location}")]
    InvalidIdentifierKind {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
