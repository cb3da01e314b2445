use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Answer language requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Fa,
    En,
    Tr,
    Ar,
}

impl Language {
    /// Convert to database string representation (ISO 639-1 code)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fa => "fa",
            Self::En => "en",
            Self::Tr => "tr",
            Self::Ar => "ar",
        }
    }
}

impl FromStr for Language {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "fa" => Ok(Self::Fa),
            "en" => Ok(Self::En),
            "tr" => Ok(Self::Tr),
            "ar" => Ok(Self::Ar),
            _ => Err(CoreError::InvalidLanguage {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
