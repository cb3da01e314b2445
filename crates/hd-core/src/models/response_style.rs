use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How the assistant's answer should be phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStyle {
    #[default]
    Friendly,
    Formal,
    Story,
    Example,
}

impl ResponseStyle {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Formal => "formal",
            Self::Story => "story",
            Self::Example => "example",
        }
    }

    /// Human-readable label used when assembling prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Friendly => "Friendly & Casual",
            Self::Formal => "Formal & Academic",
            Self::Story => "Storytelling",
            Self::Example => "Example-Based",
        }
    }
}

impl FromStr for ResponseStyle {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "friendly" => Ok(Self::Friendly),
            "formal" => Ok(Self::Formal),
            "story" => Ok(Self::Story),
            "example" => Ok(Self::Example),
            _ => Err(CoreError::InvalidResponseStyle {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
