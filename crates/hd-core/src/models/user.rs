//! User entity - one row per login identifier.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A registered user. Created at most once per identifier (insert-if-absent),
/// never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Email address or phone number
    pub identifier: String,
    #[serde(rename = "type")]
    pub kind: IdentifierKind,
    pub created_at: DateTime<Utc>,
}

/// How a login identifier is classified: anything containing `@` is an
/// email, everything else is treated as a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    Email,
    Phone,
}

impl IdentifierKind {
    pub fn classify(identifier: &str) -> Self {
        if identifier.contains('@') {
            Self::Email
        } else {
            Self::Phone
        }
    }

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl FromStr for IdentifierKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            _ => Err(CoreError::InvalidIdentifierKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mask an identifier for the public feed.
///
/// Emails keep the first 3 characters of the local part and the full domain:
/// `john@example.com` -> `joh***@example.com`. Phone numbers keep the first
/// 4 characters and everything from the 9th on: `09121234567` ->
/// `0912****567`. Slicing is character-based so multi-byte identifiers are
/// never split mid code point.
pub fn mask_identifier(identifier: &str) -> String {
    if identifier.contains('@') {
        let mut parts = identifier.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let prefix: String = local.chars().take(3).collect();
        format!("{prefix}***@{domain}")
    } else {
        let prefix: String = identifier.chars().take(4).collect();
        let suffix: String = identifier.chars().skip(8).collect();
        format!("{prefix}****{suffix}")
    }
}
