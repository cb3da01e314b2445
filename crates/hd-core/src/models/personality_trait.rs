//! Personality trait taxonomy and assessment tally.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// One of the four fixed personality categories assigned by the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTrait {
    Sensitive,
    #[default]
    Logical,
    Anxious,
    Perfectionist,
}

impl PersonalityTrait {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sensitive => "sensitive",
            Self::Logical => "logical",
            Self::Anxious => "anxious",
            Self::Perfectionist => "perfectionist",
        }
    }

    /// Human-readable label used when assembling prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sensitive => "Sensitive & Empathetic",
            Self::Logical => "Logical & Analytical",
            Self::Anxious => "Anxious & Cautious",
            Self::Perfectionist => "Perfectionist & Precise",
        }
    }

    /// All traits, in tally order for [`TraitScores::dominant`]
    pub const ALL: [PersonalityTrait; 4] = [
        Self::Sensitive,
        Self::Logical,
        Self::Anxious,
        Self::Perfectionist,
    ];
}

impl FromStr for PersonalityTrait {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "sensitive" => Ok(Self::Sensitive),
            "logical" => Ok(Self::Logical),
            "anxious" => Ok(Self::Anxious),
            "perfectionist" => Ok(Self::Perfectionist),
            _ => Err(CoreError::InvalidPersonalityTrait {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tally of answered assessment options per trait. Each answer records one
/// point for the trait its option carries; the dominant trait is the highest
/// tally, with the later trait in [`PersonalityTrait::ALL`] winning ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitScores {
    pub sensitive: u32,
    pub logical: u32,
    pub anxious: u32,
    pub perfectionist: u32,
}

impl TraitScores {
    pub fn record(&mut self, trait_: PersonalityTrait) {
        match trait_ {
            PersonalityTrait::Sensitive => self.sensitive += 1,
            PersonalityTrait::Logical => self.logical += 1,
            PersonalityTrait::Anxious => self.anxious += 1,
            PersonalityTrait::Perfectionist => self.perfectionist += 1,
        }
    }

    pub fn get(&self, trait_: PersonalityTrait) -> u32 {
        match trait_ {
            PersonalityTrait::Sensitive => self.sensitive,
            PersonalityTrait::Logical => self.logical,
            PersonalityTrait::Anxious => self.anxious,
            PersonalityTrait::Perfectionist => self.perfectionist,
        }
    }

    pub fn dominant(&self) -> PersonalityTrait {
        let mut best = PersonalityTrait::ALL[0];
        for trait_ in PersonalityTrait::ALL {
            // >= so the later tied trait wins
            if self.get(trait_) >= self.get(best) {
                best = trait_;
            }
        }
        best
    }
}
