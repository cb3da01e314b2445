pub mod error;
pub mod markup;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use markup::Fragment;
pub use models::language::Language;
pub use models::personality_trait::{PersonalityTrait, TraitScores};
pub use models::response_style::ResponseStyle;
pub use models::saved_query::{NewQuery, SavedQuery};
pub use models::user::{IdentifierKind, User, mask_identifier};
