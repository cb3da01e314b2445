pub mod corpus;
pub mod error;
pub mod podcast;

#[cfg(test)]
mod tests;

pub use corpus::{Corpus, ScoredPodcast};
pub use error::{CorpusError, Result};
pub use podcast::Podcast;
