pub mod audio;
pub mod client;
pub mod error;
pub mod prompt;
pub mod wire;


pub use client::GenAiClient;
pub use error::{GenAiError, Result};
pub use prompt::AnalysisPrompt;
