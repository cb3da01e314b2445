//! Prompt assembly for the analysis and illustration calls.

use hd_core::{Language, PersonalityTrait, ResponseStyle};
use hd_corpus::ScoredPodcast;

/// Persian fallback inserted when no transcript matched the problem.
pub const NO_CONTEXT_FOUND: &str = "هیچ متن مرجع مستقیمی یافت نشد.";

const SOURCE_SEPARATOR: &str = "\n\n---\n\n";

/// Everything the main analysis prompt is built from.
#[derive(Debug, Clone)]
pub struct AnalysisPrompt<'a> {
    pub problem: &'a str,
    pub user_context: Option<&'a str>,
    pub personality: PersonalityTrait,
    pub style: ResponseStyle,
    pub language: Language,
    pub article_mode: bool,
    /// Pre-rendered grounding block, see [`grounding_context`]
    pub context: &'a str,
}

impl AnalysisPrompt<'_> {
    pub fn render(&self) -> String {
        format!(
            r#"
Role: You are the "Dr. Azarakhsh Mokri Smart Assistant". Respond in: {lang}.
Style: {style}.
User Personality: {personality}.
User Context (About them): {user_context}.
Article Mode: {article_mode}.

Instructions:
1. Tone: Analytical, compassionate, evidence-based.
2. Structure:
   - Deep Empathy & Understanding.
   - Root Cause Analysis.
   - :::important [Key Concept/Experiment]
     Explain a scientific experiment (e.g., Skinner's pigeons, Harlow's monkeys) or core psychological concept.
     :::
   - Practical Steps: Use ":::step [Number]
Description
:::" for each step.
3. Content:
   - If Article Mode is ON, be comprehensive and detailed (aim for high quality, around 800-1000 words).
   - Insert placeholders like "[IMAGE_PLACEHOLDER_1]", "[IMAGE_PLACEHOLDER_2]" in the middle of the text where a conceptual image would fit best.
4. Grounding: Use the provided context:
{context}

User's Problem: {problem}
"#,
            lang = self.language,
            style = self.style.label(),
            personality = self.personality.label(),
            user_context = self.user_context.unwrap_or("Not provided"),
            article_mode = if self.article_mode { "ON" } else { "OFF" },
            context = self.context,
            problem = self.problem,
        )
    }
}

/// Join matched transcripts into the grounding block, or the Persian
/// fallback line when nothing matched.
pub fn grounding_context(sources: &[ScoredPodcast<'_>]) -> String {
    if sources.is_empty() {
        return NO_CONTEXT_FOUND.to_string();
    }

    sources
        .iter()
        .map(|s| format!("عنوان: {}\nمتن: {}", s.podcast.title, s.podcast.text))
        .collect::<Vec<_>>()
        .join(SOURCE_SEPARATOR)
}

/// Prompt for one conceptual illustration of the user's problem.
pub fn illustration_prompt(problem: &str) -> String {
    format!(
        "A professional, minimal, and purely conceptual psychological illustration for: {problem}. \
         No text. Symbolic representation. Style: soft colors, clean, high quality."
    )
}
