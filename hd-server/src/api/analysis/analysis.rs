//! Analysis and speech REST API handlers
//!
//! These are the two endpoints that call the generative provider. The
//! provider call has no retry or timeout of its own; a slow provider
//! blocks only the request that made it.

use crate::api::analysis::analyze_request::AnalyzeRequest;
use crate::api::analysis::analyze_response::{AnalyzeResponse, SourceDto};
use crate::api::analysis::speak_request::SpeakRequest;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::app_state::AppState;

use hd_core::{Language, NewQuery, PersonalityTrait, ResponseStyle, markup};
use hd_db::QueryRepository;
use hd_genai::AnalysisPrompt;
use hd_genai::prompt::{grounding_context, illustration_prompt};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use log::warn;

/// POST /api/analyze
///
/// Score the corpus, assemble the prompt, call the provider, optionally
/// illustrate, persist when a user is attached, and return the rendered
/// answer.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let problem = request.problem.trim();
    if problem.is_empty() {
        return Err(ApiError::Validation {
            message: "problem is required".to_string(),
            field: Some("problem".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let personality = request
        .personality
        .as_deref()
        .map(PersonalityTrait::from_str)
        .transpose()?
        .unwrap_or_default();
    let style = request
        .style
        .as_deref()
        .map(ResponseStyle::from_str)
        .transpose()?
        .unwrap_or_default();
    let language = request
        .language
        .as_deref()
        .map(Language::from_str)
        .transpose()?
        .unwrap_or_default();

    let sources = state.corpus.relevant(problem);
    let context = grounding_context(&sources);

    let prompt = AnalysisPrompt {
        problem,
        user_context: request.user_context.as_deref(),
        personality,
        style,
        language,
        article_mode: request.article_mode,
        context: &context,
    }
    .render();

    let answer = state.genai.generate_text(&prompt).await?;

    // Illustration failures are tolerated; whatever was generated so far
    // is kept.
    let mut images = Vec::new();
    if request.article_mode {
        for _ in 0..state.genai.config().article_image_count {
            match state.genai.generate_image(&illustration_prompt(problem)).await {
                Ok(url) => images.push(url),
                Err(e) => {
                    warn!("Illustration generation failed: {}", e);
                    break;
                }
            }
        }
    }

    let source_dtos: Vec<SourceDto> = sources.iter().map(SourceDto::from).collect();

    if let Some(user_id) = request.user_id {
        let repo = QueryRepository::new(state.pool.clone());
        repo.insert(&NewQuery {
            user_id: Some(user_id),
            user_context: request.user_context.clone(),
            problem: problem.to_string(),
            personality: Some(personality.as_str().to_string()),
            style: Some(style.as_str().to_string()),
            language: Some(language.as_str().to_string()),
            answer: answer.clone(),
            images: images.clone(),
            is_public: request.is_public.unwrap_or(false),
        })
        .await?;
    }

    let fragments = markup::render(&answer, &images);

    Ok(Json(AnalyzeResponse {
        answer,
        images,
        fragments,
        sources: source_dtos,
    }))
}

/// POST /api/speak
///
/// Synthesize the text and return a complete WAV file.
pub async fn speak(
    State(state): State<AppState>,
    Json(request): Json<SpeakRequest>,
) -> ApiResult<Response> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::Validation {
            message: "text is required".to_string(),
            field: Some("text".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let wav = state.genai.synthesize_speech(text).await?;

    Ok(([(header::CONTENT_TYPE, "audio/wav")], wav).into_response())
}
