//! Block-markup renderer for AI-generated answers.
//!
//! Answers embed a custom delimiter notation (`:::important`, `:::step`,
//! `:::image`) plus positional `[IMAGE_PLACEHOLDER_N]` tokens. This module
//! resolves the placeholders against the generated image list and splits the
//! text into typed fragments a client can render directly.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Fallback title for `:::important` blocks with no bracketed first line.
/// The assistant answers in the requested language, so this matches the
/// product's primary locale.
const DEFAULT_CALLOUT_TITLE: &str = "نکته مهم";

/// Matches a complete block: opening tag through the closing `:::`,
/// non-greedy and spanning newlines. Unterminated blocks do not match and
/// fall through as plain text, literal delimiters included.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s):::(?:important|step|image).*?:::").expect("block regex is valid")
});

/// Matches the bracketed label on the first line of step/important blocks.
static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("label regex is valid"));

/// One renderable piece of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    /// Plain rich-text span (markdown, rendered by the client)
    Text { text: String },
    Image {
        url: String,
    },
    Step {
        number: String,
        body: String,
    },
    Callout {
        title: String,
        body: String,
    },
}

/// Render an answer into typed fragments.
///
/// `images` are the generated image references in placeholder order:
/// `[IMAGE_PLACEHOLDER_1]` maps to `images[0]` and so on. A placeholder with
/// an empty reference is removed; one past the end of the image list stays
/// in the text as a literal.
pub fn render(answer: &str, images: &[String]) -> Vec<Fragment> {
    let text = substitute_placeholders(answer, images);

    let mut fragments = Vec::new();
    let mut last = 0;
    for m in BLOCK_RE.find_iter(&text) {
        push_text(&mut fragments, &text[last..m.start()]);
        if let Some(fragment) = parse_block(m.as_str()) {
            fragments.push(fragment);
        }
        last = m.end();
    }
    push_text(&mut fragments, &text[last..]);

    fragments
}

/// Replace each `[IMAGE_PLACEHOLDER_N]` (first occurrence only) with an
/// image block wrapping the N-th reference, or drop it when the reference
/// is empty. Placeholders with no N-th reference are left untouched.
fn substitute_placeholders(answer: &str, images: &[String]) -> String {
    let mut text = answer.to_string();
    for (idx, image) in images.iter().enumerate() {
        let placeholder = format!("[IMAGE_PLACEHOLDER_{}]", idx + 1);
        if !text.contains(&placeholder) {
            continue;
        }
        if image.is_empty() {
            text = text.replacen(&placeholder, "", 1);
        } else {
            text = text.replacen(&placeholder, &format!(":::image {image}:::"), 1);
        }
    }
    text
}

fn push_text(fragments: &mut Vec<Fragment>, span: &str) {
    if !span.is_empty() {
        fragments.push(Fragment::Text {
            text: span.to_string(),
        });
    }
}

fn parse_block(block: &str) -> Option<Fragment> {
    if let Some(inner) = strip_delimiters(block, ":::image") {
        let url = inner.trim();
        if url.is_empty() {
            return None;
        }
        return Some(Fragment::Image {
            url: url.to_string(),
        });
    }

    if let Some(inner) = strip_delimiters(block, ":::step") {
        let (label, body) = split_label(inner);
        return Some(Fragment::Step {
            number: label.unwrap_or_else(|| "?".to_string()),
            body,
        });
    }

    if let Some(inner) = strip_delimiters(block, ":::important") {
        let (label, body) = split_label(inner);
        return Some(Fragment::Callout {
            title: label.unwrap_or_else(|| DEFAULT_CALLOUT_TITLE.to_string()),
            body,
        });
    }

    None
}

fn strip_delimiters<'a>(block: &'a str, tag: &str) -> Option<&'a str> {
    block
        .strip_prefix(tag)
        .and_then(|rest| rest.strip_suffix(":::"))
}

/// First line carries an optional bracketed label; the remaining lines are
/// the body.
fn split_label(inner: &str) -> (Option<String>, String) {
    let trimmed = inner.trim();
    let mut lines = trimmed.lines();
    let first = lines.next().unwrap_or_default();
    let label = LABEL_RE
        .captures(first)
        .map(|caps| caps[1].to_string());
    let body = lines.collect::<Vec<_>>().join("\n");
    (label, body)
}
