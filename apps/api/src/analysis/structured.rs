//! Best-effort extraction of a JSON payload from free-form model output.
//!
//! Models wrap JSON in prose, code fences and reasoning tags. Everything here is
//! pure: callers compose `try_parse_structured` with their own default value.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup pattern is valid"));
static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(```json|```|json)\s*").expect("fence pattern is valid"));
static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\s*$").expect("fence pattern is valid"));

/// Which top-level JSON value to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
}

impl Shape {
    fn delimiters(self) -> (char, char) {
        match self {
            Shape::Object => ('{', '}'),
            Shape::Array => ('[', ']'),
        }
    }
}

/// Greedy span from the first opening delimiter to the last closing one.
pub fn find_span(text: &str, shape: Shape) -> Option<&str> {
    let (open, close) = shape.delimiters();
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

/// Trims, drops markup-like tags, then a leading fence/`json` marker and a trailing fence.
pub fn clean_model_output(text: &str) -> String {
    let trimmed = text.trim();
    let untagged = MARKUP_TAG.replace_all(trimmed, "");
    let unfenced = LEADING_FENCE.replace(&untagged, "");
    TRAILING_FENCE.replace(&unfenced, "").into_owned()
}

/// Locates the first `shape` span in `text` and deserializes it.
pub fn try_parse_structured<T: DeserializeOwned>(text: &str, shape: Shape) -> Option<T> {
    let span = find_span(text, shape)?;
    serde_json::from_str(span).ok()
}
