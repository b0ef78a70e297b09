//! Experience Extractor: asks the model for years, titles and achievements.
//!
//! Never fails: capability errors, missing JSON and malformed payloads all
//! yield `ExperienceProfile::default()`.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::analysis::prompts::{EXPERIENCE_PROMPT_TEMPLATE, EXPERIENCE_SYSTEM};
use crate::analysis::structured::{try_parse_structured, Shape};
use crate::llm_client::prompts::{render, JSON_ONLY_INSTRUCTION};
use crate::llm_client::CompletionModel;
use crate::models::analysis::ExperienceProfile;

pub struct ExperienceExtractor {
    llm: Arc<dyn CompletionModel>,
}

impl ExperienceExtractor {
    pub fn new(llm: Arc<dyn CompletionModel>) -> Self {
        Self { llm }
    }

    pub async fn extract(&self, resume_text: &str) -> ExperienceProfile {
        let system = format!("{EXPERIENCE_SYSTEM} {JSON_ONLY_INSTRUCTION}");
        let prompt = render(EXPERIENCE_PROMPT_TEMPLATE, &[("resume_text", resume_text)]);

        let response = match self.llm.complete(&system, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Experience extraction call failed: {e}");
                return ExperienceProfile::default();
            }
        };

        match parse_experience(&response) {
            Some(profile) => {
                debug!(years = profile.years, titles = profile.titles.len(), "experience extracted");
                profile
            }
            None => {
                warn!("Could not parse experience from model response");
                ExperienceProfile::default()
            }
        }
    }
}

/// Parses the first `{...}` span of a model response into a profile,
/// coercing each field independently.
pub fn parse_experience(response: &str) -> Option<ExperienceProfile> {
    let payload: Value = try_parse_structured(response, Shape::Object)?;
    let object = payload.as_object()?;

    Some(ExperienceProfile {
        years: object.get("years").map(coerce_years).unwrap_or(0.0),
        titles: object.get("titles").map(string_items).unwrap_or_default(),
        achievements: object.get("achievements").map(string_items).unwrap_or_default(),
    })
}

/// Numbers and numeric strings are accepted; anything else, negative or
/// non-finite becomes 0.
fn coerce_years(value: &Value) -> f64 {
    let years = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if years.is_finite() && years > 0.0 {
        years
    } else {
        0.0
    }
}

/// Keeps the string elements of an array; non-arrays become empty.
fn string_items(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedModel;

    #[test]
    fn test_parse_well_formed_payload_in_prose() {
        let response = r#"Here is the analysis:
        {"years": 6, "titles": ["Staff Engineer", "Engineer"], "achievements": ["Led migration to Kubernetes"]}
        Let me know if you need more."#;

        let profile = parse_experience(response).unwrap();
        assert_eq!(profile.years, 6.0);
        assert_eq!(profile.titles, vec!["Staff Engineer", "Engineer"]);
        assert_eq!(profile.achievements.len(), 1);
    }

    #[test]
    fn test_numeric_string_years_are_coerced() {
        let profile = parse_experience(r#"{"years": "4.5", "titles": [], "achievements": []}"#).unwrap();
        assert_eq!(profile.years, 4.5);
    }

    #[test]
    fn test_non_numeric_or_negative_years_become_zero() {
        let profile = parse_experience(r#"{"years": "many"}"#).unwrap();
        assert_eq!(profile.years, 0.0);
        let profile = parse_experience(r#"{"years": -3}"#).unwrap();
        assert_eq!(profile.years, 0.0);
    }

    #[test]
    fn test_non_array_lists_become_empty() {
        let profile =
            parse_experience(r#"{"years": 2, "titles": "Engineer", "achievements": null}"#).unwrap();
        assert!(profile.titles.is_empty());
        assert!(profile.achievements.is_empty());
    }

    #[test]
    fn test_non_string_list_items_are_dropped() {
        let profile = parse_experience(r#"{"titles": ["Engineer", 3, {"x": 1}]}"#).unwrap();
        assert_eq!(profile.titles, vec!["Engineer"]);
    }

    #[test]
    fn test_unparseable_response_is_none() {
        assert!(parse_experience("I could not find any experience.").is_none());
        assert!(parse_experience("{ years: five }").is_none());
    }

    #[tokio::test]
    async fn test_unparseable_response_falls_back_to_default() {
        let extractor = ExperienceExtractor::new(Arc::new(ScriptedModel::replying(
            "Sorry, I can't help with that.",
        )));
        assert_eq!(extractor.extract("resume").await, ExperienceProfile::default());
    }

    #[tokio::test]
    async fn test_capability_failure_falls_back_to_default() {
        let extractor = ExperienceExtractor::new(Arc::new(ScriptedModel::failing()));
        assert_eq!(extractor.extract("resume").await, ExperienceProfile::default());
    }

    #[tokio::test]
    async fn test_prompt_carries_resume_text() {
        let model = Arc::new(ScriptedModel::replying(r#"{"years": 3}"#));
        let extractor = ExperienceExtractor::new(model.clone());

        let profile = extractor.extract("Backend Engineer at Acme since 2021").await;
        assert_eq!(profile.years, 3.0);
        let prompts = model.prompts();
        assert!(prompts[0].contains("Backend Engineer at Acme since 2021"));
    }
}
