//! Suggestion Generator: turns the aggregated analysis into categorized,
//! actionable suggestions.
//!
//! The model's reply is cleaned, the first `[...]` span parsed and validated.
//! Any failure returns the four default suggestions, so callers always get a
//! non-empty list.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::analysis::prompts::{SUGGESTIONS_PROMPT_TEMPLATE, SUGGESTIONS_SYSTEM};
use crate::analysis::similarity::SemanticAnalysis;
use crate::analysis::structured::{clean_model_output, try_parse_structured, Shape};
use crate::llm_client::prompts::{render, JSON_ONLY_INSTRUCTION};
use crate::llm_client::CompletionModel;
use crate::models::analysis::{ExperienceProfile, StructureReport, Suggestion};

const WEAK_MATCH_EXCERPT_CHARS: usize = 100;
const NO_JOB_DESCRIPTION: &str = "No job description provided";
const NONE: &str = "None";

/// Everything the suggestion prompt is built from.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionContext<'a> {
    pub semantic: &'a SemanticAnalysis,
    pub matching_keywords: &'a [String],
    pub missing_keywords: &'a [String],
    pub structure: &'a StructureReport,
    pub format_issues: &'a [String],
    pub experience: &'a ExperienceProfile,
    pub job_description: &'a str,
}

pub fn default_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            "Keywords",
            "Add missing keywords to improve ATS compatibility",
        ),
        Suggestion::new(
            "Structure",
            "Ensure all core resume sections are present (Contact, Experience, Education, Skills)",
        ),
        Suggestion::new(
            "Formatting",
            "Review formatting for consistency and readability",
        ),
        Suggestion::new(
            "Experience",
            "Include quantifiable achievements in experience section",
        ),
    ]
}

pub struct SuggestionGenerator {
    llm: Arc<dyn CompletionModel>,
}

impl SuggestionGenerator {
    pub fn new(llm: Arc<dyn CompletionModel>) -> Self {
        Self { llm }
    }

    pub async fn generate(&self, context: &SuggestionContext<'_>) -> Vec<Suggestion> {
        let system = format!("{SUGGESTIONS_SYSTEM}\n{JSON_ONLY_INSTRUCTION}");
        let prompt = build_prompt(context);

        let response = match self.llm.complete(&system, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Suggestion generation call failed: {e}");
                return default_suggestions();
            }
        };

        match parse_suggestions(&response) {
            Some(suggestions) => {
                debug!(count = suggestions.len(), "suggestions generated");
                suggestions
            }
            None => {
                warn!("Model returned no valid suggestion array, using defaults");
                default_suggestions()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSuggestion {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    suggestion: Option<String>,
}

/// Cleans a model response and extracts a validated, non-empty suggestion list.
pub fn parse_suggestions(response: &str) -> Option<Vec<Suggestion>> {
    let cleaned = clean_model_output(response);
    let raw: Vec<RawSuggestion> = try_parse_structured(&cleaned, Shape::Array)?;
    if raw.is_empty() {
        return None;
    }

    raw.into_iter()
        .map(|item| {
            let category = item.category.filter(|c| !c.trim().is_empty())?;
            let suggestion = item.suggestion.filter(|s| !s.trim().is_empty())?;
            Some(Suggestion {
                category,
                suggestion,
            })
        })
        .collect()
}

pub fn build_prompt(context: &SuggestionContext<'_>) -> String {
    // Integer percent, so -0.0 renders as 0.
    let semantic_score = ((context.semantic.overall_similarity * 100.0).round() as i32).to_string();
    let structure_issues = context.structure.missing_sections().join(", ");
    let experience = serde_json::to_string(context.experience).unwrap_or_else(|_| "{}".to_string());
    let job_description = if context.job_description.trim().is_empty() {
        NO_JOB_DESCRIPTION
    } else {
        context.job_description
    };
    let weak_matches = context
        .semantic
        .weak_matches
        .iter()
        .map(|m| m.text.chars().take(WEAK_MATCH_EXCERPT_CHARS).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");

    render(
        SUGGESTIONS_PROMPT_TEMPLATE,
        &[
            ("semantic_score", semantic_score.as_str()),
            ("matching_keywords", or_none(&context.matching_keywords.join(", "))),
            ("missing_keywords", or_none(&context.missing_keywords.join(", "))),
            ("structure_issues", or_none(&structure_issues)),
            ("format_issues", or_none(&context.format_issues.join(", "))),
            ("experience", experience.as_str()),
            ("job_description", job_description),
            ("weak_matches", or_none(&weak_matches)),
        ],
    )
}

fn or_none(s: &str) -> &str {
    if s.is_empty() {
        NONE
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::MatchScore;
    use crate::testing::ScriptedModel;

    fn default_categories(list: &[Suggestion]) -> Vec<&str> {
        list.iter().map(|s| s.category.as_str()).collect()
    }

    #[test]
    fn test_default_list_has_four_fixed_categories() {
        assert_eq!(
            default_categories(&default_suggestions()),
            vec!["Keywords", "Structure", "Formatting", "Experience"]
        );
    }

    #[test]
    fn test_parse_fenced_array() {
        let response = "```json\n[{\"category\": \"Keywords\", \"suggestion\": \"Mention Kubernetes\"}]\n```";
        let parsed = parse_suggestions(response).unwrap();
        assert_eq!(parsed, vec![Suggestion::new("Keywords", "Mention Kubernetes")]);
    }

    #[test]
    fn test_parse_ignores_reasoning_tags_and_extra_fields() {
        let response = r#"<think>The candidate lacks AWS</think>
            [{"category": "Experience", "suggestion": "Quantify AWS cost savings", "priority": "high"}]"#;
        let parsed = parse_suggestions(response).unwrap();
        assert_eq!(parsed[0].category, "Experience");
    }

    #[test]
    fn test_response_without_array_is_rejected() {
        assert!(parse_suggestions("I think the resume is great!").is_none());
    }

    #[test]
    fn test_empty_array_is_rejected() {
        assert!(parse_suggestions("[]").is_none());
    }

    #[test]
    fn test_item_missing_a_field_rejects_the_whole_list() {
        let response = r#"[
            {"category": "Keywords", "suggestion": "Add Docker"},
            {"category": "Structure"}
        ]"#;
        assert!(parse_suggestions(response).is_none());
    }

    #[test]
    fn test_item_with_blank_field_rejects_the_whole_list() {
        let response = r#"[{"category": " ", "suggestion": "Add Docker"}]"#;
        assert!(parse_suggestions(response).is_none());
    }

    #[test]
    fn test_non_object_items_are_rejected() {
        assert!(parse_suggestions(r#"["Add Docker"]"#).is_none());
    }

    #[tokio::test]
    async fn test_no_array_falls_back_to_exactly_the_defaults() {
        let generator = SuggestionGenerator::new(Arc::new(ScriptedModel::replying(
            "Your resume looks fine to me.",
        )));
        let semantic = SemanticAnalysis::default();
        let context = SuggestionContext {
            semantic: &semantic,
            matching_keywords: &[],
            missing_keywords: &[],
            structure: &StructureReport::default(),
            format_issues: &[],
            experience: &ExperienceProfile::default(),
            job_description: "Rust engineer",
        };

        let suggestions = generator.generate(&context).await;
        assert_eq!(suggestions, default_suggestions());
    }

    #[tokio::test]
    async fn test_capability_failure_falls_back_to_defaults() {
        let generator = SuggestionGenerator::new(Arc::new(ScriptedModel::failing()));
        let semantic = SemanticAnalysis::default();
        let context = SuggestionContext {
            semantic: &semantic,
            matching_keywords: &[],
            missing_keywords: &[],
            structure: &StructureReport::default(),
            format_issues: &[],
            experience: &ExperienceProfile::default(),
            job_description: "",
        };

        assert_eq!(generator.generate(&context).await.len(), 4);
    }

    #[test]
    fn test_slightly_negative_similarity_renders_as_zero_percent() {
        let semantic = SemanticAnalysis {
            overall_similarity: -0.004,
            ..Default::default()
        };
        let context = SuggestionContext {
            semantic: &semantic,
            matching_keywords: &[],
            missing_keywords: &[],
            structure: &StructureReport::default(),
            format_issues: &[],
            experience: &ExperienceProfile::default(),
            job_description: "Rust engineer",
        };

        let prompt = build_prompt(&context);
        assert!(prompt.contains("Semantic Match: 0%"));
        assert!(!prompt.contains("-0"));
    }

    #[test]
    fn test_prompt_renders_lists_gaps_and_truncated_excerpts() {
        let long_excerpt = "x".repeat(150);
        let semantic = SemanticAnalysis {
            overall_similarity: 0.734,
            best_matches: vec![],
            weak_matches: vec![MatchScore {
                text: long_excerpt,
                score: 0.1,
            }],
        };
        let matching = vec!["python".to_string(), "aws".to_string()];
        let structure = StructureReport {
            experience: true,
            skills: true,
            ..Default::default()
        };
        let context = SuggestionContext {
            semantic: &semantic,
            matching_keywords: &matching,
            missing_keywords: &[],
            structure: &structure,
            format_issues: &[],
            experience: &ExperienceProfile::default(),
            job_description: "  ",
        };

        let prompt = build_prompt(&context);
        assert!(prompt.contains("Semantic Match: 73%"));
        assert!(prompt.contains("Matching Keywords: python, aws"));
        assert!(prompt.contains("Missing Keywords: None"));
        assert!(prompt.contains("Structure Issues: education, contact"));
        assert!(prompt.contains("Job Description: No job description provided"));
        assert!(prompt.ends_with(&"x".repeat(100)));
        assert!(!prompt.contains(&"x".repeat(101)));
    }
}
