use serde::{Deserialize, Serialize};

/// One resume chunk together with its best similarity against the job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub text: String,
    /// Cosine similarity, -1.0 to 1.0
    pub score: f32,
}

/// Presence of the four canonical resume sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureReport {
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub contact: bool,
}

impl StructureReport {
    pub const SECTION_COUNT: usize = 4;

    /// Sections in canonical order, paired with their presence flag.
    pub fn sections(&self) -> [(&'static str, bool); Self::SECTION_COUNT] {
        [
            ("experience", self.experience),
            ("education", self.education),
            ("skills", self.skills),
            ("contact", self.contact),
        ]
    }

    pub fn present_count(&self) -> usize {
        self.sections().iter().filter(|(_, present)| *present).count()
    }

    pub fn missing_sections(&self) -> Vec<&'static str> {
        self.sections()
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Summarized work history extracted from the resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceProfile {
    pub years: f64,
    /// Most recent first.
    pub titles: Vec<String>,
    pub achievements: Vec<String>,
}

/// A single categorized improvement item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub suggestion: String,
}

impl Suggestion {
    pub fn new(category: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Full analysis returned to callers, serialized as a flat camelCase object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub ats_score: u32, // 0-100
    pub suggestions: Vec<Suggestion>,
    pub semantic_similarity: f32,
    pub best_matching_sections: Vec<MatchScore>,
    pub sections_needing_improvement: Vec<MatchScore>,
    pub keyword_match: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub structure: StructureReport,
    pub format_issues: Vec<String>,
    pub experience: ExperienceProfile,
}
