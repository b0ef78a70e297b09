//! Score Composer: folds the four analysis signals into the 0-100 ATS score.
//!
//! Cosine similarity can be negative, which would push the weighted sum below
//! zero. The composite is therefore clamped to 0-100 after rounding; the raw
//! weighted sum stays available on `ScoreBreakdown::composite` for logging.

use serde::Serialize;

use crate::models::analysis::StructureReport;

/// Fixed component weights. They sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    pub semantic: f64,
    pub keywords: f64,
    pub structure: f64,
    pub experience: f64,
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    semantic: 0.35,
    keywords: 0.25,
    structure: 0.20,
    experience: 0.20,
};

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.semantic + self.keywords + self.structure + self.experience
    }
}

/// Raw signals consumed by the composer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs {
    pub overall_similarity: f32,
    pub matching_keywords: usize,
    pub missing_keywords: usize,
    pub structure: StructureReport,
    pub experience_years: f64,
}

/// Each sub-score on a 0-100 scale, plus the unclamped weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub semantic: f64,
    pub keywords: f64,
    pub structure: f64,
    pub experience: f64,
    pub composite: f64,
}

impl ScoreBreakdown {
    pub fn from_sub_scores(semantic: f64, keywords: f64, structure: f64, experience: f64) -> Self {
        debug_assert!((WEIGHTS.total() - 1.0).abs() < 1e-9);
        let composite = semantic * WEIGHTS.semantic
            + keywords * WEIGHTS.keywords
            + structure * WEIGHTS.structure
            + experience * WEIGHTS.experience;
        Self {
            semantic,
            keywords,
            structure,
            experience,
            composite,
        }
    }

    /// Rounded composite, clamped to 0-100.
    pub fn ats_score(&self) -> u32 {
        self.composite.round().clamp(0.0, 100.0) as u32
    }
}

pub fn compose(inputs: &ScoreInputs) -> ScoreBreakdown {
    let semantic = f64::from(inputs.overall_similarity) * 100.0;

    let total_keywords = inputs.matching_keywords + inputs.missing_keywords;
    let keywords = if total_keywords > 0 {
        inputs.matching_keywords as f64 / total_keywords as f64 * 100.0
    } else {
        0.0
    };

    let structure = inputs.structure.present_count() as f64
        / StructureReport::SECTION_COUNT as f64
        * 100.0;

    let experience = (inputs.experience_years * 10.0).min(100.0);

    ScoreBreakdown::from_sub_scores(semantic, keywords, structure, experience)
}
