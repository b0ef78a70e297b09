//! Analysis pipeline: runs every component for one resume/job pair.
//!
//! Flow: validate → (similarity ∥ experience) → skills, structure, format →
//!       keyword comparison → score → suggestions.
//!
//! Only missing input is an error. Every other failure is absorbed by the
//! component that hit it and shows up as a lower score or default suggestions.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::chunker::Chunker;
use crate::analysis::experience::ExperienceExtractor;
use crate::analysis::scoring::{compose, ScoreInputs};
use crate::analysis::similarity::SimilarityEngine;
use crate::analysis::skills::{compare_keywords, SkillExtractor};
use crate::analysis::structure::{check_format, check_structure};
use crate::analysis::suggestions::{SuggestionContext, SuggestionGenerator};
use crate::config::AnalysisConfig;
use crate::embedding::EmbeddingProvider;
use crate::errors::AppError;
use crate::llm_client::CompletionModel;
use crate::models::analysis::AnalysisResult;

pub struct Analyzer {
    similarity: SimilarityEngine,
    skills: SkillExtractor,
    experience: ExperienceExtractor,
    suggestions: SuggestionGenerator,
    max_resume_chars: usize,
}

impl Analyzer {
    pub fn new(
        config: &AnalysisConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn CompletionModel>,
    ) -> Self {
        Self {
            similarity: SimilarityEngine::new(Chunker::new(config.chunker), embedder),
            skills: SkillExtractor::new(&config.vocabulary),
            experience: ExperienceExtractor::new(llm.clone()),
            suggestions: SuggestionGenerator::new(llm),
            max_resume_chars: config.max_resume_chars,
        }
    }

    pub async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError> {
        if resume_text.trim().is_empty() || job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "Resume and job description are required".to_string(),
            ));
        }

        let span = info_span!("analysis", id = %Uuid::new_v4());
        self.run(resume_text, job_description).instrument(span).await
    }

    async fn run(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError> {
        info!(
            resume_chars = resume_text.chars().count(),
            job_chars = job_description.chars().count(),
            "starting analysis"
        );

        let (semantic, experience) = tokio::join!(
            self.similarity.analyze(resume_text, job_description),
            self.experience.extract(resume_text),
        );

        let resume_skills = self.skills.extract(resume_text);
        let job_skills = self.skills.extract(job_description);
        let structure = check_structure(resume_text);
        let format_issues = check_format(resume_text, self.max_resume_chars);
        let keywords = compare_keywords(&resume_skills, &job_skills);

        let breakdown = compose(&ScoreInputs {
            overall_similarity: semantic.overall_similarity,
            matching_keywords: keywords.matching.len(),
            missing_keywords: keywords.missing.len(),
            structure,
            experience_years: experience.years,
        });
        let ats_score = breakdown.ats_score();

        let suggestions = self
            .suggestions
            .generate(&SuggestionContext {
                semantic: &semantic,
                matching_keywords: &keywords.matching,
                missing_keywords: &keywords.missing,
                structure: &structure,
                format_issues: &format_issues,
                experience: &experience,
                job_description,
            })
            .await;

        info!(
            ats_score,
            composite = breakdown.composite,
            semantic = breakdown.semantic,
            keywords = breakdown.keywords,
            structure = breakdown.structure,
            experience = breakdown.experience,
            suggestions = suggestions.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            ats_score,
            suggestions,
            semantic_similarity: semantic.overall_similarity,
            best_matching_sections: semantic.best_matches,
            sections_needing_improvement: semantic.weak_matches,
            keyword_match: keywords.matching,
            missing_keywords: keywords.missing,
            structure,
            format_issues,
            experience,
        })
    }
}
