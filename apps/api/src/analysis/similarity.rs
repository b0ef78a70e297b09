//! Similarity Engine: embeds both documents chunk-by-chunk and measures how
//! well each resume chunk aligns with the job description.
//!
//! Reduction is max-then-mean: every resume chunk keeps its best cosine score
//! against any job chunk, and the overall similarity is the mean of those
//! maxima. Only resume chunks are iterated in the outer reduction, so the
//! measure is asymmetric.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::chunker::{Chunker, TextChunk};
use crate::embedding::{EmbeddingError, EmbeddingProvider};
use crate::models::analysis::MatchScore;

const MATCH_LIST_LEN: usize = 3;

/// Output of the similarity engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticAnalysis {
    pub overall_similarity: f32,
    /// Highest-scoring resume chunks, best first.
    pub best_matches: Vec<MatchScore>,
    /// Lowest-scoring resume chunks, weakest first.
    pub weak_matches: Vec<MatchScore>,
}

/// Cosine similarity of two equal-length vectors. Zero magnitude yields 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

pub struct SimilarityEngine {
    chunker: Chunker,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl SimilarityEngine {
    pub fn new(chunker: Chunker, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { chunker, embedder }
    }

    /// Never fails: any embedding or shape error degrades to a zero analysis.
    pub async fn analyze(&self, resume_text: &str, job_text: &str) -> SemanticAnalysis {
        match self.try_analyze(resume_text, job_text).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("Semantic analysis failed, falling back to zero similarity: {e}");
                SemanticAnalysis::default()
            }
        }
    }

    async fn try_analyze(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> Result<SemanticAnalysis, EmbeddingError> {
        let resume_chunks = self.chunker.split(resume_text);
        let job_chunks = self.chunker.split(job_text);

        if resume_chunks.is_empty() || job_chunks.is_empty() {
            return Ok(SemanticAnalysis::default());
        }

        let (resume_vectors, job_vectors) = tokio::try_join!(
            self.embed_chunks(&resume_chunks),
            self.embed_chunks(&job_chunks),
        )?;

        debug!(
            resume_chunks = resume_chunks.len(),
            job_chunks = job_chunks.len(),
            "computing pairwise similarity"
        );

        reduce_similarity(resume_chunks, &resume_vectors, &job_vectors)
    }

    async fn embed_chunks(&self, chunks: &[TextChunk]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let texts: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
        let vectors = self.embedder.embed_batch(&texts).await?;
        if vectors.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: vectors.len(),
            });
        }
        Ok(vectors)
    }
}

/// Max over job chunks per resume chunk, mean over resume chunks, then ranking.
fn reduce_similarity(
    resume_chunks: Vec<TextChunk>,
    resume_vectors: &[Vec<f32>],
    job_vectors: &[Vec<f32>],
) -> Result<SemanticAnalysis, EmbeddingError> {
    if resume_chunks.is_empty() || job_vectors.is_empty() {
        return Ok(SemanticAnalysis::default());
    }
    if resume_vectors.len() != resume_chunks.len() {
        return Err(EmbeddingError::CountMismatch {
            expected: resume_chunks.len(),
            actual: resume_vectors.len(),
        });
    }

    let dimension = resume_vectors[0].len();
    if let Some(bad) = resume_vectors
        .iter()
        .chain(job_vectors)
        .find(|v| v.len() != dimension)
    {
        return Err(EmbeddingError::DimensionMismatch(dimension, bad.len()));
    }

    let mut scores: Vec<MatchScore> = resume_chunks
        .into_iter()
        .zip(resume_vectors)
        .map(|(chunk, resume_vec)| {
            let best = job_vectors
                .iter()
                .map(|job_vec| cosine_similarity(resume_vec, job_vec))
                .fold(f32::NEG_INFINITY, f32::max);
            MatchScore {
                text: chunk.content,
                score: best,
            }
        })
        .collect();

    let overall_similarity = scores.iter().map(|m| m.score).sum::<f32>() / scores.len() as f32;

    scores.sort_by(|a, b| b.score.total_cmp(&a.score));

    let best_matches = scores.iter().take(MATCH_LIST_LEN).cloned().collect();
    let weak_matches = scores.iter().rev().take(MATCH_LIST_LEN).cloned().collect();

    Ok(SemanticAnalysis {
        overall_similarity,
        best_matches,
        weak_matches,
    })
}
