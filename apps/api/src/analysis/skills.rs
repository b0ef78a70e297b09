//! Skill/keyword extraction against a controlled vocabulary.
//!
//! Matching is a case-insensitive literal substring test with no word-boundary
//! check, so short terms like "c" or "java" also hit inside longer words
//! ("javascript" yields both "javascript" and "java"). Scoring only consumes
//! the size of the matched sets.

const DEFAULT_VOCABULARY: &[&str] = &[
    "javascript",
    "python",
    "java",
    "reactjs",
    "node.js",
    "c++",
    "c",
    "mongodb",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "machine learning",
    "data analysis",
    "agile",
    "project management",
    "leadership",
    "communication",
    "problem solving",
];

pub fn default_vocabulary() -> Vec<String> {
    DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: Vec<String>,
}

impl SkillExtractor {
    /// Normalizes terms to lowercase and drops blanks and repeats, keeping first-seen order.
    pub fn new(vocabulary: &[String]) -> Self {
        let mut terms: Vec<String> = Vec::with_capacity(vocabulary.len());
        for term in vocabulary {
            let term = term.trim().to_lowercase();
            if !term.is_empty() && !terms.contains(&term) {
                terms.push(term);
            }
        }
        Self { vocabulary: terms }
    }

    /// Returns the vocabulary terms present in `text`, in vocabulary order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|term| haystack.contains(term.as_str()))
            .cloned()
            .collect()
    }
}

/// Result of comparing resume skills against job-description skills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordComparison {
    /// Resume skills also required by the job, in resume order.
    pub matching: Vec<String>,
    /// Job skills absent from the resume, in job order.
    pub missing: Vec<String>,
}

pub fn compare_keywords(resume_skills: &[String], job_skills: &[String]) -> KeywordComparison {
    let matching = resume_skills
        .iter()
        .filter(|skill| job_skills.contains(skill))
        .cloned()
        .collect();
    let missing = job_skills
        .iter()
        .filter(|skill| !resume_skills.contains(skill))
        .cloned()
        .collect();

    KeywordComparison { matching, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(&default_vocabulary())
    }

    #[test]
    fn test_case_insensitive_match_is_reported_once() {
        let skills = extractor().extract("Python developer. PYTHON scripting. python!");
        assert_eq!(skills.iter().filter(|s| *s == "python").count(), 1);
    }

    #[test]
    fn test_result_follows_vocabulary_order_not_text_order() {
        let skills = extractor().extract("Kubernetes, then SQL, then Python");
        assert_eq!(skills, vec!["python", "sql", "kubernetes"]);
    }

    #[test]
    fn test_substring_policy_has_no_word_boundaries() {
        let skills = extractor().extract("JavaScript");
        // "javascript" contains "java" and "c" (from "script")
        assert_eq!(skills, vec!["javascript", "java", "c"]);
    }

    #[test]
    fn test_multi_word_terms_match() {
        let skills = extractor().extract("Strong Problem Solving and Machine Learning background");
        assert!(skills.contains(&"problem solving".to_string()));
        assert!(skills.contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Kubernetes, AWS, leadership, agile";
        let e = extractor();
        assert_eq!(e.extract(text), e.extract(text));
    }

    #[test]
    fn test_no_terms_in_text() {
        assert!(extractor().extract("Gardening, hiking, pottery").is_empty());
    }

    #[test]
    fn test_vocabulary_is_normalized_and_deduplicated() {
        let e = SkillExtractor::new(&[
            "Rust".to_string(),
            "rust".to_string(),
            "  ".to_string(),
            "Go".to_string(),
        ]);
        assert_eq!(e.extract("RUST and GO"), vec!["rust", "go"]);
    }

    #[test]
    fn test_compare_keywords_splits_matching_and_missing() {
        let resume = vec!["python".to_string(), "aws".to_string(), "docker".to_string()];
        let job = vec!["python".to_string(), "aws".to_string(), "leadership".to_string()];

        let cmp = compare_keywords(&resume, &job);
        assert_eq!(cmp.matching, vec!["python", "aws"]);
        assert_eq!(cmp.missing, vec!["leadership"]);
    }

    #[test]
    fn test_compare_keywords_with_empty_job_skills() {
        let cmp = compare_keywords(&["python".to_string()], &[]);
        assert!(cmp.matching.is_empty());
        assert!(cmp.missing.is_empty());
    }
}
