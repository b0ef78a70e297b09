// Prompt constants for the analysis components.
// Templates use `{name}` placeholders filled by llm_client::prompts::render.

/// System prompt for experience extraction.
pub const EXPERIENCE_SYSTEM: &str = "You are a resume analyzer. \
    Analyze resume text and extract work experience details. \
    Format the response as a JSON object only, no other text.";

/// Experience extraction prompt. Replace `{resume_text}` before sending.
pub const EXPERIENCE_PROMPT_TEMPLATE: &str = r#"Analyze this resume text and extract work experience details.

Resume Text: {resume_text}

Return a JSON object with exactly these fields:
{
  "years": 5,
  "titles": ["Senior Engineer", "Engineer"],
  "achievements": ["Cut deployment time by 40%"]
}

- "years": total years of experience as a number
- "titles": job titles from most recent to oldest
- "achievements": notable achievements"#;

/// System prompt for suggestion generation.
pub const SUGGESTIONS_SYSTEM: &str = "You are an expert resume analyzer. \
    Your task is to provide improvement suggestions based on resume analysis. \
    You must respond with ONLY a JSON array of objects. Each object must have exactly these fields:\n\
    - \"category\": The category of the suggestion (e.g., \"Keywords\", \"Structure\", \"Experience\", \"Formatting\")\n\
    - \"suggestion\": A specific, actionable suggestion\n";

/// Suggestion prompt. All placeholders are pre-rendered strings.
pub const SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"Please analyze this resume data and provide suggestions:

Semantic Match: {semantic_score}%
Matching Keywords: {matching_keywords}
Missing Keywords: {missing_keywords}
Structure Issues: {structure_issues}
Format Issues: {format_issues}
Experience: {experience}
Job Description: {job_description}

Weak Areas:
{weak_matches}"#;
