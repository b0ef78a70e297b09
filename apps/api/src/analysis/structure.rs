//! Structure and format checks over the whole resume text.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::analysis::StructureReport;

static EXPERIENCE: LazyLock<Regex> = LazyLock::new(|| section_pattern("experience|work history|employment"));
static EDUCATION: LazyLock<Regex> = LazyLock::new(|| section_pattern("education|academic|qualification"));
static SKILLS: LazyLock<Regex> = LazyLock::new(|| section_pattern("skills|technical skills|competencies"));
static CONTACT: LazyLock<Regex> = LazyLock::new(|| section_pattern("contact|email|phone|address"));

fn section_pattern(alternatives: &str) -> Regex {
    Regex::new(&format!("(?i){alternatives}")).expect("section pattern is valid")
}

/// Tests each canonical section pattern anywhere in the text, not just in headers.
pub fn check_structure(text: &str) -> StructureReport {
    StructureReport {
        experience: EXPERIENCE.is_match(text),
        education: EDUCATION.is_match(text),
        skills: SKILLS.is_match(text),
        contact: CONTACT.is_match(text),
    }
}

pub const SPECIAL_CHARACTERS_ISSUE: &str = "Contains special characters";
pub const TOO_LONG_ISSUE: &str = "Resume might be too long";

/// Flags text-level problems: decoding garbage (U+FFFD) and excessive length.
pub fn check_format(text: &str, max_chars: usize) -> Vec<String> {
    let mut issues = Vec::new();
    if text.contains(char::REPLACEMENT_CHARACTER) {
        issues.push(SPECIAL_CHARACTERS_ISSUE.to_string());
    }
    if text.chars().count() > max_chars {
        issues.push(TOO_LONG_ISSUE.to_string());
    }
    issues
}
