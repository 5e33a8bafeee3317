//! Job requirement extraction and the deterministic skills-match fallback

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of comparing candidate skills against job requirements.
///
/// Produced either by the LLM matching collaborator or by
/// [`estimate_skills_match`] when that call fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsMatchResult {
    #[serde(default)]
    pub match_score: u8,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub additional_skills: Vec<String>,
    #[serde(default)]
    pub explanation: String,
}

/// Known technology vocabulary searched for in job descriptions.
///
/// Extraction output follows this list's order, not the order of the
/// job description text.
const REQUIREMENT_VOCABULARY: &[&str] = &[
    "python", "java", "javascript", "react", "angular", "vue", "node.js",
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git",
    "sql", "mongodb", "postgresql", "mysql", "redis",
    "machine learning", "data science", "artificial intelligence",
    "html", "css", "bootstrap", "tailwind", "sass",
    "django", "flask", "spring", "express", ".net",
    "agile", "scrum", "devops", "ci/cd", "testing",
];

/// Extract requirement keywords from a free-text job description by
/// case-insensitive substring search against the fixed vocabulary.
pub fn extract_job_requirements(job_description: &str) -> Vec<String> {
    let matcher = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(REQUIREMENT_VOCABULARY)
        .expect("requirement vocabulary is a valid pattern set");

    let mut found = vec![false; REQUIREMENT_VOCABULARY.len()];
    for mat in matcher.find_overlapping_iter(job_description) {
        found[mat.pattern().as_usize()] = true;
    }

    REQUIREMENT_VOCABULARY
        .iter()
        .zip(found)
        .filter(|(_, hit)| *hit)
        .map(|(term, _)| term.to_string())
        .collect()
}

/// Deterministic fallback matcher used when the LLM collaborator is
/// unavailable or returns an undecodable response.
///
/// A requirement counts as matched when its lowercase form is contained in,
/// or contains, any candidate skill. The first containing skill wins; the
/// matched entry keeps the requirement list's casing. Known quirk: plain
/// containment lets "java" match "javascript".
pub fn estimate_skills_match(
    candidate_skills: &[String],
    job_requirements: &[String],
) -> SkillsMatchResult {
    if candidate_skills.is_empty() || job_requirements.is_empty() {
        return SkillsMatchResult {
            match_score: 0,
            matched_skills: Vec::new(),
            missing_skills: job_requirements.to_vec(),
            additional_skills: candidate_skills.to_vec(),
            explanation: "No skills to compare".to_string(),
        };
    }

    let candidate_lower: Vec<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();
    let requirements_lower: HashSet<String> =
        job_requirements.iter().map(|s| s.to_lowercase()).collect();

    let mut matched = Vec::new();
    for requirement in job_requirements {
        let req_lower = requirement.to_lowercase();
        if candidate_lower
            .iter()
            .any(|skill| req_lower.contains(skill.as_str()) || skill.contains(&req_lower))
        {
            matched.push(requirement.clone());
        }
    }

    // Duplicate requirements inflate the denominator on purpose
    let match_score = (matched.len() * 100 / job_requirements.len()) as u8;

    let matched_lower: HashSet<String> = matched.iter().map(|s| s.to_lowercase()).collect();
    let missing_skills: Vec<String> = job_requirements
        .iter()
        .filter(|r| !matched_lower.contains(&r.to_lowercase()))
        .cloned()
        .collect();

    let additional_skills: Vec<String> = candidate_skills
        .iter()
        .filter(|s| !requirements_lower.contains(&s.to_lowercase()))
        .cloned()
        .collect();

    SkillsMatchResult {
        match_score,
        explanation: format!(
            "Matched {} out of {} required skills",
            matched.len(),
            job_requirements.len()
        ),
        matched_skills: matched,
        missing_skills,
        additional_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basic_match() {
        let result = estimate_skills_match(
            &strings(&["Python", "SQL"]),
            &strings(&["python", "aws"]),
        );
        assert_eq!(result.match_score, 50);
        assert_eq!(result.matched_skills, strings(&["python"]));
        assert_eq!(result.missing_skills, strings(&["aws"]));
        assert_eq!(result.additional_skills, strings(&["SQL"]));
        assert_eq!(result.explanation, "Matched 1 out of 2 required skills");
    }

    #[test]
    fn test_empty_candidate_skills() {
        let result = estimate_skills_match(&[], &strings(&["java"]));
        assert_eq!(result.match_score, 0);
        assert_eq!(result.missing_skills, strings(&["java"]));
        assert!(result.additional_skills.is_empty());
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.explanation, "No skills to compare");
    }

    #[test]
    fn test_empty_requirements() {
        let result = estimate_skills_match(&strings(&["Rust"]), &[]);
        assert_eq!(result.match_score, 0);
        assert_eq!(result.additional_skills, strings(&["Rust"]));
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_bidirectional_containment() {
        // candidate skill contained in requirement
        let result = estimate_skills_match(
            &strings(&["java"]),
            &strings(&["javascript"]),
        );
        assert_eq!(result.match_score, 100);
        assert_eq!(result.matched_skills, strings(&["javascript"]));

        // requirement contained in candidate skill
        let result = estimate_skills_match(
            &strings(&["JavaScript frameworks"]),
            &strings(&["javascript"]),
        );
        assert_eq!(result.match_score, 100);
    }

    #[test]
    fn test_matched_entries_keep_requirement_casing() {
        let result = estimate_skills_match(&strings(&["python"]), &strings(&["Python"]));
        assert_eq!(result.matched_skills, strings(&["Python"]));
    }

    #[test]
    fn test_score_is_floored() {
        // 1 of 3 requirements -> 33, not 34
        let result = estimate_skills_match(
            &strings(&["go"]),
            &strings(&["go", "aws", "sql"]),
        );
        assert_eq!(result.match_score, 33);
    }

    #[test]
    fn test_duplicate_requirements_count_in_denominator() {
        let result = estimate_skills_match(
            &strings(&["python"]),
            &strings(&["python", "python", "aws", "aws"]),
        );
        assert_eq!(result.match_score, 50);
    }

    #[test]
    fn test_extract_requirements_follows_vocabulary_order() {
        let text = "We want SQL and AWS plus Python experience and CI/CD discipline.";
        let requirements = extract_job_requirements(text);
        assert_eq!(requirements, strings(&["python", "aws", "sql", "ci/cd"]));
    }

    #[test]
    fn test_extract_requirements_substring_semantics() {
        // "javascript" contains "java"; both vocabulary terms are reported
        let requirements = extract_job_requirements("Senior JavaScript developer");
        assert!(requirements.contains(&"java".to_string()));
        assert!(requirements.contains(&"javascript".to_string()));
    }

    #[test]
    fn test_extract_requirements_empty_text() {
        assert!(extract_job_requirements("We need a friendly barista").is_empty());
    }
}
