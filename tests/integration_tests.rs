//! Integration tests for the candidate screener

use candidate_screener::config::ScoringWeights;
use candidate_screener::input::manager::InputManager;
use candidate_screener::screening::candidate::{CandidateProfile, WorkEntry};
use candidate_screener::screening::ranker::CandidateRanker;
use candidate_screener::screening::recommendation::RecommendationStatus;
use candidate_screener::screening::skills;
use std::io::Write;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    assert!(text.contains("AWS"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Python"));
    // Markdown formatting is stripped
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut file = tempfile::Builder::new()
        .suffix(".xyz")
        .tempfile()
        .unwrap();
    writeln!(file, "some content").unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_text(file.path()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_empty_file_rejected() {
    let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_text(file.path()).await;
    assert!(result.is_err());
}

/// Offline pipeline: fixture job description through requirement extraction,
/// local skills matching, scoring and ranking.
#[tokio::test]
async fn test_offline_screening_pipeline() {
    let mut manager = InputManager::new();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();

    let requirements = skills::extract_job_requirements(&job_text);
    // Vocabulary order, not job description order
    assert_eq!(
        requirements,
        vec![
            "python", "aws", "docker", "kubernetes", "git", "sql", "agile", "ci/cd"
        ]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>()
    );

    let strong = CandidateProfile {
        name: Some("John Doe".to_string()),
        email: Some("john.doe@example.com".to_string()),
        phone: Some("(555) 010-1234".to_string()),
        skills: ["Python", "Django", "SQL", "PostgreSQL", "AWS", "Docker", "Git"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        experience: vec![
            WorkEntry {
                company: "Initech".to_string(),
                role: "Software Engineer".to_string(),
                duration: "3 years".to_string(),
                responsibilities: vec!["Designed billing APIs".to_string()],
            },
            WorkEntry {
                company: "Hooli".to_string(),
                role: "Junior Developer".to_string(),
                duration: "1 year".to_string(),
                responsibilities: vec![],
            },
        ],
        education: vec!["Bachelor of Science in Computer Science".to_string()],
        total_experience_years: 4.0,
    };

    let junior = CandidateProfile {
        name: Some("Riley Junior".to_string()),
        skills: vec!["HTML".to_string(), "CSS".to_string()],
        ..Default::default()
    };

    let ranker = CandidateRanker::new(ScoringWeights::default()).unwrap();
    let strong_match = skills::estimate_skills_match(&strong.skills, &requirements);
    let junior_match = skills::estimate_skills_match(&junior.skills, &requirements);

    // 5 of 8 requirements are covered by direct containment
    assert_eq!(strong_match.match_score, 62);
    assert_eq!(junior_match.match_score, 0);

    let strong_result = ranker.score(&strong, &strong_match, Some(&job_text));
    let junior_result = ranker.score(&junior, &junior_match, Some(&job_text));
    assert!(strong_result.final_score > junior_result.final_score);

    let ranked = ranker.rank_pool(vec![junior_result, strong_result]);
    assert_eq!(ranked[0].rank, Some(1));
    assert!(ranked[0].final_score >= ranked[1].final_score);
    assert_eq!(ranked[1].recommendation.status, RecommendationStatus::Pass);
}
