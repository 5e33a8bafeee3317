//! Hiring recommendation thresholds plus strengths/gap analysis

use crate::screening::scorer::ComponentScores;
use crate::screening::skills::SkillsMatchResult;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationStatus {
    #[serde(rename = "Strong Hire")]
    StrongHire,
    Hire,
    Maybe,
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub status: RecommendationStatus,
    pub confidence: Confidence,
    pub next_step: String,
}

impl fmt::Display for RecommendationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecommendationStatus::StrongHire => "Strong Hire",
            RecommendationStatus::Hire => "Hire",
            RecommendationStatus::Maybe => "Maybe",
            RecommendationStatus::Pass => "Pass",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::High => "High",
            Confidence::MediumHigh => "Medium-High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

/// Map a final score to a hiring recommendation. Thresholds are inclusive
/// lower bounds, checked high to low.
pub fn recommend(final_score: f32) -> Recommendation {
    if final_score >= 80.0 {
        Recommendation {
            status: RecommendationStatus::StrongHire,
            confidence: Confidence::High,
            next_step: "Schedule technical interview immediately".to_string(),
        }
    } else if final_score >= 65.0 {
        Recommendation {
            status: RecommendationStatus::Hire,
            confidence: Confidence::MediumHigh,
            next_step: "Schedule phone screening followed by technical interview".to_string(),
        }
    } else if final_score >= 50.0 {
        Recommendation {
            status: RecommendationStatus::Maybe,
            confidence: Confidence::Medium,
            next_step: "Phone screening to assess cultural fit and communication".to_string(),
        }
    } else {
        Recommendation {
            status: RecommendationStatus::Pass,
            confidence: Confidence::Low,
            next_step: "Send polite rejection email".to_string(),
        }
    }
}

/// Derive strength notes from the component scores and skill breadth.
/// Falls back to a single note when nothing else qualifies.
pub fn identify_strengths(scores: &ComponentScores, skills_count: usize) -> Vec<String> {
    let mut strengths = Vec::new();

    if scores.skills_score >= 70.0 {
        strengths.push("Strong technical skill match".to_string());
    }

    if scores.experience_score >= 70.0 {
        strengths.push("Relevant work experience".to_string());
    }

    if scores.education_score >= 80.0 {
        strengths.push("Strong educational background".to_string());
    }

    if skills_count > 8 {
        strengths.push("Diverse technical skill set".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Potential for growth".to_string());
    }

    strengths
}

/// Derive improvement notes; empty when no condition triggers.
pub fn identify_improvements(
    scores: &ComponentScores,
    skills_match: &SkillsMatchResult,
) -> Vec<String> {
    let mut improvements = Vec::new();

    if scores.skills_score < 50.0 {
        improvements.push("Technical skills need development".to_string());
    }

    if scores.experience_score < 50.0 {
        improvements.push("Limited relevant experience".to_string());
    }

    if !skills_match.missing_skills.is_empty() {
        let top_missing: Vec<&str> = skills_match
            .missing_skills
            .iter()
            .take(3)
            .map(|s| s.as_str())
            .collect();
        improvements.push(format!("Missing key skills: {}", top_missing.join(", ")));
    }

    improvements
}
