//! Composite scoring: four component sub-scores and their weighted total

use crate::config::ScoringWeights;
use crate::screening::candidate::CandidateProfile;
use crate::screening::skills::SkillsMatchResult;
use serde::{Deserialize, Serialize};

/// The four independent sub-scores, each in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub skills_score: f32,
    pub experience_score: f32,
    pub education_score: f32,
    pub additional_score: f32,
}

impl ComponentScores {
    pub fn compute(profile: &CandidateProfile, skills_match: Option<&SkillsMatchResult>) -> Self {
        Self {
            skills_score: skills_score(skills_match),
            experience_score: experience_score(profile),
            education_score: education_score(profile),
            additional_score: additional_score(profile),
        }
    }

    /// Weighted combination, rounded to one decimal place.
    pub fn final_score(&self, weights: &ScoringWeights) -> f32 {
        let total = self.skills_score * weights.skills
            + self.experience_score * weights.experience
            + self.education_score * weights.education
            + self.additional_score * weights.additional;
        (total * 10.0).round() / 10.0
    }
}

fn skills_score(skills_match: Option<&SkillsMatchResult>) -> f32 {
    skills_match.map_or(0.0, |m| f32::from(m.match_score))
}

/// Base score by years of experience plus a small bonus for role diversity.
fn experience_score(profile: &CandidateProfile) -> f32 {
    let years = profile.total_experience_years;

    if profile.experience.is_empty() && years == 0.0 {
        return 20.0; // entry level
    }

    let base_score = if years <= 1.0 {
        30.0
    } else if years <= 3.0 {
        50.0
    } else if years <= 5.0 {
        70.0
    } else if years <= 10.0 {
        85.0
    } else {
        95.0
    };

    let diversity_bonus = ((profile.experience.len() * 5) as f32).min(15.0);

    (base_score + diversity_bonus).min(100.0)
}

/// Classify the highest degree mentioned anywhere in the education entries.
/// Tier priority is fixed; the first tier whose keyword appears wins.
fn education_score(profile: &CandidateProfile) -> f32 {
    if profile.education.is_empty() {
        return 40.0; // credit for work experience only
    }

    let education_text = profile.education.join(" ").to_lowercase();

    if education_text.contains("phd") || education_text.contains("doctorate") {
        100.0
    } else if education_text.contains("master") || education_text.contains("mba") {
        85.0
    } else if education_text.contains("bachelor") || education_text.contains("degree") {
        75.0
    } else if education_text.contains("associate") || education_text.contains("diploma") {
        60.0
    } else {
        50.0
    }
}

/// Contact details, breadth of skills and documented responsibilities.
fn additional_score(profile: &CandidateProfile) -> f32 {
    let mut score: f32 = 50.0;

    if profile.has_email() {
        score += 10.0;
    }

    if profile.has_phone() {
        score += 10.0;
    }

    if profile.skills.len() > 5 {
        score += 15.0;
    } else if profile.skills.len() > 3 {
        score += 10.0;
    }

    if profile
        .experience
        .iter()
        .any(|entry| !entry.responsibilities.is_empty())
    {
        score += 15.0;
    }

    score.min(100.0)
}
