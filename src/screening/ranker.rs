//! Candidate ranking: one record per candidate, ordered across the pool

use crate::config::ScoringWeights;
use crate::error::Result;
use crate::screening::candidate::CandidateProfile;
use crate::screening::recommendation::{self, Recommendation};
use crate::screening::scorer::ComponentScores;
use crate::screening::skills::SkillsMatchResult;
use serde::{Deserialize, Serialize};

/// Complete scoring record for one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResult {
    pub final_score: f32,
    pub component_scores: ComponentScores,
    pub recommendation: Recommendation,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    /// 1-based position, assigned only when ranked as part of a pool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

/// Stateless ranking service carrying only the validated weight configuration.
pub struct CandidateRanker {
    weights: ScoringWeights,
}

impl CandidateRanker {
    pub fn new(weights: ScoringWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single candidate. Total: every sub-score defines its own
    /// floor for missing data, so this cannot fail.
    ///
    /// The job description text is accepted for future use but does not
    /// currently influence the score.
    pub fn score(
        &self,
        profile: &CandidateProfile,
        skills_match: &SkillsMatchResult,
        _job_description: Option<&str>,
    ) -> RankingResult {
        let component_scores = ComponentScores::compute(profile, Some(skills_match));
        let final_score = component_scores.final_score(&self.weights);

        RankingResult {
            final_score,
            recommendation: recommendation::recommend(final_score),
            strengths: recommendation::identify_strengths(&component_scores, profile.skills.len()),
            areas_for_improvement: recommendation::identify_improvements(
                &component_scores,
                skills_match,
            ),
            component_scores,
            rank: None,
        }
    }

    /// Order a pool of results by final score, highest first, and assign
    /// 1-based ranks. The sort is stable, so ties keep their input order.
    pub fn rank_pool(&self, mut results: Vec<RankingResult>) -> Vec<RankingResult> {
        results.sort_by(|a, b| {
            b.final_score
                .partial_cmp(&a.final_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for (index, result) in results.iter_mut().enumerate() {
            result.rank = Some(index + 1);
        }

        results
    }
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::candidate::WorkEntry;
    use crate::screening::recommendation::RecommendationStatus;
    use crate::screening::skills::estimate_skills_match;

    fn result_with_score(final_score: f32) -> RankingResult {
        let ranker = CandidateRanker::default();
        let mut result =
            ranker.score(&CandidateProfile::default(), &SkillsMatchResult::default(), None);
        result.final_score = final_score;
        result
    }

    #[test]
    fn test_end_to_end_entry_level_candidate() {
        let profile = CandidateProfile {
            name: Some("Sam".to_string()),
            email: Some("sam@example.com".to_string()),
            phone: Some("555-0101".to_string()),
            skills: vec!["Python".to_string()],
            ..Default::default()
        };
        let skills_match = SkillsMatchResult {
            match_score: 60,
            ..Default::default()
        };

        let result = CandidateRanker::default().score(&profile, &skills_match, None);

        assert_eq!(result.component_scores.skills_score, 60.0);
        assert_eq!(result.component_scores.experience_score, 20.0);
        assert_eq!(result.component_scores.education_score, 40.0);
        assert_eq!(result.component_scores.additional_score, 70.0);
        assert_eq!(result.final_score, 46.5);
        assert_eq!(result.recommendation.status, RecommendationStatus::Pass);
        assert!(result.rank.is_none());
    }

    #[test]
    fn test_score_with_estimated_match() {
        let profile = CandidateProfile {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            phone: Some("555-0100".to_string()),
            skills: vec![
                "Python".to_string(),
                "Django".to_string(),
                "SQL".to_string(),
                "AWS".to_string(),
                "Docker".to_string(),
                "Git".to_string(),
            ],
            experience: vec![WorkEntry {
                company: "Initech".to_string(),
                role: "Backend Engineer".to_string(),
                duration: "4 years".to_string(),
                responsibilities: vec!["Built billing APIs".to_string()],
            }],
            education: vec!["Bachelor of Science in CS".to_string()],
            total_experience_years: 4.0,
        };
        let requirements = vec!["python".to_string(), "aws".to_string(), "sql".to_string()];
        let skills_match = estimate_skills_match(&profile.skills, &requirements);
        assert_eq!(skills_match.match_score, 100);

        let result = CandidateRanker::default().score(&profile, &skills_match, None);
        // 100*.4 + 75*.3 + 75*.15 + 100*.15 = 40 + 22.5 + 11.25 + 15 = 88.8 (rounded)
        assert_eq!(result.final_score, 88.8);
        assert_eq!(result.recommendation.status, RecommendationStatus::StrongHire);
        assert!(result
            .strengths
            .contains(&"Strong technical skill match".to_string()));
        assert!(result.areas_for_improvement.is_empty());
    }

    #[test]
    fn test_rank_pool_orders_descending() {
        let ranker = CandidateRanker::default();
        let pool = vec![
            result_with_score(46.5),
            result_with_score(88.8),
            result_with_score(62.0),
        ];

        let ranked = ranker.rank_pool(pool);
        let scores: Vec<f32> = ranked.iter().map(|r| r.final_score).collect();
        assert_eq!(scores, vec![88.8, 62.0, 46.5]);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank.unwrap()).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_rank_pool_empty() {
        assert!(CandidateRanker::default().rank_pool(Vec::new()).is_empty());
    }

    #[test]
    fn test_rank_pool_idempotent() {
        let ranker = CandidateRanker::default();
        let pool = vec![result_with_score(70.0), result_with_score(55.0)];
        let once = ranker.rank_pool(pool);
        let twice = ranker.rank_pool(once.clone());

        let ranks_once: Vec<_> = once.iter().map(|r| (r.final_score as i32, r.rank)).collect();
        let ranks_twice: Vec<_> = twice.iter().map(|r| (r.final_score as i32, r.rank)).collect();
        assert_eq!(ranks_once, ranks_twice);
    }

    #[test]
    fn test_rank_pool_stable_for_ties() {
        let ranker = CandidateRanker::default();
        let mut first = result_with_score(50.0);
        first.strengths = vec!["first".to_string()];
        let mut second = result_with_score(50.0);
        second.strengths = vec!["second".to_string()];

        let ranked = ranker.rank_pool(vec![first, second]);
        assert_eq!(ranked[0].strengths, vec!["first".to_string()]);
        assert_eq!(ranked[0].rank, Some(1));
        assert_eq!(ranked[1].strengths, vec!["second".to_string()]);
        assert_eq!(ranked[1].rank, Some(2));
    }

    #[test]
    fn test_order_determined_by_score_not_input_order() {
        let ranker = CandidateRanker::default();
        let forward = ranker.rank_pool(vec![result_with_score(30.0), result_with_score(90.0)]);
        let reversed = ranker.rank_pool(vec![result_with_score(90.0), result_with_score(30.0)]);

        let forward_scores: Vec<f32> = forward.iter().map(|r| r.final_score).collect();
        let reversed_scores: Vec<f32> = reversed.iter().map(|r| r.final_score).collect();
        assert_eq!(forward_scores, reversed_scores);
    }

    #[test]
    fn test_ranker_rejects_invalid_weights() {
        let weights = ScoringWeights {
            skills: 0.9,
            experience: 0.9,
            education: 0.0,
            additional: 0.0,
        };
        assert!(CandidateRanker::new(weights).is_err());
    }
}
