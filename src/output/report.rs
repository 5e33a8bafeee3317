//! Serializable screening reports

use crate::screening::candidate::CandidateProfile;
use crate::screening::interview::InterviewQuestions;
use crate::screening::ranker::RankingResult;
use crate::screening::skills::SkillsMatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full report for a single screened candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub generated_at: DateTime<Utc>,
    pub resume_path: String,
    pub candidate: CandidateProfile,
    pub job_requirements: Vec<String>,
    pub skills_match: SkillsMatchResult,
    pub ranking: RankingResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_questions: Option<InterviewQuestions>,
    /// True when the local estimator produced the skills match
    pub used_match_fallback: bool,
}

impl ScreeningReport {
    pub fn new(
        resume_path: String,
        candidate: CandidateProfile,
        job_requirements: Vec<String>,
        skills_match: SkillsMatchResult,
        ranking: RankingResult,
        interview_questions: Option<InterviewQuestions>,
        used_match_fallback: bool,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            resume_path,
            candidate,
            job_requirements,
            skills_match,
            ranking,
            interview_questions,
            used_match_fallback,
        }
    }
}

/// One line of a ranked candidate pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolEntry {
    pub candidate_name: String,
    pub resume_path: String,
    pub ranking: RankingResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolReport {
    pub generated_at: DateTime<Utc>,
    pub job_requirements: Vec<String>,
    pub entries: Vec<PoolEntry>,
}

impl PoolReport {
    pub fn new(job_requirements: Vec<String>, entries: Vec<PoolEntry>) -> Self {
        Self {
            generated_at: Utc::now(),
            job_requirements,
            entries,
        }
    }
}
