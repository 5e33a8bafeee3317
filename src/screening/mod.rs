//! Candidate scoring and ranking core
//!
//! Everything in this module is pure and synchronous: missing candidate data
//! maps to defined floor values instead of errors, so scoring never fails.

pub mod candidate;
pub mod interview;
pub mod ranker;
pub mod recommendation;
pub mod scorer;
pub mod skills;

pub use candidate::{CandidateProfile, WorkEntry};
pub use interview::InterviewQuestions;
pub use ranker::{CandidateRanker, RankingResult};
pub use recommendation::{Confidence, Recommendation, RecommendationStatus};
pub use scorer::ComponentScores;
pub use skills::SkillsMatchResult;
