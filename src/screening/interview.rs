//! Interview question generation with a local template fallback

use crate::screening::candidate::CandidateProfile;
use serde::{Deserialize, Serialize};

const QUESTIONS_PER_CATEGORY: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewQuestions {
    #[serde(default)]
    pub technical_questions: Vec<String>,
    #[serde(default)]
    pub behavioral_questions: Vec<String>,
    #[serde(default)]
    pub experience_questions: Vec<String>,
}

impl InterviewQuestions {
    pub fn is_empty(&self) -> bool {
        self.technical_questions.is_empty()
            && self.behavioral_questions.is_empty()
            && self.experience_questions.is_empty()
    }
}

/// Build template questions from the candidate's own skills and history.
/// Used when the LLM collaborator is unavailable or undecodable.
pub fn template_questions(profile: &CandidateProfile) -> InterviewQuestions {
    let skills_lower: Vec<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();

    let mut technical_questions = Vec::new();
    if skills_lower.iter().any(|s| s == "python") {
        technical_questions
            .push("Can you explain the difference between lists and tuples in Python?".to_string());
    }
    if skills_lower.iter().any(|s| s == "javascript") {
        technical_questions.push(
            "What is the difference between let, const, and var in JavaScript?".to_string(),
        );
    }
    if skills_lower.iter().any(|s| s == "sql") {
        technical_questions.push("How would you optimize a slow-running SQL query?".to_string());
    }

    if technical_questions.is_empty() {
        technical_questions = vec![
            "Walk me through how you would approach solving a complex technical problem."
                .to_string(),
            "Describe a challenging project you worked on and how you overcame difficulties."
                .to_string(),
            "How do you stay updated with new technologies in your field?".to_string(),
        ];
    }

    let behavioral_questions = vec![
        "Tell me about a time when you had to work with a difficult team member.".to_string(),
        "Describe a situation where you had to learn something new quickly.".to_string(),
        "How do you handle tight deadlines and pressure?".to_string(),
    ];

    let experience_questions = if let Some(entry) = profile.experience.first() {
        let company = if entry.company.is_empty() {
            "your previous company".to_string()
        } else {
            entry.company.clone()
        };
        vec![
            format!(
                "I see you worked at {}. What was your biggest achievement there?",
                company
            ),
            "What motivates you to switch to a new role?".to_string(),
            "Where do you see yourself in 5 years?".to_string(),
        ]
    } else {
        vec![
            "What interests you most about this role?".to_string(),
            "What are your career goals?".to_string(),
            "Why are you looking for a new opportunity?".to_string(),
        ]
    };

    InterviewQuestions {
        technical_questions: truncate(technical_questions),
        behavioral_questions: truncate(behavioral_questions),
        experience_questions: truncate(experience_questions),
    }
}

fn truncate(mut questions: Vec<String>) -> Vec<String> {
    questions.truncate(QUESTIONS_PER_CATEGORY);
    questions
}
