//! OpenAI-compatible chat completion client

use crate::config::Config;
use crate::error::{Result, ScreenerError};
use crate::llm::prompts;
use crate::screening::candidate::CandidateProfile;
use crate::screening::interview::InterviewQuestions;
use crate::screening::skills::SkillsMatchResult;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 60;

pub struct LlmClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl LlmClient {
    /// Build a client from configuration. Returns `Err` when no API key is
    /// available, which callers route into their fallbacks.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key().ok_or_else(|| {
            ScreenerError::Llm(format!(
                "API key not found in environment variable {}",
                config.llm.api_key_env
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            api_base: config.llm.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: config.llm.model.clone(),
            temperature: config.llm.temperature,
        })
    }

    /// Parse raw resume text into a structured profile.
    ///
    /// Callers should run [`CandidateProfile::validate`] on the result to
    /// surface missing required fields.
    pub async fn parse_resume(&self, resume_text: &str) -> Result<CandidateProfile> {
        let content = self
            .chat(prompts::RESUME_PARSER_SYSTEM, prompts::resume_parser_user(resume_text))
            .await?;
        decode_json(&content)
    }

    /// Semantic skills matching. On failure the caller falls back to the
    /// local containment estimator.
    pub async fn match_skills(
        &self,
        candidate_skills: &[String],
        job_requirements: &[String],
    ) -> Result<SkillsMatchResult> {
        let content = self
            .chat(
                prompts::SKILLS_MATCHER_SYSTEM,
                prompts::skills_matcher_user(candidate_skills, job_requirements),
            )
            .await?;
        let result: SkillsMatchResult = decode_json(&content)?;
        if result.match_score > 100 {
            return Err(ScreenerError::Llm(format!(
                "match_score out of range: {}",
                result.match_score
            )));
        }
        Ok(result)
    }

    /// Generate interview questions. On failure the caller falls back to the
    /// local templates.
    pub async fn interview_questions(
        &self,
        profile: &CandidateProfile,
        job_description: &str,
    ) -> Result<InterviewQuestions> {
        let summary = candidate_summary(profile);
        let content = self
            .chat(
                prompts::INTERVIEW_GENERATOR_SYSTEM,
                prompts::interview_generator_user(&summary, job_description),
            )
            .await?;
        decode_json(&content)
    }

    async fn chat(&self, system: &'static str, user: String) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScreenerError::Llm(format!(
                "chat completion failed with status {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ScreenerError::Llm("chat completion returned no choices".to_string()))?;

        debug!("LLM response: {} chars", content.len());
        Ok(content)
    }
}

/// Decode a JSON payload from free-form model output. Strips markdown code
/// fences and surrounding prose, then hands the object to serde.
pub fn decode_json<T: DeserializeOwned>(content: &str) -> Result<T> {
    let trimmed = content.trim();

    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    let start = trimmed.find('{');
    let end = trimmed.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start < end => {
            Ok(serde_json::from_str(&trimmed[start..=end])?)
        }
        _ => Err(ScreenerError::Llm(
            "response did not contain a JSON object".to_string(),
        )),
    }
}

fn candidate_summary(profile: &CandidateProfile) -> String {
    let roles: Vec<String> = profile
        .experience
        .iter()
        .map(|e| format!("{} at {} ({})", e.role, e.company, e.duration))
        .collect();
    format!(
        "{}; skills: {}; experience: {}; education: {}",
        profile.display_name(),
        profile.skills.join(", "),
        if roles.is_empty() {
            "none listed".to_string()
        } else {
            roles.join("; ")
        },
        if profile.education.is_empty() {
            "none listed".to_string()
        } else {
            profile.education.join(", ")
        },
    )
}
