//! Structured candidate profile produced by the resume parsing collaborator

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};

/// Parsed resume contents. Treated as read-only by the scoring core.
///
/// All fields default so that partially filled LLM output still decodes;
/// required-field validation happens separately in [`CandidateProfile::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<WorkEntry>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub total_experience_years: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

impl CandidateProfile {
    /// Check that the fields the pipeline cannot work without are present.
    pub fn validate(&self) -> Result<()> {
        if self.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            return Err(ScreenerError::Validation("name".to_string()));
        }
        if self.skills.is_empty() {
            return Err(ScreenerError::Validation("skills".to_string()));
        }
        if self.experience.is_empty() {
            return Err(ScreenerError::Validation("experience".to_string()));
        }
        Ok(())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    pub fn has_email(&self) -> bool {
        self.email.as_deref().map_or(false, |e| !e.trim().is_empty())
    }

    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().map_or(false, |p| !p.trim().is_empty())
    }
}
