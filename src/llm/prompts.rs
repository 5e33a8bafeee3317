//! Prompt templates for the chat collaborator

pub const RESUME_PARSER_SYSTEM: &str = r#"You are a resume parser. Extract structured information from resumes and return it as valid JSON.

Required JSON format:
{
    "name": "Full Name",
    "email": "email@example.com",
    "phone": "phone number",
    "skills": ["skill1", "skill2", "skill3"],
    "experience": [
        {
            "company": "Company Name",
            "role": "Job Title",
            "duration": "X years/months",
            "responsibilities": ["responsibility1", "responsibility2"]
        }
    ],
    "education": ["Degree/Institution"],
    "total_experience_years": 0
}

If information is not found, use null or empty arrays. Return only the JSON object."#;

pub const SKILLS_MATCHER_SYSTEM: &str = r#"You are a skills matching expert. Compare candidate skills with job requirements, deduplicating semantically equivalent skills.

Return JSON with:
{
    "match_score": 0-100,
    "matched_skills": ["skill1", "skill2"],
    "missing_skills": ["skill3", "skill4"],
    "additional_skills": ["skill5", "skill6"],
    "explanation": "Brief explanation of the match"
}

Return only the JSON object."#;

pub const INTERVIEW_GENERATOR_SYSTEM: &str = r#"Generate relevant interview questions based on the candidate's background and job requirements.

Return JSON with:
{
    "technical_questions": ["question1", "question2"],
    "behavioral_questions": ["question1", "question2"],
    "experience_questions": ["question1", "question2"]
}

Return only the JSON object."#;

pub fn resume_parser_user(resume_text: &str) -> String {
    format!("Parse this resume:\n\n{}", resume_text)
}

pub fn skills_matcher_user(candidate_skills: &[String], job_requirements: &[String]) -> String {
    format!(
        "Candidate Skills: {:?}\n\nJob Requirements: {:?}",
        candidate_skills, job_requirements
    )
}

pub fn interview_generator_user(candidate_summary: &str, job_description: &str) -> String {
    format!(
        "Candidate: {}\n\nJob Description: {}",
        candidate_summary, job_description
    )
}
