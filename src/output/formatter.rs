//! Console, JSON and markdown rendering of screening reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{PoolReport, ScreeningReport};
use colored::Colorize;
use unicode_segmentation::UnicodeSegmentation;

pub fn format_screening_report(report: &ScreeningReport, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console_screening(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => Ok(markdown_screening(report)),
    }
}

pub fn format_pool_report(report: &PoolReport, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console_pool(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => Ok(markdown_pool(report)),
    }
}

fn score_colored(score: f32) -> colored::ColoredString {
    let text = format!("{:.1}", score);
    if score >= 80.0 {
        text.green().bold()
    } else if score >= 65.0 {
        text.cyan().bold()
    } else if score >= 50.0 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

fn console_screening(report: &ScreeningReport) -> String {
    let mut out = String::new();
    let candidate = &report.candidate;
    let ranking = &report.ranking;

    out.push_str(&format!(
        "\n{}\n",
        "═══ Candidate Screening Report ═══".bold()
    ));
    out.push_str(&format!(
        "Candidate: {}\n",
        candidate.display_name().bold()
    ));
    if let Some(email) = &candidate.email {
        out.push_str(&format!("Email: {}\n", email));
    }
    out.push_str(&format!("Resume: {}\n", report.resume_path));
    out.push_str(&format!(
        "Generated: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    out.push_str(&format!(
        "\nFinal score: {} / 100\n",
        score_colored(ranking.final_score)
    ));
    out.push_str(&format!(
        "Recommendation: {} (confidence: {})\n",
        ranking.recommendation.status.to_string().bold(),
        ranking.recommendation.confidence
    ));
    out.push_str(&format!("Next step: {}\n", ranking.recommendation.next_step));

    out.push_str(&format!("\n{}\n", "Component scores".bold()));
    let scores = &ranking.component_scores;
    out.push_str(&format!("  Skills:     {:>5.1}\n", scores.skills_score));
    out.push_str(&format!("  Experience: {:>5.1}\n", scores.experience_score));
    out.push_str(&format!("  Education:  {:>5.1}\n", scores.education_score));
    out.push_str(&format!("  Additional: {:>5.1}\n", scores.additional_score));

    out.push_str(&format!(
        "\n{} ({}%{})\n",
        "Skills match".bold(),
        report.skills_match.match_score,
        if report.used_match_fallback {
            ", local estimate"
        } else {
            ""
        }
    ));
    out.push_str(&format!("  {}\n", report.skills_match.explanation));
    if !report.skills_match.matched_skills.is_empty() {
        out.push_str(&format!(
            "  Matched: {}\n",
            report.skills_match.matched_skills.join(", ").green()
        ));
    }
    if !report.skills_match.missing_skills.is_empty() {
        out.push_str(&format!(
            "  Missing: {}\n",
            report.skills_match.missing_skills.join(", ").red()
        ));
    }
    if !report.skills_match.additional_skills.is_empty() {
        out.push_str(&format!(
            "  Additional: {}\n",
            report.skills_match.additional_skills.join(", ")
        ));
    }

    out.push_str(&format!("\n{}\n", "Strengths".bold()));
    for strength in &ranking.strengths {
        out.push_str(&format!("  {} {}\n", "+".green(), strength));
    }

    if !ranking.areas_for_improvement.is_empty() {
        out.push_str(&format!("\n{}\n", "Areas for improvement".bold()));
        for area in &ranking.areas_for_improvement {
            out.push_str(&format!("  {} {}\n", "-".yellow(), area));
        }
    }

    if let Some(questions) = &report.interview_questions {
        out.push_str(&format!("\n{}\n", "Interview questions".bold()));
        for (title, list) in [
            ("Technical", &questions.technical_questions),
            ("Behavioral", &questions.behavioral_questions),
            ("Experience", &questions.experience_questions),
        ] {
            if !list.is_empty() {
                out.push_str(&format!("  {}:\n", title));
                for question in list {
                    out.push_str(&format!("    • {}\n", question));
                }
            }
        }
    }

    out
}

fn console_pool(report: &PoolReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "═══ Ranked Candidate Pool ═══".bold()));
    out.push_str(&format!(
        "Job requirements: {}\n\n",
        report.job_requirements.join(", ")
    ));
    out.push_str(&format!(
        "{:<6}{:<28}{:>8}  {}\n",
        "Rank", "Candidate", "Score", "Recommendation"
    ));
    for entry in &report.entries {
        out.push_str(&format!(
            "{:<6}{:<28}{:>8}  {}\n",
            entry.ranking.rank.map_or(String::new(), |r| format!("#{}", r)),
            truncate_graphemes(&entry.candidate_name, 26),
            score_colored(entry.ranking.final_score),
            entry.ranking.recommendation.status
        ));
    }
    out
}

fn markdown_screening(report: &ScreeningReport) -> String {
    let mut out = String::new();
    let ranking = &report.ranking;

    out.push_str("# Candidate Screening Report\n\n");
    out.push_str(&format!(
        "- **Candidate:** {}\n- **Resume:** {}\n- **Generated:** {}\n\n",
        report.candidate.display_name(),
        report.resume_path,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    out.push_str(&format!(
        "## Result\n\n**{:.1} / 100** — {} (confidence: {})\n\nNext step: {}\n\n",
        ranking.final_score,
        ranking.recommendation.status,
        ranking.recommendation.confidence,
        ranking.recommendation.next_step
    ));

    out.push_str("## Component Scores\n\n");
    out.push_str("| Component | Score |\n|---|---|\n");
    let scores = &ranking.component_scores;
    out.push_str(&format!("| Skills | {:.1} |\n", scores.skills_score));
    out.push_str(&format!("| Experience | {:.1} |\n", scores.experience_score));
    out.push_str(&format!("| Education | {:.1} |\n", scores.education_score));
    out.push_str(&format!("| Additional | {:.1} |\n\n", scores.additional_score));

    out.push_str(&format!(
        "## Skills Match ({}%)\n\n{}\n\n",
        report.skills_match.match_score, report.skills_match.explanation
    ));
    if !report.skills_match.missing_skills.is_empty() {
        out.push_str(&format!(
            "Missing: {}\n\n",
            report.skills_match.missing_skills.join(", ")
        ));
    }

    out.push_str("## Strengths\n\n");
    for strength in &ranking.strengths {
        out.push_str(&format!("- {}\n", strength));
    }
    out.push('\n');

    if !ranking.areas_for_improvement.is_empty() {
        out.push_str("## Areas for Improvement\n\n");
        for area in &ranking.areas_for_improvement {
            out.push_str(&format!("- {}\n", area));
        }
        out.push('\n');
    }

    if let Some(questions) = &report.interview_questions {
        out.push_str("## Interview Questions\n\n");
        for (title, list) in [
            ("Technical", &questions.technical_questions),
            ("Behavioral", &questions.behavioral_questions),
            ("Experience", &questions.experience_questions),
        ] {
            if !list.is_empty() {
                out.push_str(&format!("### {}\n\n", title));
                for question in list {
                    out.push_str(&format!("1. {}\n", question));
                }
                out.push('\n');
            }
        }
    }

    out
}

fn markdown_pool(report: &PoolReport) -> String {
    let mut out = String::new();
    out.push_str("# Ranked Candidate Pool\n\n");
    out.push_str(&format!(
        "Job requirements: {}\n\n",
        report.job_requirements.join(", ")
    ));
    out.push_str("| Rank | Candidate | Score | Recommendation |\n|---|---|---|---|\n");
    for entry in &report.entries {
        out.push_str(&format!(
            "| {} | {} | {:.1} | {} |\n",
            entry.ranking.rank.map_or(String::new(), |r| r.to_string()),
            entry.candidate_name,
            entry.ranking.final_score,
            entry.ranking.recommendation.status
        ));
    }
    out
}

/// Shorten a string to at most `max` grapheme clusters
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        text.to_string()
    } else {
        format!("{}…", graphemes[..max.saturating_sub(1)].concat())
    }
}
