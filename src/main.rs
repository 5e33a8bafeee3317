//! Candidate screener: resume parsing, skills matching, scoring and ranking

mod cli;
mod config;
mod error;
mod input;
mod llm;
mod output;
mod screening;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, ScreenerError};
use indicatif::{ProgressBar, ProgressStyle};
use input::manager::InputManager;
use llm::client::LlmClient;
use log::{error, info, warn};
use output::formatter;
use output::report::{PoolEntry, PoolReport, ScreeningReport};
use screening::candidate::CandidateProfile;
use screening::interview::{self, InterviewQuestions};
use screening::ranker::CandidateRanker;
use screening::skills::{self, SkillsMatchResult};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Screen {
            resume,
            job,
            output,
            save,
            no_llm_match,
            no_interview,
        } => {
            validate_inputs(&resume, &job)?;
            let output_format =
                cli::parse_output_format(&output).map_err(ScreenerError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;
            info!(
                "Extracted {} chars of resume text, {} chars of job text",
                resume_text.len(),
                job_text.len()
            );

            let client = LlmClient::from_config(&config)?;
            let report = screen_candidate(
                &client,
                &config,
                &resume.to_string_lossy(),
                &resume_text,
                &job_text,
                no_llm_match,
                no_interview || !config.output.include_interview_questions,
            )
            .await?;

            emit(
                formatter::format_screening_report(&report, &output_format)?,
                &output_format,
                save.as_deref(),
            )
            .await
        }

        Commands::Rank {
            job,
            resumes,
            output,
            no_llm_match,
        } => {
            let output_format =
                cli::parse_output_format(&output).map_err(ScreenerError::InvalidInput)?;
            for resume in &resumes {
                cli::validate_file_extension(resume, &["pdf", "txt", "md"])
                    .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;
            }
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| ScreenerError::InvalidInput(format!("Job description file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text(&job).await?;

            let client = Arc::new(LlmClient::from_config(&config)?);
            let config = Arc::new(config);
            let job_text = Arc::new(job_text);

            // Candidates are independent up to the final pool ranking, so
            // each resume is screened in its own task.
            let mut handles = Vec::new();
            for resume in resumes {
                let client = Arc::clone(&client);
                let config = Arc::clone(&config);
                let job_text = Arc::clone(&job_text);
                handles.push(tokio::spawn(async move {
                    let mut manager = InputManager::new();
                    let resume_text = manager.extract_text(&resume).await?;
                    screen_candidate(
                        &client,
                        &config,
                        &resume.to_string_lossy(),
                        &resume_text,
                        &job_text,
                        no_llm_match,
                        true,
                    )
                    .await
                }));
            }

            let mut entries = Vec::new();
            for handle in handles {
                let report = handle
                    .await
                    .map_err(|e| ScreenerError::InvalidInput(format!("screening task failed: {}", e)))??;
                entries.push(PoolEntry {
                    candidate_name: report.candidate.display_name().to_string(),
                    resume_path: report.resume_path.clone(),
                    ranking: report.ranking,
                });
            }

            // Ranking needs the complete batch; it is not incremental
            let ranker = CandidateRanker::new(config.scoring)?;
            let rankings: Vec<_> = entries.iter().map(|e| e.ranking.clone()).collect();
            let ranked = ranker.rank_pool(rankings);

            let mut ranked_entries: Vec<PoolEntry> = Vec::new();
            for ranking in ranked {
                // Stable ranking preserves score identity, so the first
                // unconsumed entry with this score is the right one
                let position = entries
                    .iter()
                    .position(|e| e.ranking.final_score == ranking.final_score)
                    .unwrap_or(0);
                let mut entry = entries.remove(position);
                entry.ranking = ranking;
                ranked_entries.push(entry);
            }

            let job_requirements = skills::extract_job_requirements(&job_text);
            let report = PoolReport::new(job_requirements, ranked_entries);
            emit(
                formatter::format_pool_report(&report, &output_format)?,
                &output_format,
                None,
            )
            .await
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ScreenerError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::default().save()?;
                    println!("Configuration reset to defaults");
                }
                ConfigAction::Path => {
                    println!("{}", Config::config_path().display());
                }
            }
            Ok(())
        }
    }
}

fn validate_inputs(resume: &PathBuf, job: &PathBuf) -> Result<()> {
    cli::validate_file_extension(resume, &["pdf", "txt", "md"])
        .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;
    cli::validate_file_extension(job, &["txt", "md"])
        .map_err(|e| ScreenerError::InvalidInput(format!("Job description file: {}", e)))?;
    Ok(())
}

/// Run the full screening pipeline for one candidate: parse, match, score,
/// and optionally generate interview questions.
async fn screen_candidate(
    client: &LlmClient,
    config: &Config,
    resume_path: &str,
    resume_text: &str,
    job_text: &str,
    no_llm_match: bool,
    skip_interview: bool,
) -> Result<ScreeningReport> {
    let spinner = progress_spinner("Parsing resume");
    let profile = client.parse_resume(resume_text).await?;
    profile.validate()?;
    spinner.finish_with_message(format!("Parsed resume for {}", profile.display_name()));

    let job_requirements = skills::extract_job_requirements(job_text);
    info!("Extracted {} job requirements", job_requirements.len());

    let (skills_match, used_fallback) =
        match_skills(client, &profile, &job_requirements, no_llm_match).await;

    let ranker = CandidateRanker::new(config.scoring)?;
    let ranking = ranker.score(&profile, &skills_match, Some(job_text));
    info!(
        "Final score for {}: {:.1}",
        profile.display_name(),
        ranking.final_score
    );

    let interview_questions = if skip_interview {
        None
    } else {
        Some(generate_interview_questions(client, &profile, job_text).await)
    };

    Ok(ScreeningReport::new(
        resume_path.to_string(),
        profile,
        job_requirements,
        skills_match,
        ranking,
        interview_questions,
        used_fallback,
    ))
}

/// Semantic matching with mandatory local fallback. A single failed call
/// falls back immediately; there are no retries.
async fn match_skills(
    client: &LlmClient,
    profile: &CandidateProfile,
    job_requirements: &[String],
    no_llm_match: bool,
) -> (SkillsMatchResult, bool) {
    if !no_llm_match {
        match client.match_skills(&profile.skills, job_requirements).await {
            Ok(result) => return (result, false),
            Err(e) => warn!("LLM skills matching failed, using local estimator: {}", e),
        }
    }
    (
        skills::estimate_skills_match(&profile.skills, job_requirements),
        true,
    )
}

async fn generate_interview_questions(
    client: &LlmClient,
    profile: &CandidateProfile,
    job_text: &str,
) -> InterviewQuestions {
    match client.interview_questions(profile, job_text).await {
        Ok(questions) if !questions.is_empty() => questions,
        Ok(_) => {
            warn!("LLM returned no interview questions, using templates");
            interview::template_questions(profile)
        }
        Err(e) => {
            warn!("Interview question generation failed, using templates: {}", e);
            interview::template_questions(profile)
        }
    }
}

async fn emit(content: String, format: &OutputFormat, save: Option<&std::path::Path>) -> Result<()> {
    if let Some(path) = save {
        tokio::fs::write(path, &content).await?;
        println!("Report saved to {}", path.display());
        if matches!(format, OutputFormat::Console) {
            println!("{}", content);
        }
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn progress_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
