//! External LLM collaborator: resume parsing, semantic skills matching and
//! interview question generation over an OpenAI-compatible chat API.
//!
//! Every call returns a `Result`; callers treat failure as a normal branch
//! into a deterministic local fallback, never as a fatal condition.

pub mod client;
pub mod prompts;

pub use client::LlmClient;
