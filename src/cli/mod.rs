// src/cli/mod.rs — CLI definition (clap derive)

pub mod grade;
pub mod practice;
pub mod render;
pub mod status;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::core::types::{InterviewType, UserProfile};
use crate::core::Coach;
use crate::grading::GradingClient;
use crate::infra::config::Config;
use crate::provider::google::GoogleProvider;

#[derive(Parser)]
#[command(
    name = "coach",
    about = "Practice interview answers and get AI-graded feedback",
    version
)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Grading model to use (overrides config)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive practice: answer questions and level up
    Practice {
        /// Interview type (behavioral, technical, situational, leadership).
        /// Mixed when omitted.
        #[arg(short = 't', long = "type")]
        kind: Option<InterviewType>,
        /// Number of questions to answer
        #[arg(short, long, default_value = "3")]
        rounds: u32,
        /// Name shown on the dashboard
        #[arg(long)]
        name: Option<String>,
    },
    /// Grade a single answer or an uploaded transcript
    Grade {
        /// The interview question being answered
        #[arg(short, long)]
        question: Option<String>,
        /// Interview type for the question
        #[arg(short = 't', long = "type", default_value = "behavioral")]
        kind: InterviewType,
        /// Answer text
        #[arg(short, long, conflicts_with_all = ["file", "stdin"])]
        answer: Option<String>,
        /// Transcript file of a past interview (transcript-upload flow)
        #[arg(short, long, conflicts_with = "stdin")]
        file: Option<String>,
        /// Read the answer from stdin
        #[arg(long)]
        stdin: bool,
        /// Print the session as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// List the built-in practice questions
    Questions {
        #[arg(short = 't', long = "type")]
        kind: Option<InterviewType>,
    },
    /// Show the resolved configuration
    Config,
}

/// Wire the Gemini provider, grading client, and a fresh profile.
pub fn build_coach(config: &Config, name: Option<String>) -> Coach {
    let api_key = config.api_key();
    if api_key.is_none() {
        tracing::warn!("No grading API key found; answers will come back as failures");
    }

    let provider = Arc::new(GoogleProvider::with_base_url(
        api_key,
        config.grading.base_url.clone(),
    ));
    let grader = GradingClient::from_config(provider, &config.grading);
    let profile = UserProfile::with_first_level_xp(
        name.unwrap_or_else(|| config.profile.name.clone()),
        config.profile.first_level_xp,
    );

    Coach::new(grader, profile).with_rewards(config.rewards.clone())
}

/// Print the question bank.
pub fn list_questions(kind: Option<InterviewType>) {
    let kinds: Vec<InterviewType> = match kind {
        Some(k) => vec![k],
        None => InterviewType::PRACTICE.to_vec(),
    };
    for kind in kinds {
        println!("{kind}");
        let questions = crate::questions::questions_for(kind);
        if questions.is_empty() {
            println!("  (no built-in questions; use `coach grade --file`)");
        }
        for (i, q) in questions.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, q);
        }
        println!();
    }
}
