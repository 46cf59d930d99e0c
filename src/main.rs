// src/main.rs — interview-coach entry point

use clap::Parser;

use interview_coach::cli::grade::AnswerSource;
use interview_coach::cli::{self, Cli, Commands};
use interview_coach::infra::config::Config;
use interview_coach::infra::logger;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    if let Some(model) = cli.model {
        config.grading.model = model;
    }

    match cli.command {
        Commands::Questions { kind } => {
            cli::list_questions(kind);
            Ok(())
        }
        Commands::Config => {
            cli::status::show_config(&config, cli.config.as_deref().map(std::path::Path::new))
        }
        Commands::Practice { kind, rounds, name } => {
            let coach = cli::build_coach(&config, name);
            cli::practice::run_practice(&coach, kind, rounds).await
        }
        Commands::Grade {
            question,
            kind,
            answer,
            file,
            stdin,
            json,
        } => {
            let source = match (answer, file) {
                (Some(text), _) => AnswerSource::Inline(text),
                (None, Some(path)) => AnswerSource::File(path),
                (None, None) if stdin => AnswerSource::Stdin,
                (None, None) => anyhow::bail!("provide --answer, --file, or --stdin"),
            };
            let coach = cli::build_coach(&config, None);
            cli::grade::run_grade(&coach, question, kind, source, json).await
        }
    }
}
