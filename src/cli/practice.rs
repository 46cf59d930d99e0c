// src/cli/practice.rs — Interactive practice loop

use inquire::{InquireError, Text};

use super::render;
use crate::core::types::{InterviewType, PracticeFlow};
use crate::core::Coach;
use crate::questions;

/// Ask `rounds` questions, grade each answer, and finish with a dashboard.
pub async fn run_practice(
    coach: &Coach,
    kind: Option<InterviewType>,
    rounds: u32,
) -> anyhow::Result<()> {
    let profile = coach.profile().await;
    println!("Welcome, {}. {} question(s) ahead.\n", profile.name, rounds);

    for round in 0..rounds {
        let kind = kind.unwrap_or_else(|| mixed_type(round));
        let Some(question) = questions::random(kind) else {
            anyhow::bail!("no practice questions for {kind}");
        };

        println!("[{}/{}] {} question", round + 1, rounds, kind);
        let answer = match Text::new(question)
            .with_help_message("Type your answer, then press Enter. Esc to stop.")
            .prompt()
        {
            Ok(a) => a,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                println!("Stopping early.");
                break;
            }
            Err(e) => return Err(e.into()),
        };

        eprintln!("Grading...");
        let done = coach
            .complete(question, &answer, kind, PracticeFlow::Simulated)
            .await;
        println!("\n{}", render::format_completed(&done));
    }

    println!("{}", render::format_dashboard(&coach.profile().await));
    Ok(())
}

/// Rotate through the practice categories when none was chosen.
fn mixed_type(round: u32) -> InterviewType {
    let all = InterviewType::PRACTICE;
    all[round as usize % all.len()]
}
