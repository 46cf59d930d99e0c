// src/cli/grade.rs — One-shot grading of an answer or transcript file

use std::io::Read;
use std::path::Path;

use super::render;
use crate::core::types::{InterviewType, PracticeFlow};
use crate::core::Coach;

const UPLOAD_QUESTION: &str = "Uploaded interview transcript";

/// Where the answer text comes from.
pub enum AnswerSource {
    Inline(String),
    File(String),
    Stdin,
}

impl AnswerSource {
    pub fn flow(&self) -> PracticeFlow {
        match self {
            AnswerSource::File(_) => PracticeFlow::TranscriptUpload,
            AnswerSource::Inline(_) | AnswerSource::Stdin => PracticeFlow::Simulated,
        }
    }

    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            AnswerSource::Inline(text) => Ok(text.clone()),
            AnswerSource::File(path) => std::fs::read_to_string(Path::new(path))
                .map_err(|e| anyhow::anyhow!("failed to read transcript {path}: {e}")),
            AnswerSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

pub async fn run_grade(
    coach: &Coach,
    question: Option<String>,
    kind: InterviewType,
    source: AnswerSource,
    json: bool,
) -> anyhow::Result<()> {
    let flow = source.flow();
    let transcript = source.read()?;

    // Uploaded transcripts are labeled as such regardless of --type.
    let (kind, question) = match flow {
        PracticeFlow::TranscriptUpload => (
            InterviewType::Transcript,
            question.unwrap_or_else(|| UPLOAD_QUESTION.to_string()),
        ),
        PracticeFlow::Simulated => {
            let question = question
                .ok_or_else(|| anyhow::anyhow!("--question is required when grading an answer"))?;
            (kind, question)
        }
    };

    let done = coach.complete(&question, &transcript, kind, flow).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&done.session)?);
    } else {
        println!("{}", render::format_completed(&done));
        println!("{}", render::format_dashboard(&coach.profile().await));
    }
    Ok(())
}
