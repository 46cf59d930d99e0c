// src/core/types.rs — Core domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::progression::store::SessionStore;
use crate::util::truncate_chars;

/// Characters of the transcript kept in a feedback snippet.
pub const SNIPPET_CHARS: usize = 50;

/// Experience required for the first level-up.
pub const FIRST_LEVEL_XP: u32 = 500;

/// One graded dimension of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMetric {
    pub score: u8,
    pub analysis: String,
    pub tips: Vec<String>,
}

impl FeedbackMetric {
    pub fn new(score: u8, analysis: impl Into<String>, tips: Vec<String>) -> Self {
        Self {
            score,
            analysis: analysis.into(),
            tips,
        }
    }
}

/// Complete, normalized feedback for one graded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFeedback {
    pub overall_score: u8,
    pub summary: String,
    pub clarity: FeedbackMetric,
    pub content: FeedbackMetric,
    pub confidence: FeedbackMetric,
    pub transcript_snippet: String,
}

impl SessionFeedback {
    /// Canned result for answers too short to send for grading.
    pub fn too_short(transcript: &str) -> Self {
        let metric = |analysis: &str, tip: &str| {
            FeedbackMetric::new(0, analysis, vec![tip.to_string()])
        };
        Self {
            overall_score: 0,
            summary: "The answer was too short to analyze. Try speaking for at least a few sentences."
                .into(),
            clarity: metric(
                "Not enough speech to judge clarity.",
                "Speak in complete sentences.",
            ),
            content: metric(
                "Not enough content to evaluate.",
                "Use the STAR method: Situation, Task, Action, Result.",
            ),
            confidence: metric(
                "Not enough speech to judge confidence.",
                "Take a breath and keep going for at least 30 seconds.",
            ),
            transcript_snippet: snippet(transcript),
        }
    }

    /// Result returned when the grading service could not be reached or
    /// never produced a usable answer.
    pub fn failure(message: &str) -> Self {
        let summary = if message.trim().is_empty() {
            "Unable to analyze the answer. Please try again.".to_string()
        } else {
            message.to_string()
        };
        let metric = || FeedbackMetric::new(0, "Connection error.", Vec::new());
        Self {
            overall_score: 0,
            summary,
            clarity: metric(),
            content: metric(),
            confidence: metric(),
            transcript_snippet: "Failed.".into(),
        }
    }

    pub fn metrics(&self) -> [(&'static str, &FeedbackMetric); 3] {
        [
            ("Clarity", &self.clarity),
            ("Content", &self.content),
            ("Confidence", &self.confidence),
        ]
    }
}

/// First `SNIPPET_CHARS` characters of the trimmed transcript, with `...`
/// appended when anything was cut.
pub fn snippet(transcript: &str) -> String {
    let trimmed = transcript.trim();
    let cut = truncate_chars(trimmed, SNIPPET_CHARS);
    if cut.len() < trimmed.len() {
        format!("{cut}...")
    } else {
        cut.to_string()
    }
}

/// Interview category. `Transcript` labels uploaded transcripts that were
/// not answered against the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterviewType {
    Behavioral,
    Technical,
    Situational,
    Leadership,
    Transcript,
}

impl InterviewType {
    /// Categories that have practice questions.
    pub const PRACTICE: [InterviewType; 4] = [
        InterviewType::Behavioral,
        InterviewType::Technical,
        InterviewType::Situational,
        InterviewType::Leadership,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Behavioral => "Behavioral",
            InterviewType::Technical => "Technical",
            InterviewType::Situational => "Situational",
            InterviewType::Leadership => "Leadership",
            InterviewType::Transcript => "Transcript",
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "behavioral" | "behavioural" => Ok(InterviewType::Behavioral),
            "technical" => Ok(InterviewType::Technical),
            "situational" => Ok(InterviewType::Situational),
            "leadership" => Ok(InterviewType::Leadership),
            "transcript" => Ok(InterviewType::Transcript),
            other => Err(format!(
                "unknown interview type '{other}' (expected behavioral, technical, situational, leadership, or transcript)"
            )),
        }
    }
}

/// How an answer was produced; decides the XP multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PracticeFlow {
    /// Answered live against a question.
    Simulated,
    /// Uploaded transcript of a past interview.
    TranscriptUpload,
}

/// A completed, graded practice answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    pub question: String,
    pub score: u8,
    pub feedback: SessionFeedback,
}

impl InterviewSession {
    pub fn new(
        interview_type: InterviewType,
        question: impl Into<String>,
        feedback: SessionFeedback,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            interview_type,
            question: question.into(),
            score: feedback.overall_score,
            feedback,
        }
    }
}

/// The candidate's progression state. Only replaced wholesale through the
/// ledger functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub level: u32,
    pub xp: u32,
    pub next_level_xp: u32,
    pub total_interviews: u32,
    pub average_score: u8,
    pub history: SessionStore,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_first_level_xp(name, FIRST_LEVEL_XP)
    }

    pub fn with_first_level_xp(name: impl Into<String>, first_level_xp: u32) -> Self {
        Self {
            name: name.into(),
            level: 0,
            xp: 0,
            next_level_xp: first_level_xp.max(1),
            total_interviews: 0,
            average_score: 0,
            history: SessionStore::new(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new("Candidate")
    }
}
