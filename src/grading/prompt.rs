// src/grading/prompt.rs — Evaluation request construction

use crate::provider::{ChatRequest, Message, ResponseFormat};

/// Answers with fewer trimmed characters than this are never sent out.
pub const MIN_TRANSCRIPT_CHARS: usize = 10;

/// Fixed coaching instruction sent as the system prompt.
pub const EVALUATION_INSTRUCTION: &str = "\
You are an experienced interview coach grading a candidate's spoken answer.
Score every dimension on a 0-100 scale. Never use a 1-10 scale.
Calibrate against these anchors:
- 30-45: weak answer (vague, off-topic, or missing key points)
- 55-70: decent answer (relevant but thin on specifics or structure)
- 75-90: strong answer (specific, well structured, confident)
For behavioral questions, check whether the answer follows the STAR method \
(Situation, Task, Action, Result).
Be direct and constructive. Keep each tip short and actionable.";

const RESULT_SHAPE: &str = r#"Respond with JSON only, in exactly this shape:
{
  "overallScore": <integer 0-100>,
  "summary": "<two or three sentence overall assessment>",
  "clarity": { "score": <integer 0-100>, "analysis": "<string>", "tips": ["<short tip>", "..."] },
  "content": { "score": <integer 0-100>, "analysis": "<string>", "tips": ["<short tip>", "..."] },
  "confidence": { "score": <integer 0-100>, "analysis": "<string>", "tips": ["<short tip>", "..."] }
}"#;

/// Outbound evaluation request, before it is bound to a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRequest {
    pub system_instruction: String,
    pub user_content: String,
}

impl FeedbackRequest {
    pub fn into_chat_request(self, model: &str, temperature: f32) -> ChatRequest {
        ChatRequest {
            model: model.to_string(),
            system: Some(self.system_instruction),
            messages: vec![Message::user(self.user_content)],
            temperature: Some(temperature),
            response_format: ResponseFormat::Json,
        }
    }
}

/// Build the evaluation request for one answer.
pub fn build_request(question: &str, transcript: &str, interview_type: &str) -> FeedbackRequest {
    let user_content = format!(
        "Interview type: {interview_type}\n\n\
         Question:\n{question}\n\n\
         Candidate's answer (verbatim transcript):\n\"\"\"\n{transcript}\n\"\"\"\n\n\
         {RESULT_SHAPE}"
    );

    FeedbackRequest {
        system_instruction: EVALUATION_INSTRUCTION.to_string(),
        user_content,
    }
}

/// True when the answer is too short to be worth grading.
pub fn is_too_short(transcript: &str) -> bool {
    transcript.trim().chars().count() < MIN_TRANSCRIPT_CHARS
}
