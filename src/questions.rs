// src/questions.rs — Built-in practice question bank

use crate::core::types::InterviewType;

const BEHAVIORAL: &[&str] = &[
    "Tell me about a time you disagreed with a teammate. How did you resolve it?",
    "Describe a project that failed. What did you learn from it?",
    "Tell me about a time you had to meet a tight deadline.",
    "Give an example of a time you received difficult feedback.",
    "Describe a situation where you went beyond what was asked of you.",
];

const TECHNICAL: &[&str] = &[
    "Walk me through how you would design a URL shortener.",
    "Explain the difference between a process and a thread.",
    "How would you find the cause of a memory leak in a production service?",
    "Describe how an HTTP request travels from the browser to your server.",
    "What trade-offs would you weigh when choosing between SQL and NoSQL storage?",
];

const SITUATIONAL: &[&str] = &[
    "What would you do if you realized a release you shipped had a critical bug?",
    "How would you handle a stakeholder who keeps changing requirements?",
    "You have two urgent tasks from two managers. How do you prioritize?",
    "What would you do if a teammate consistently missed their commitments?",
    "How would you approach your first month in this role?",
];

const LEADERSHIP: &[&str] = &[
    "Tell me about a time you led a team through a difficult change.",
    "How do you motivate someone who is disengaged?",
    "Describe a decision you made without full information.",
    "Tell me about a time you had to say no to a senior stakeholder.",
    "How do you build trust with a team you just joined?",
];

/// Questions for a category. `Transcript` has none.
pub fn questions_for(kind: InterviewType) -> &'static [&'static str] {
    match kind {
        InterviewType::Behavioral => BEHAVIORAL,
        InterviewType::Technical => TECHNICAL,
        InterviewType::Situational => SITUATIONAL,
        InterviewType::Leadership => LEADERSHIP,
        InterviewType::Transcript => &[],
    }
}

/// Question at `index`, wrapping around the category's list.
pub fn pick(kind: InterviewType, index: usize) -> Option<&'static str> {
    let questions = questions_for(kind);
    if questions.is_empty() {
        return None;
    }
    Some(questions[index % questions.len()])
}

/// A random question from the category.
pub fn random(kind: InterviewType) -> Option<&'static str> {
    let mut buf = [0u8; 8];
    let seed = match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(e) => {
            tracing::debug!("getrandom failed, using clock seed: {}", e);
            chrono::Utc::now().timestamp_subsec_nanos() as u64
        }
    };
    pick(kind, seed as usize)
}
