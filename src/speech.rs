// src/speech.rs — Transcript assembly from speech-capture events
//
// Capture itself is external. A recognizer emits fragments flagged final or
// interim; only the accumulated final text plus the latest interim text are
// graded.

use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechEvent {
    pub is_final: bool,
    pub text: String,
}

impl SpeechEvent {
    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            is_final: true,
            text: text.into(),
        }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            is_final: false,
            text: text.into(),
        }
    }
}

/// Incremental transcript builder. `reset` makes it reusable for the next
/// answer.
#[derive(Debug, Clone, Default)]
pub struct TranscriptAccumulator {
    finalized: String,
    interim: String,
}

impl TranscriptAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SpeechEvent) {
        if event.is_final {
            let fragment = event.text.trim();
            if !fragment.is_empty() {
                if !self.finalized.is_empty() {
                    self.finalized.push(' ');
                }
                self.finalized.push_str(fragment);
            }
            self.interim.clear();
        } else {
            // Interim results replace each other until finalized.
            self.interim = event.text;
        }
    }

    /// Final text plus pending interim text, trimmed.
    pub fn current(&self) -> String {
        format!("{} {}", self.finalized, self.interim.trim())
            .trim()
            .to_string()
    }

    pub fn reset(&mut self) {
        self.finalized.clear();
        self.interim.clear();
    }
}

/// Drain a speech event stream into the transcript to grade.
pub async fn accumulate<S>(events: S) -> String
where
    S: Stream<Item = SpeechEvent>,
{
    let mut acc = TranscriptAccumulator::new();
    futures::pin_mut!(events);
    while let Some(event) = events.next().await {
        acc.push(event);
    }
    acc.current()
}
