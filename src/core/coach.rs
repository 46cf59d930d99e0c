// src/core/coach.rs — Top-level controller for practice sessions
//
// Owns the single UserProfile. A completed answer is graded, turned into an
// InterviewSession, and folded into the profile in one replace under the
// lock: award -> record_session -> prepend to history.

use tokio::sync::Mutex;

use crate::core::types::{InterviewSession, InterviewType, PracticeFlow, UserProfile};
use crate::grading::GradingClient;
use crate::infra::config::RewardsConfig;
use crate::progression::{award, record_session};

/// Result of one completed answer, with the progression delta for display.
#[derive(Debug, Clone)]
pub struct CompletedSession {
    pub session: InterviewSession,
    pub xp_awarded: u32,
    pub levels_gained: u32,
}

pub struct Coach {
    grader: GradingClient,
    rewards: RewardsConfig,
    profile: Mutex<UserProfile>,
}

impl Coach {
    pub fn new(grader: GradingClient, profile: UserProfile) -> Self {
        Self {
            grader,
            rewards: RewardsConfig::default(),
            profile: Mutex::new(profile),
        }
    }

    pub fn with_rewards(mut self, rewards: RewardsConfig) -> Self {
        self.rewards = rewards;
        self
    }

    /// Snapshot of the current profile.
    pub async fn profile(&self) -> UserProfile {
        self.profile.lock().await.clone()
    }

    /// Grade an answer and record it. Always produces a session; grading
    /// failures are recorded with a score of 0.
    pub async fn complete(
        &self,
        question: &str,
        transcript: &str,
        interview_type: InterviewType,
        flow: PracticeFlow,
    ) -> CompletedSession {
        let feedback = self
            .grader
            .grade(question, transcript, interview_type.as_str())
            .await;
        let session = InterviewSession::new(interview_type, question, feedback);
        self.apply(session, flow).await
    }

    /// Fold an already-graded session into the profile.
    pub async fn apply(&self, session: InterviewSession, flow: PracticeFlow) -> CompletedSession {
        let xp_awarded = flow.xp_for(session.score, &self.rewards);

        let mut guard = self.profile.lock().await;
        let before_level = guard.level;
        let mut next = record_session(&award(&guard, xp_awarded), &session);
        next.history.record(session.clone());
        *guard = next;

        tracing::info!(
            session = %session.id,
            score = session.score,
            xp = xp_awarded,
            level = guard.level,
            "Session recorded"
        );

        CompletedSession {
            levels_gained: guard.level - before_level,
            session,
            xp_awarded,
        }
    }
}
