// src/progression/store.rs — In-memory session history, most recent first

use serde::{Deserialize, Serialize};

use crate::core::types::InterviewSession;

/// Prepend `session` to `history`. No dedup, no cap.
pub fn record(mut history: Vec<InterviewSession>, session: InterviewSession) -> Vec<InterviewSession> {
    history.insert(0, session);
    history
}

/// Ordered session history backing the dashboard and results views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionStore {
    sessions: Vec<InterviewSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, session: InterviewSession) {
        let sessions = std::mem::take(&mut self.sessions);
        self.sessions = record(sessions, session);
    }

    pub fn recent(&self, n: usize) -> &[InterviewSession] {
        &self.sessions[..n.min(self.sessions.len())]
    }

    pub fn best_score(&self) -> Option<u8> {
        self.sessions.iter().map(|s| s.score).max()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{InterviewType, SessionFeedback};

    fn session(score: u8) -> InterviewSession {
        let mut fb = SessionFeedback::failure("n/a");
        fb.overall_score = score;
        InterviewSession::new(InterviewType::Technical, format!("Q{score}"), fb)
    }

    #[test]
    fn test_record_prepends_and_preserves_prior() {
        let history = vec![session(10), session(20), session(30)];
        let before = history.clone();
        let new = session(99);

        let after = record(history, new.clone());

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[0], new);
        assert_eq!(&after[1..], &before[..]);
    }

    #[test]
    fn test_record_no_dedup() {
        let s = session(50);
        let history = record(record(Vec::new(), s.clone()), s.clone());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_store_recent_and_best() {
        let mut store = SessionStore::new();
        assert!(store.recent(1).is_empty());
        store.record(session(40));
        store.record(session(90));
        store.record(session(65));

        assert_eq!(store.recent(1)[0].score, 65);
        let recent: Vec<u8> = store.recent(2).iter().map(|s| s.score).collect();
        assert_eq!(recent, vec![65, 90]);
        assert_eq!(store.recent(10).len(), 3);
        assert_eq!(store.best_score(), Some(90));
    }

    #[test]
    fn test_store_serializes_as_list() {
        let mut store = SessionStore::new();
        store.record(session(1));
        let json = serde_json::to_value(&store).unwrap();
        assert!(json.is_array());
    }
}
