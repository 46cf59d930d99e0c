// src/progression/ledger.rs — XP, levels, and running averages
//
// Pure functions over UserProfile: each takes the current state and returns
// the next one. Callers replace the whole profile with the result.

use crate::core::types::{InterviewSession, PracticeFlow, UserProfile};
use crate::infra::config::RewardsConfig;

/// Each level needs 1.2x the XP of the last, as an exact integer ratio.
const LEVEL_GROWTH_NUM: u64 = 6;
const LEVEL_GROWTH_DEN: u64 = 5;

/// Add `amount` XP, rolling excess over into as many levels as it covers.
/// Postcondition: `0 <= xp < next_level_xp`.
pub fn award(profile: &UserProfile, amount: u32) -> UserProfile {
    let mut next = profile.clone();
    let mut xp = u64::from(next.xp) + u64::from(amount);
    let mut threshold = u64::from(next.next_level_xp.max(1));

    while xp >= threshold {
        xp -= threshold;
        next.level = next.level.saturating_add(1);
        threshold = grow_threshold(threshold);
        tracing::info!(level = next.level, next_level_xp = threshold, "Level up");
    }

    next.xp = xp as u32;
    next.next_level_xp = threshold.min(u64::from(u32::MAX)) as u32;
    next
}

fn grow_threshold(threshold: u64) -> u64 {
    let grown = threshold * LEVEL_GROWTH_NUM / LEVEL_GROWTH_DEN;
    // Keep the curve strictly increasing even for tiny thresholds.
    grown.max(threshold + 1).min(u64::from(u32::MAX))
}

/// Count the session and fold its score into the running average.
///
/// The average is updated incrementally from the previous rounded value,
/// so it can drift slightly from the exact mean of all scores. That drift
/// is accepted.
pub fn record_session(profile: &UserProfile, session: &InterviewSession) -> UserProfile {
    let mut next = profile.clone();
    let old_count = u64::from(next.total_interviews);
    let new_count = old_count + 1;
    let total = u64::from(next.average_score) * old_count + u64::from(session.score);

    next.total_interviews = next.total_interviews.saturating_add(1);
    next.average_score = (total as f64 / new_count as f64).round().min(100.0) as u8;
    next
}

/// Fraction of the way to the next level, in [0, 1).
pub fn level_progress(profile: &UserProfile) -> f64 {
    f64::from(profile.xp) / f64::from(profile.next_level_xp.max(1))
}

impl PracticeFlow {
    pub fn multiplier(&self, rewards: &RewardsConfig) -> u32 {
        match self {
            PracticeFlow::Simulated => rewards.simulated_multiplier,
            PracticeFlow::TranscriptUpload => rewards.transcript_multiplier,
        }
    }

    /// XP earned for an answer with the given overall score.
    pub fn xp_for(&self, overall_score: u8, rewards: &RewardsConfig) -> u32 {
        u32::from(overall_score).saturating_mul(self.multiplier(rewards))
    }
}
