// src/cli/render.rs — Terminal rendering of feedback and progress

use crate::core::types::{SessionFeedback, UserProfile};
use crate::core::CompletedSession;
use crate::progression::level_progress;

const BAR_WIDTH: usize = 20;

/// `[#####.....]` style bar for a value in [0, 1].
pub fn progress_bar(fraction: f64) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

pub fn score_label(score: u8) -> &'static str {
    match score {
        0..=49 => "needs work",
        50..=74 => "decent",
        _ => "strong",
    }
}

pub fn format_feedback(feedback: &SessionFeedback) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Overall: {}/100 ({})\n",
        feedback.overall_score,
        score_label(feedback.overall_score)
    ));
    if !feedback.summary.is_empty() {
        out.push_str(&format!("{}\n", feedback.summary));
    }
    out.push_str(&format!("Answer: \"{}\"\n", feedback.transcript_snippet));

    for (name, metric) in feedback.metrics() {
        out.push_str(&format!(
            "\n{:<11} {:>3}/100 {}\n",
            name,
            metric.score,
            progress_bar(f64::from(metric.score) / 100.0)
        ));
        if !metric.analysis.is_empty() {
            out.push_str(&format!("  {}\n", metric.analysis));
        }
        for tip in &metric.tips {
            out.push_str(&format!("  - {}\n", tip));
        }
    }
    out
}

pub fn format_completed(done: &CompletedSession) -> String {
    let mut out = format_feedback(&done.session.feedback);
    out.push_str(&format!("\n+{} XP", done.xp_awarded));
    if done.levels_gained > 0 {
        out.push_str(&format!(" (level up x{}!)", done.levels_gained));
    }
    out.push('\n');
    out
}

pub fn format_dashboard(profile: &UserProfile) -> String {
    let mut out = format!(
        "{}: level {} {} {}/{} XP\n",
        profile.name,
        profile.level,
        progress_bar(level_progress(profile)),
        profile.xp,
        profile.next_level_xp
    );
    out.push_str(&format!(
        "Interviews: {}   Average score: {}",
        profile.total_interviews, profile.average_score
    ));
    if let Some(best) = profile.history.best_score() {
        out.push_str(&format!("   Best: {best}"));
    }
    out.push('\n');

    if !profile.history.is_empty() {
        out.push_str("\nRecent sessions:\n");
        for s in profile.history.recent(5) {
            out.push_str(&format!(
                "  {}  {:<11} {:>3}  {}\n",
                s.date,
                s.interview_type.as_str(),
                s.score,
                crate::util::truncate_chars(&s.question, 50)
            ));
        }
    }
    out
}
