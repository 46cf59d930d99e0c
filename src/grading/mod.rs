// src/grading/mod.rs — Answer grading pipeline
//
// prompt → provider (with retry) → parser → normalized SessionFeedback.

pub mod client;
pub mod normalize;
pub mod parser;
pub mod prompt;

pub use client::GradingClient;
pub use normalize::normalize_score;
pub use prompt::{build_request, is_too_short, FeedbackRequest};
