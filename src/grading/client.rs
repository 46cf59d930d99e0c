// src/grading/client.rs — Grading round trip with retry and failure templates

use std::sync::Arc;

use super::parser::parse_feedback;
use super::prompt::{build_request, is_too_short};
use crate::core::types::SessionFeedback;
use crate::infra::config::GradingConfig;
use crate::infra::errors::CoachError;
use crate::provider::retry::{RetryPolicy, Sleeper, TokioSleeper};
use crate::provider::ModelProvider;

pub struct GradingClient {
    provider: Arc<dyn ModelProvider>,
    model: String,
    temperature: f32,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl GradingClient {
    pub fn new(provider: Arc<dyn ModelProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.7,
            policy: RetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    pub fn from_config(provider: Arc<dyn ModelProvider>, config: &GradingConfig) -> Self {
        Self::new(provider, config.model.clone())
            .with_temperature(config.temperature)
            .with_retry_policy(config.retry.to_policy())
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Grade one answer. Never fails: short answers get canned feedback
    /// without a network call, and unrecoverable errors become the failure
    /// template.
    pub async fn grade(
        &self,
        question: &str,
        transcript: &str,
        interview_type: &str,
    ) -> SessionFeedback {
        if is_too_short(transcript) {
            tracing::debug!("Transcript too short, skipping grading call");
            return SessionFeedback::too_short(transcript);
        }

        match self.try_grade(question, transcript, interview_type).await {
            Ok(feedback) => feedback,
            Err(e) => {
                tracing::error!(provider = self.provider.id(), "Grading failed: {}", e);
                SessionFeedback::failure(&e.to_string())
            }
        }
    }

    /// One full round trip including retries, surfacing the terminal error.
    pub async fn try_grade(
        &self,
        question: &str,
        transcript: &str,
        interview_type: &str,
    ) -> Result<SessionFeedback, CoachError> {
        let request = build_request(question, transcript, interview_type)
            .into_chat_request(&self.model, self.temperature);

        self.policy
            .run(self.sleeper.as_ref(), self.provider.id(), |attempt| {
                let request = request.clone();
                async move {
                    tracing::debug!(attempt, "Requesting grade");
                    let response = self.provider.chat(request).await?;
                    let feedback = parse_feedback(&response.content, transcript)?;
                    tracing::info!(
                        overall = feedback.overall_score,
                        tokens = response.usage.total(),
                        "Answer graded"
                    );
                    Ok(feedback)
                }
            })
            .await
    }
}
