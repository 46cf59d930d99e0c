// src/infra/errors.rs — Error types for interview-coach

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
    // Transient service errors (retriable)
    #[error("Provider '{provider}' error: {message}")]
    Provider {
        provider: String,
        message: String,
        retriable: bool,
    },

    #[error("Rate limited by '{provider}'")]
    RateLimited { provider: String },

    #[error("Malformed grading response: {0}")]
    MalformedResponse(String),

    // Configuration errors (never retried)
    #[error("No API key configured. Set GEMINI_API_KEY or grading.api_key in config.toml.")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoachError {
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            CoachError::Provider {
                retriable: true,
                ..
            } | CoachError::RateLimited { .. }
                | CoachError::MalformedResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors_are_retriable() {
        assert!(CoachError::RateLimited {
            provider: "google".into()
        }
        .is_retriable());
        assert!(CoachError::Provider {
            provider: "google".into(),
            message: "HTTP 503".into(),
            retriable: true,
        }
        .is_retriable());
        assert!(CoachError::MalformedResponse("missing field".into()).is_retriable());
    }

    #[test]
    fn test_config_errors_are_not_retriable() {
        assert!(!CoachError::MissingApiKey.is_retriable());
        assert!(!CoachError::Config("bad".into()).is_retriable());
        assert!(!CoachError::Provider {
            provider: "google".into(),
            message: "HTTP 400".into(),
            retriable: false,
        }
        .is_retriable());
    }

    #[test]
    fn test_missing_key_message_mentions_env_var() {
        assert!(CoachError::MissingApiKey
            .to_string()
            .contains("GEMINI_API_KEY"));
    }
}
