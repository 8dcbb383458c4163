//! The single failure class of a feedback request.

use thiserror::Error;

/// Shown to the user whenever a feedback request fails, whatever the cause.
pub const FEEDBACK_ERROR_MESSAGE: &str = "Error: Failed to get feedback. Please try again.";

/// Why a feedback request failed.
///
/// The user never sees these variants; every one of them collapses into
/// [`FEEDBACK_ERROR_MESSAGE`]. They exist for logging and tests.
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// The selected file could not be read back from the platform.
    #[error("could not read the selected file: {0}")]
    Read(String),

    /// Connection refused, DNS failure, aborted fetch, etc.
    #[error("feedback request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("feedback service returned HTTP {0}")]
    Status(u16),

    /// The response body could not be read to completion.
    #[error("could not read feedback response body: {0}")]
    Body(reqwest::Error),

    /// The body was not JSON, or had no string `feedback` field.
    #[error("malformed feedback response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FeedbackError {
    /// The text displayed in place of feedback.
    pub fn user_message(&self) -> &'static str {
        FEEDBACK_ERROR_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_collapses_to_one_message() {
        let errors = [
            FeedbackError::Read("gone".to_string()),
            FeedbackError::Status(502),
            FeedbackError::Decode(serde_json::from_str::<u8>("nope").unwrap_err()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), FEEDBACK_ERROR_MESSAGE);
        }
    }

    #[test]
    fn status_is_kept_for_logs() {
        assert_eq!(
            FeedbackError::Status(404).to_string(),
            "feedback service returned HTTP 404"
        );
    }
}
