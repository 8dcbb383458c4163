use std::env;

/// Where uploads are sent when nothing overrides it.
pub const DEFAULT_FEEDBACK_ENDPOINT: &str = "http://127.0.0.1:8000/api/feedback";

/// Name of the variable that overrides the endpoint, at runtime or at build time.
pub const FEEDBACK_ENDPOINT_VAR: &str = "FEEDBACK_ENDPOINT";

/// Connection settings for the feedback service.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FeedbackConfig {
    endpoint: String,
}

impl FeedbackConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Creates a FeedbackConfig from the environment, with the in-code
    /// default as the lowest priority.
    ///
    /// # Resolution order
    /// - `FEEDBACK_ENDPOINT` in the process environment (desktop builds).
    /// - `FEEDBACK_ENDPOINT` captured at compile time (web builds have no
    ///   process environment).
    /// - [`DEFAULT_FEEDBACK_ENDPOINT`].
    ///
    /// Blank values are skipped.
    pub fn from_env() -> Self {
        Self::resolve(
            env::var(FEEDBACK_ENDPOINT_VAR).ok(),
            option_env!("FEEDBACK_ENDPOINT"),
        )
    }

    fn resolve(runtime: Option<String>, build_time: Option<&str>) -> Self {
        let endpoint = runtime
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                build_time
                    .filter(|v| !v.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_FEEDBACK_ENDPOINT.to_string());

        Self::new(endpoint.trim())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_service() {
        let config = FeedbackConfig::resolve(None, None);
        assert_eq!(config.endpoint(), "http://127.0.0.1:8000/api/feedback");
    }

    #[test]
    fn runtime_value_wins_over_build_time() {
        let config = FeedbackConfig::resolve(
            Some("http://runtime:1/api/feedback".to_string()),
            Some("http://build:2/api/feedback"),
        );
        assert_eq!(config.endpoint(), "http://runtime:1/api/feedback");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = FeedbackConfig::resolve(Some("   ".to_string()), Some(""));
        assert_eq!(config.endpoint(), DEFAULT_FEEDBACK_ENDPOINT);

        let config = FeedbackConfig::resolve(None, Some(" http://build:2/x "));
        assert_eq!(config.endpoint(), "http://build:2/x");
    }
}
