//! Defines the trait and HTTP implementation for the external feedback service.

use serde::Deserialize;

use crate::config::FeedbackConfig;
use crate::error::FeedbackError;
use crate::image_upload::ImageUpload;

/// A trait for any service that can critique an uploaded image.
pub trait FeedbackService {
    /// Submits the image and returns the markdown feedback.
    async fn request_feedback(&self, image: &ImageUpload) -> Result<String, FeedbackError>;
}

/// The structure of the JSON response from the feedback endpoint.
#[derive(Deserialize, Debug)]
struct FeedbackResponse {
    feedback: String,
}

/// Extracts the `feedback` string from a response body.
pub fn decode_feedback(body: &str) -> Result<String, FeedbackError> {
    let resp: FeedbackResponse = serde_json::from_str(body)?;
    Ok(resp.feedback)
}

/// Posts images to the configured endpoint as `multipart/form-data`.
///
/// One attempt per call: no retry, no timeout.
#[derive(Clone, Debug)]
pub struct HttpFeedbackService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFeedbackService {
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint().to_string(),
        }
    }
}

impl FeedbackService for HttpFeedbackService {
    async fn request_feedback(&self, image: &ImageUpload) -> Result<String, FeedbackError> {
        dioxus_logger::tracing::debug!(
            "POST {} ({}, {} bytes)",
            self.endpoint,
            image.name(),
            image.len()
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .multipart(image.to_form())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedbackError::Status(status.as_u16()));
        }

        let body = resp.text().await.map_err(FeedbackError::Body)?;
        decode_feedback(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_feedback_field() {
        let text = decode_feedback(r#"{ "feedback": "**Great anatomy**" }"#).unwrap();
        assert_eq!(text, "**Great anatomy**");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let text = decode_feedback(r#"{"feedback":"ok","model":"x"}"#).unwrap();
        assert_eq!(text, "ok");
    }

    #[test]
    fn missing_or_non_string_feedback_is_malformed() {
        for body in [r#"{"detail":"Not Found"}"#, r#"{"feedback":null}"#, "<html>", ""] {
            assert!(
                matches!(decode_feedback(body), Err(FeedbackError::Decode(_))),
                "{body:?} should not decode"
            );
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod http_tests {
    use super::*;
    use crate::FEEDBACK_ERROR_MESSAGE;
    use axum::extract::Multipart;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    /// Serves `app` on an ephemeral port, returning the feedback URL.
    async fn serve(app: Router) -> FeedbackConfig {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        FeedbackConfig::new(format!("http://{addr}/api/feedback"))
    }

    /// Replies with a description of every multipart field it received.
    async fn describe_upload(mut multipart: Multipart) -> Json<Value> {
        let mut fields = Vec::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let len = field.bytes().await.unwrap().len();
            fields.push(format!("{name}|{file_name}|{content_type}|{len}"));
        }
        Json(json!({ "feedback": fields.join(";") }))
    }

    fn sample() -> ImageUpload {
        ImageUpload::new("panel.png", Some("image/png".to_string()), vec![7u8; 42])
    }

    #[tokio::test]
    async fn sends_file_under_file_field() {
        let app = Router::new().route("/api/feedback", post(describe_upload));
        let service = HttpFeedbackService::new(&serve(app).await);

        let feedback = service.request_feedback(&sample()).await.unwrap();
        assert_eq!(feedback, "file|panel.png|image/png|42");
    }

    #[tokio::test]
    async fn returns_markdown_verbatim() {
        let app = Router::new().route(
            "/api/feedback",
            post(|| async { Json(json!({ "feedback": "**Great anatomy**" })) }),
        );
        let service = HttpFeedbackService::new(&serve(app).await);

        let feedback = service.request_feedback(&sample()).await.unwrap();
        assert_eq!(feedback, "**Great anatomy**");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let app = Router::new().route(
            "/api/feedback",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "feedback": "should not be shown" })),
                )
            }),
        );
        let service = HttpFeedbackService::new(&serve(app).await);

        let err = service.request_feedback(&sample()).await.unwrap_err();
        assert!(matches!(err, FeedbackError::Status(500)), "{err}");
        assert_eq!(err.user_message(), FEEDBACK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn non_json_body_is_an_error() {
        let app = Router::new().route("/api/feedback", post(|| async { "plain text" }));
        let service = HttpFeedbackService::new(&serve(app).await);

        let err = service.request_feedback(&sample()).await.unwrap_err();
        assert!(matches!(err, FeedbackError::Decode(_)), "{err}");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_network_error() {
        // grab a free port, then release it so nothing is listening.
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let config = FeedbackConfig::new(format!("http://{addr}/api/feedback"));
        let service = HttpFeedbackService::new(&config);

        let err = service.request_feedback(&sample()).await.unwrap_err();
        assert!(matches!(err, FeedbackError::Network(_)), "{err}");
        assert_eq!(err.user_message(), FEEDBACK_ERROR_MESSAGE);
    }
}
