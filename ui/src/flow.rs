//! The two asynchronous steps behind the form: reading a picked file for its
//! preview, and sending it for feedback.

use api::{FeedbackError, FeedbackService, ImageUpload};
use dioxus::html::FileData;
use dioxus_logger::tracing::{info, warn};

use crate::preview;
use crate::state::{SubmitOutcome, SubmitTicket};

/// A handle to a user-selected file that can be read on demand.
pub trait FileSource: Clone {
    fn file_name(&self) -> String;

    /// Reads the whole file.
    async fn load(&self) -> Result<ImageUpload, FeedbackError>;
}

impl FileSource for FileData {
    fn file_name(&self) -> String {
        self.name()
    }

    async fn load(&self) -> Result<ImageUpload, FeedbackError> {
        let bytes = self
            .read_bytes()
            .await
            .map_err(|e| FeedbackError::Read(e.to_string()))?;
        Ok(ImageUpload::new(self.name(), self.content_type(), bytes.to_vec()))
    }
}

/// Reads `file` and encodes it as a `data:` URI.
pub async fn load_preview<F: FileSource>(file: &F) -> Result<String, FeedbackError> {
    let upload = file.load().await?;
    Ok(preview::to_data_uri(upload.content_type(), upload.bytes()))
}

/// Uploads the ticket's file and waits for the service to answer.
pub async fn run_submission<S, F>(service: &S, ticket: SubmitTicket<F>) -> SubmitOutcome
where
    S: FeedbackService,
    F: FileSource,
{
    let SubmitTicket { generation, file } = ticket;

    let result = match file.load().await {
        Ok(upload) => service.request_feedback(&upload).await,
        Err(e) => Err(e),
    };

    match &result {
        Ok(feedback) => info!(
            "feedback #{generation} for {}: {} chars",
            file.file_name(),
            feedback.len()
        ),
        Err(e) => warn!("feedback #{generation} for {} failed: {e}", file.file_name()),
    }

    SubmitOutcome { generation, result }
}
